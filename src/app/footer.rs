use leptos::prelude::*;

use crate::content::{contact_links, current_year};

use super::icons::IconSvg;

#[component]
pub fn Footer() -> impl IntoView {
    // read once per render, so a render after New Year shows the new year
    let year = current_year();

    view! {
        <footer class="bg-[#0a0b0e] py-12 border-t border-zinc-800">
            <div class="max-w-6xl mx-auto px-6 lg:px-12 flex flex-col md:flex-row justify-between items-center">
                <div class="font-mono text-sm text-zinc-500 mb-6 md:mb-0">
                    {format!("SYSTEM_TERMINATED // {year}")}
                </div>
                <div class="flex flex-wrap gap-6 md:gap-8 mt-4 md:mt-0">
                    {contact_links()
                        .into_iter()
                        .map(|link| {
                            let (target, rel) = if link.external {
                                (Some("_blank"), Some("noopener noreferrer"))
                            } else {
                                (None, None)
                            };
                            view! {
                                <a
                                    href=link.href
                                    target=target
                                    rel=rel
                                    class="font-mono text-sm text-zinc-400 hover:text-emerald-400 transition-colors flex items-center"
                                >
                                    <IconSvg icon=link.icon class="w-4 h-4 mr-2" />
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
