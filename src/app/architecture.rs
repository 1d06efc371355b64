use leptos::prelude::*;

use crate::content::{Icon, StackCategory, ToolList, STACK, TOOLS};

use super::{icons::IconSvg, section_header::SectionHeader};

#[component]
pub fn Architecture() -> impl IntoView {
    view! {
        <section id="architecture" class="py-20 md:py-32 border-b border-zinc-800/50">
            <div class="max-w-6xl mx-auto px-6 lg:px-12">
                <SectionHeader number="02" title="ARCHITECTURE_&_STACK" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 mb-16">
                    {STACK.iter().map(|category| view! { <Category category /> }).collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 pt-12 border-t border-zinc-800/50">
                    {TOOLS.iter().map(|tools| view! { <Tools tools /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SubHeading(icon: Icon, text: &'static str) -> impl IntoView {
    view! {
        <h3 class="font-mono text-emerald-500 text-sm mb-6 flex items-center">
            <IconSvg icon class="w-4 h-4 mr-2" />
            {text}
        </h3>
    }
}

#[component]
fn Category(category: &'static StackCategory) -> impl IntoView {
    view! {
        <div>
            <SubHeading icon=category.icon text=category.heading />
            <div class="space-y-4">
                {category
                    .entries
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="border-l-2 border-zinc-800 pl-4">
                                <div class="font-bold text-zinc-200 mb-1">{entry.name}</div>
                                <div class="text-sm text-zinc-500">{entry.description}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Tools(tools: &'static ToolList) -> impl IntoView {
    view! {
        <div>
            <SubHeading icon=tools.icon text=tools.heading />
            <ul class="font-mono text-sm text-zinc-400 space-y-3">
                {tools.items.iter().map(|item| view! { <li>"> " {*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_stack_and_tools_listed() {
        let html = render_html(|| view! { <Architecture /> });
        assert_eq!(html.matches("<h3").count(), 4);
        assert_eq!(html.matches("<li").count(), 5);
        assert!(html.contains("RabbitMQ"));
        assert!(html.contains("Scalable object storage"));
        assert!(html.contains("BACKEND_INFRASTRUCTURE"));
    }
}
