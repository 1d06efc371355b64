use leptos::prelude::*;

use crate::content::{ExperienceRecord, EXPERIENCE};

use super::section_header::SectionHeader;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 md:py-32 border-b border-zinc-800/50">
            <div class="max-w-6xl mx-auto px-6 lg:px-12">
                <SectionHeader number="03" title="EXECUTION_LOG" />
                <div class="space-y-12 md:space-y-16">
                    {EXPERIENCE.iter().map(|record| view! { <ExperienceEntry record /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceEntry(record: &'static ExperienceRecord) -> impl IntoView {
    view! {
        <article class="grid grid-cols-1 md:grid-cols-12 gap-4 md:gap-8">
            <div class="md:col-span-3 mb-2 md:mb-0">
                <div class="font-mono text-sm text-zinc-500 mb-2">{record.period}</div>
                <div class="font-mono text-xs text-emerald-500 uppercase tracking-widest">
                    {record.organization}
                </div>
            </div>
            <div class="md:col-span-9">
                <h3 class="text-xl font-bold text-zinc-100 mb-6">{record.role}</h3>
                <ul class="space-y-4">
                    {record
                        .highlights
                        .iter()
                        .map(|highlight| {
                            view! {
                                <li class="flex items-start text-zinc-400">
                                    <span class="font-mono text-emerald-500 mr-4 mt-1">"-"</span>
                                    <span class="leading-relaxed">{*highlight}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}
