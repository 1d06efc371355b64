use leptos::{either::Either, prelude::*};

use crate::content::{Span, BIOGRAPHY, PROFILE};

use super::section_header::SectionHeader;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 md:py-32 border-b border-zinc-800/50">
            <div class="max-w-6xl mx-auto px-6 lg:px-12">
                <SectionHeader number="01" title="SYSTEM_OVERVIEW" />
                <div class="grid grid-cols-1 md:grid-cols-12 gap-12">
                    <div class="md:col-span-8">
                        <div class="prose prose-invert prose-zinc max-w-none">
                            {BIOGRAPHY
                                .iter()
                                .enumerate()
                                .map(|(i, spans)| {
                                    let class = if i == 0 {
                                        "text-lg leading-relaxed text-zinc-400"
                                    } else {
                                        "text-lg leading-relaxed text-zinc-400 mt-6"
                                    };
                                    view! { <p class=class>{spans.iter().map(render_span).collect_view()}</p> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="md:col-span-4">
                        <StatusPanel />
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_span(span: &Span) -> impl IntoView {
    match *span {
        Span::Plain(text) => Either::Left(text),
        Span::Metric(text) => Either::Right(view! {
            <span class="text-emerald-400 font-mono text-sm bg-emerald-400/10 px-1 py-0.5 rounded">
                {text}
            </span>
        }),
    }
}

/// Hardcoded status card. The pulse is decoration, not a presence signal.
#[component]
fn StatusPanel() -> impl IntoView {
    view! {
        <div class="border border-zinc-800 p-6 bg-zinc-900/50">
            <div class="font-mono text-xs text-zinc-500 mb-4 uppercase tracking-widest">
                "Current Status"
            </div>
            <div class="flex items-center space-x-3 mb-4">
                <div class="w-2 h-2 bg-emerald-500 rounded-full animate-pulse"></div>
                <span class="font-mono text-sm text-zinc-300">{PROFILE.status}</span>
            </div>
            <div class="h-px bg-zinc-800 my-4"></div>
            <div class="font-mono text-xs text-zinc-500 mb-4 uppercase tracking-widest">
                "Location"
            </div>
            <div class="font-mono text-sm text-zinc-300">{PROFILE.location}</div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_biography_and_status() {
        let html = render_html(|| view! { <About /> });
        assert_eq!(html.matches("<p").count(), 2);
        assert!(html.contains("60s to 1-3s"));
        assert!(html.contains("Active / Opsigo Asia"));
        assert!(html.contains("Pekanbaru, ID"));
    }
}
