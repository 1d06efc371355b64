use leptos::{either::Either, prelude::*};

use crate::content::{Icon, ProjectCaseStudy, PROJECTS};

use super::{icons::IconSvg, section_header::SectionHeader};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 md:py-32">
            <div class="max-w-6xl mx-auto px-6 lg:px-12">
                <SectionHeader number="04" title="CASE_STUDIES" />
                <div class="space-y-16 md:space-y-24">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectCaseStudy) -> impl IntoView {
    let blocks = [
        ("Problem Statement", project.problem_statement, ""),
        ("Architecture", project.architecture_summary, ""),
        ("Key Decisions", project.key_decisions, "md:col-span-2"),
    ];

    view! {
        <article class="border border-zinc-800 bg-[#13151a] p-6 sm:p-8 md:p-12 hover:border-zinc-700 transition-colors">
            <div class="flex flex-col md:flex-row md:items-start justify-between mb-6 md:mb-8">
                <div>
                    <div class="font-mono text-xs text-emerald-500 mb-3 uppercase tracking-widest">
                        {format!("[{}]", project.domain)}
                    </div>
                    <h3 class="text-3xl font-bold text-zinc-100 mb-4">
                        {match project.external_link {
                            Some(href) => {
                                Either::Left(
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="hover:text-emerald-400 transition-colors flex items-center"
                                        >
                                            {project.title}
                                            <IconSvg
                                                icon=Icon::ExternalLink
                                                class="w-5 h-5 ml-3 text-zinc-600"
                                            />
                                        </a>
                                    },
                                )
                            }
                            None => Either::Right(project.title),
                        }}
                    </h3>
                </div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 md:gap-12 mb-8 md:mb-10">
                {blocks
                    .into_iter()
                    .map(|(label, text, span)| {
                        view! {
                            <div class=span>
                                <h4 class="font-mono text-sm text-zinc-500 mb-3 uppercase tracking-widest border-b border-zinc-800 pb-2">
                                    {label}
                                </h4>
                                <p class="text-zinc-400 leading-relaxed">{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-wrap gap-3 pt-6 border-t border-zinc-800/50">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="font-mono text-xs text-zinc-500 bg-zinc-900 px-3 py-1 border border-zinc-800">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    static UNLINKED: ProjectCaseStudy = ProjectCaseStudy {
        title: "Internal Ledger",
        domain: "Finance",
        problem_statement: "Nightly reconciliation ran for hours.",
        architecture_summary: "Batch workers over a shared queue.",
        key_decisions: "Partitioned jobs by account.",
        tags: &["Batch", "Queues"],
        external_link: None,
    };

    #[test]
    fn test_one_card_per_project() {
        let html = render_html(|| view! { <Projects /> });
        assert_eq!(html.matches("<article").count(), PROJECTS.len());
        assert_eq!(html.matches("target=\"_blank\"").count(), 4);
    }

    #[test]
    fn test_linked_title_points_at_project() {
        let html = render_html(|| view! { <ProjectCard project={&PROJECTS[1]} /> });
        assert!(html.contains("href=\"https://citytours.sg\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("CityTours B2C"));
    }

    #[test]
    fn test_unlinked_title_is_plain_text() {
        let html = render_html(|| view! { <ProjectCard project={&UNLINKED} /> });
        assert!(!html.contains("<a ") && !html.contains("href="));
        assert!(html.contains("Internal Ledger"));
        assert!(html.contains("[Finance]"));
        assert_eq!(html.matches("<h4").count(), 3);
    }

    #[test]
    fn test_tags_in_authored_order() {
        let html = render_html(|| view! { <ProjectCard project={&PROJECTS[0]} /> });
        let positions = PROJECTS[0]
            .tags
            .iter()
            .map(|tag| html.find(&format!("{tag}</span>")).expect("tag chip rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
