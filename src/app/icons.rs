use leptos::prelude::*;

use crate::content::Icon;

/// Stroke paths on a 24x24 grid, drawn with `currentColor`.
fn paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
        Icon::Cpu => &[
            "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M9 9h6v6H9z",
            "M15 2v2",
            "M15 20v2",
            "M2 15h2",
            "M2 9h2",
            "M20 15h2",
            "M20 9h2",
            "M9 2v2",
            "M9 20v2",
        ],
        Icon::Database => &[
            "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
            "M3 5v14a9 3 0 0 0 18 0V5",
            "M3 12a9 3 0 0 0 18 0",
        ],
        Icon::ExternalLink => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        Icon::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        Icon::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        ],
        Icon::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Icon::Server => &[
            "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
            "M6 6h.01",
            "M6 18h.01",
        ],
        Icon::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
    }
}

#[component]
pub fn IconSvg(icon: Icon, class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(icon).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_icon_draws_its_paths() {
        let html = render_html(|| view! { <IconSvg icon=Icon::Menu class="w-6 h-6" /> });
        assert_eq!(html.matches("<path").count(), 3);
        assert!(html.contains("class=\"w-6 h-6\""));
    }
}
