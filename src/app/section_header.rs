use leptos::prelude::*;

/// `NN.` label, uppercase title and a rule running to the right edge.
#[component]
pub fn SectionHeader(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4 mb-8 md:mb-12">
            <span class="font-mono text-emerald-500 text-sm tracking-widest">
                {format!("{number}.")}
            </span>
            <h2 class="text-xl md:text-2xl font-bold tracking-tight uppercase">{title}</h2>
            <div class="h-px bg-zinc-800 flex-grow ml-4 md:ml-6"></div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_header_shows_number_and_title() {
        let html = render_html(|| view! { <SectionHeader number="03" title="EXECUTION_LOG" /> });
        assert!(html.contains("03."));
        assert!(html.contains("EXECUTION_LOG"));
        assert_eq!(html.matches("<h2").count(), 1);
    }
}
