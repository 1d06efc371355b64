mod about;
mod architecture;
mod experience;
mod footer;
mod hero;
mod icons;
mod navbar;
mod projects;
mod section_header;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;

use about::About;
use architecture::Architecture;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#0f1115] text-zinc-100 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{} - {}", PROFILE.name, PROFILE.title) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio: navbar, the content sections in reading order, footer.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen selection:bg-emerald-500/30 selection:text-emerald-200">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Architecture />
                <Experience />
                <Projects />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_html<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    use leptos::tachys::view::RenderHtml;

    Owner::new().with(|| f().to_html())
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_reading_order() {
        let html = render_html(|| view! { <HomePage /> });
        let positions = ["id=\"hero\"", "id=\"about\"", "id=\"architecture\"", "id=\"experience\"", "id=\"projects\"", "<footer"]
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_every_nav_anchor_has_a_section() {
        let html = render_html(|| view! { <HomePage /> });
        for link in crate::nav::NAV_LINKS {
            let id = format!("id=\"{}\"", &link.target_anchor[1..]);
            assert!(html.contains(&id), "no section for {}", link.target_anchor);
        }
    }
}
