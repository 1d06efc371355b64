use leptos::prelude::*;

use crate::content::{Icon, PROFILE};

use super::icons::IconSvg;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center pt-20 border-b border-zinc-800/50"
        >
            <div class="absolute inset-0 grid-bg opacity-50 pointer-events-none"></div>
            <div class="relative z-10 max-w-6xl mx-auto px-6 lg:px-12 w-full">
                <div class="max-w-3xl animate-enter">
                    <div class="font-mono text-emerald-500 text-sm mb-6 tracking-widest">
                        "> SYSTEM_INIT"
                    </div>
                    <h1 class="text-4xl sm:text-6xl md:text-7xl font-bold tracking-tight mb-6 md:mb-8 leading-[1.1]">
                        {format!("{}.", PROFILE.name)}
                        <br />
                        <span class="text-zinc-500">{format!("{}.", PROFILE.title)}</span>
                    </h1>
                </div>
                <p class="max-w-2xl text-base sm:text-lg text-zinc-400 mb-10 md:mb-12 leading-relaxed animate-enter enter-delay-200">
                    {PROFILE.tagline}
                </p>
                <div class="flex flex-col sm:flex-row items-start sm:items-center space-y-6 sm:space-y-0 sm:space-x-6 animate-enter enter-delay-400">
                    <a
                        href="#projects"
                        class="group flex items-center space-x-2 font-mono text-sm text-emerald-500 hover:text-emerald-400 transition-colors"
                    >
                        <span>"[ VIEW_SYSTEMS ]"</span>
                        <IconSvg
                            icon=Icon::ArrowRight
                            class="w-4 h-4 group-hover:translate-x-1 transition-transform"
                        />
                    </a>
                    <a
                        href=PROFILE.mailto()
                        class="font-mono text-sm text-zinc-400 hover:text-zinc-300 transition-colors"
                    >
                        "[ CONTACT_NODE ]"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_calls_to_action() {
        let html = render_html(|| view! { <Hero /> });
        assert!(html.contains("href=\"#projects\""));
        assert!(html.contains("href=\"mailto:vanrezkysadewa77@gmail.com\""));
        assert!(html.contains("Van Rezky Nababan."));
    }
}
