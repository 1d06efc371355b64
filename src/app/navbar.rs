use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window, use_window_size, UseWindowSizeReturn};

use crate::content::Icon;
use crate::nav::{NavState, NAV_LINKS};

use super::icons::IconSvg;

const NAV_BASE: &str = "fixed top-0 w-full z-50 transition-all duration-300";

fn nav_class(is_scrolled: bool) -> String {
    if is_scrolled {
        format!("{NAV_BASE} bg-[#0f1115]/90 backdrop-blur-sm border-b border-zinc-800/50")
    } else {
        format!("{NAV_BASE} bg-transparent")
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let state = RwSignal::new(NavState::default());

    // Both listeners are removed when this component's owner is cleaned up. Without a
    // window (server render) neither is registered.
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        state.maybe_update(|s| s.on_scroll(offset));
    });

    let UseWindowSizeReturn { width, .. } = use_window_size();
    Effect::new(move |_| {
        let width = width.get();
        state.maybe_update(|s| {
            let closed = s.on_resize(width);
            if closed {
                log::debug!("mobile menu closed, viewport widened to {width}px");
            }
            closed
        });
    });

    let is_scrolled = Memo::new(move |_| state.with(|s| s.is_scrolled));
    let is_menu_open = Memo::new(move |_| state.with(|s| s.is_mobile_menu_open));

    view! {
        <nav class=move || nav_class(is_scrolled.get())>
            <div class="max-w-6xl mx-auto px-6 lg:px-12">
                <div class="flex items-center justify-between h-20">
                    <div class="flex-shrink-0">
                        <a href="#" class="font-mono text-lg font-bold text-zinc-100 tracking-tighter">
                            "VR"
                            <span class="text-emerald-500">"_"</span>
                        </a>
                    </div>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-8">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.target_anchor
                                            class="font-mono text-xs text-zinc-400 hover:text-emerald-400 transition-colors px-3 py-2"
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="md:hidden">
                        <button
                            class="text-zinc-400 hover:text-emerald-400 p-2"
                            aria-label="Toggle navigation"
                            aria-expanded=move || is_menu_open.get().to_string()
                            on:click=move |_| {
                                state.update(|s| {
                                    s.toggle_menu();
                                });
                                log::debug!("mobile menu open: {}", is_menu_open.get_untracked());
                            }
                        >
                            {move || {
                                let icon = if is_menu_open.get() { Icon::Close } else { Icon::Menu };
                                view! { <IconSvg icon class="w-6 h-6" /> }
                            }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || is_menu_open.get()>
                <div class="md:hidden bg-[#0f1115] border-b border-zinc-800/50">
                    <div class="px-6 pt-2 pb-4 space-y-2">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.target_anchor
                                        class="block font-mono text-sm text-zinc-400 hover:text-emerald-400 transition-colors py-2"
                                        on:click=move |_| {
                                            // the anchor still navigates, only the panel closes
                                            state.maybe_update(|s| s.activate_link());
                                            log::debug!("mobile menu closed by {}", link.target_anchor);
                                        }
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
