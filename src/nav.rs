//! Navigation links and the navbar's transient UI state.

/// Scroll offset (px) the page must pass before the navbar gets its solid background.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Viewport width (px) at which layouts switch from narrow to wide. Matches Tailwind's `md`.
pub const WIDE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target_anchor: &'static str,
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "01. ABOUT",
        target_anchor: "#about",
    },
    NavLink {
        label: "02. ARCHITECTURE",
        target_anchor: "#architecture",
    },
    NavLink {
        label: "03. EXPERIENCE",
        target_anchor: "#experience",
    },
    NavLink {
        label: "04. CASE STUDIES",
        target_anchor: "#projects",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    /// Links hidden behind the menu toggle.
    Collapsible,
    /// Links shown in the header row.
    Inline,
}

impl NavLayout {
    pub fn for_width(width: f64) -> Self {
        if width >= WIDE_BREAKPOINT {
            Self::Inline
        } else {
            Self::Collapsible
        }
    }
}

/// The two booleans owned by the navbar. Every transition returns whether anything changed
/// so callers can skip notifying subscribers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub is_scrolled: bool,
    pub is_mobile_menu_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.is_scrolled;
        self.is_scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
        true
    }

    /// A nav link was activated. The anchor navigation itself is left to the browser.
    pub fn activate_link(&mut self) -> bool {
        self.close_menu()
    }

    pub fn on_resize(&mut self, width: f64) -> bool {
        match NavLayout::for_width(width) {
            NavLayout::Inline => self.close_menu(),
            NavLayout::Collapsible => false,
        }
    }

    fn close_menu(&mut self) -> bool {
        let changed = self.is_mobile_menu_open;
        self.is_mobile_menu_open = false;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_strict() {
        let mut state = NavState::default();
        assert!(!state.on_scroll(0.0));
        assert!(!state.is_scrolled);
        assert!(!state.on_scroll(50.0));
        assert!(!state.is_scrolled);
        assert!(state.on_scroll(51.0));
        assert!(state.is_scrolled);
        assert!(state.on_scroll(50.0));
        assert!(!state.is_scrolled);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        for initial in [false, true] {
            let mut state = NavState {
                is_scrolled: false,
                is_mobile_menu_open: initial,
            };
            state.toggle_menu();
            assert_eq!(state.is_mobile_menu_open, !initial);
            state.toggle_menu();
            assert_eq!(state.is_mobile_menu_open, initial);
        }
    }

    #[test]
    fn test_any_link_closes_menu() {
        for link in NAV_LINKS {
            let mut state = NavState::default();
            state.toggle_menu();
            assert!(state.is_mobile_menu_open);
            assert!(state.activate_link(), "{} should close the menu", link.label);
            assert!(!state.is_mobile_menu_open);
        }

        // closed menu stays closed
        let mut state = NavState::default();
        assert!(!state.activate_link());
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn test_layout_around_breakpoint() {
        assert_eq!(NavLayout::for_width(767.0), NavLayout::Collapsible);
        assert_eq!(NavLayout::for_width(767.99), NavLayout::Collapsible);
        assert_eq!(NavLayout::for_width(768.0), NavLayout::Inline);
        assert_eq!(NavLayout::for_width(769.0), NavLayout::Inline);
    }

    #[test]
    fn test_widening_viewport_closes_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(!state.on_resize(500.0));
        assert!(state.is_mobile_menu_open);
        assert!(state.on_resize(1024.0));
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.on_scroll(400.0);
        assert!(state.is_mobile_menu_open);
        assert!(state.is_scrolled);
    }

    #[test]
    fn test_nav_anchors() {
        let anchors = NAV_LINKS.map(|l| l.target_anchor);
        assert_eq!(anchors, ["#about", "#architecture", "#experience", "#projects"]);
    }
}
