//! Navigation behavior: the mobile menu toggle and the projects-page tab
//! highlighter.

use serde::{Deserialize, Serialize};

/// Widest viewport, in pixels, at which the mobile navigation applies.
pub const MOBILE_BREAKPOINT_PX: f64 = 991.0;

/// Distance above a section's top at which its tab becomes active.
const SECTION_ACTIVATION_OFFSET_PX: f64 = 200.0;

/// Mobile navigation state. The open flag mirrors the `active` classes on
/// the toggle and nav plus the `nav-open` body class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    /// Create a closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// The toggle button was activated. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A click landed somewhere in the document. Closes the menu when the
    /// click was outside both the nav and the toggle; returns `true` when
    /// the menu closed.
    pub fn outside_click(&mut self, inside_nav: bool, inside_toggle: bool) -> bool {
        if self.open && !inside_nav && !inside_toggle {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// The window was resized. Closes the menu when the viewport grows past
    /// the mobile breakpoint; returns `true` when the menu closed.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        if self.open && viewport_width > MOBILE_BREAKPOINT_PX {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// A dropdown parent link was clicked. Returns `true` when the click
    /// should be intercepted to toggle the dropdown (mobile widths only).
    #[must_use]
    pub fn dropdown_intercepts(viewport_width: f64) -> bool {
        viewport_width <= MOBILE_BREAKPOINT_PX
    }
}

/// A page section watched by the tab highlighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section element id, matched against tab `href` fragments.
    pub id: String,
    /// Offset of the section's top from the document top.
    pub top: f64,
}

/// Highlights the tab of the section currently scrolled into view: the
/// last section whose top (less an activation offset) has been passed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TabHighlighter {
    sections: Vec<Section>,
    active: Option<String>,
}

impl TabHighlighter {
    /// Create a highlighter over the page's sections, in document order.
    #[must_use]
    pub const fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            active: None,
        }
    }

    /// The currently active section id.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Feed a scroll position. Returns the newly active section id when it
    /// changed (`Some(None)` when scrolled above every section).
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<Option<String>> {
        let current = self
            .sections
            .iter()
            .filter(|s| scroll_y >= s.top - SECTION_ACTIVATION_OFFSET_PX)
            .next_back()
            .map(|s| s.id.clone());
        if current == self.active {
            return None;
        }
        self.active = current.clone();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let mut nav = MobileNav::new();
        assert!(nav.toggle());
        assert!(nav.is_open());
        assert!(!nav.toggle());
        assert!(!nav.is_open());
    }

    #[test]
    fn test_outside_click_closes_only_when_truly_outside() {
        let mut nav = MobileNav::new();
        nav.toggle();
        assert!(!nav.outside_click(true, false));
        assert!(nav.is_open());
        assert!(!nav.outside_click(false, true));
        assert!(nav.outside_click(false, false));
        assert!(!nav.is_open());
        // Closed menu ignores clicks.
        assert!(!nav.outside_click(false, false));
    }

    #[test]
    fn test_resize_to_desktop_closes() {
        let mut nav = MobileNav::new();
        nav.toggle();
        assert!(!nav.resize(991.0));
        assert!(nav.resize(992.0));
        assert!(!nav.is_open());
    }

    #[test]
    fn test_dropdown_intercepts_mobile_only() {
        assert!(MobileNav::dropdown_intercepts(991.0));
        assert!(!MobileNav::dropdown_intercepts(992.0));
    }

    fn sections() -> Vec<Section> {
        vec![
            Section {
                id: "buildings".into(),
                top: 400.0,
            },
            Section {
                id: "water".into(),
                top: 1400.0,
            },
            Section {
                id: "airports".into(),
                top: 2400.0,
            },
        ]
    }

    #[test]
    fn test_tab_highlighter_tracks_last_passed_section() {
        let mut tabs = TabHighlighter::new(sections());
        assert_eq!(tabs.on_scroll(0.0), None);
        // 200 px before the first section's top it activates.
        assert_eq!(tabs.on_scroll(200.0), Some(Some("buildings".into())));
        assert_eq!(tabs.on_scroll(300.0), None);
        assert_eq!(tabs.on_scroll(1250.0), Some(Some("water".into())));
        assert_eq!(tabs.on_scroll(3000.0), Some(Some("airports".into())));
        // Scrolling back up deactivates in reverse.
        assert_eq!(tabs.on_scroll(1250.0), Some(Some("water".into())));
        assert_eq!(tabs.on_scroll(0.0), Some(None));
    }
}
