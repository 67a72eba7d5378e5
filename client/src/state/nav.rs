//! Navigation bar state: scroll style and the mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical offset (CSS px) past which the bar switches to its blurred style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Page is scrolled strictly past [`SCROLL_THRESHOLD_PX`].
    pub scrolled: bool,
    pub mobile_menu_open: bool,
}

impl NavState {
    /// Record a new scroll offset. Returns `true` when the scrolled flag flipped.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Follow a nav link: hand the href to `scroll` and close the menu.
    ///
    /// The menu closes even when `scroll` finds no target. Returns whatever
    /// `scroll` reported.
    pub fn follow(&mut self, href: &str, scroll: impl FnOnce(&str) -> bool) -> bool {
        let found = scroll(href);
        self.close_menu();
        found
    }
}
