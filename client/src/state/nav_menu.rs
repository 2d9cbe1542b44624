//! Header navigation state: mobile menu, open section, hover panel, and
//! scroll styling.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

/// Scroll distance past which the header turns translucent.
pub const SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavMenuState {
    pub menu_open: bool,
    pub active_dropdown: Option<&'static str>,
    pub hovered_item: Option<&'static str>,
    pub scrolled: bool,
}

impl NavMenuState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Mobile link clicked.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Open `label`'s section, or close it when it is already open.
    pub fn toggle_dropdown(&mut self, label: &'static str) {
        self.active_dropdown = if self.active_dropdown == Some(label) { None } else { Some(label) };
    }

    pub fn is_open(&self, label: &str) -> bool {
        self.active_dropdown == Some(label)
    }

    pub fn hover(&mut self, label: Option<&'static str>) {
        self.hovered_item = label;
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_THRESHOLD;
    }
}
