//! Account sidebar active-state rules and mobile overlay state.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::menus::SidebarEntry;

pub const MOBILE_SIDEBAR_ID: &str = "mobile-sidebar";

/// Highlight state of one sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkState {
    Active,
    HasActiveChild,
    Idle,
}

impl LinkState {
    pub fn class(self) -> &'static str {
        match self {
            Self::Active => "sidebar__link sidebar__link--active",
            Self::HasActiveChild => "sidebar__link sidebar__link--has-active-child",
            Self::Idle => "sidebar__link",
        }
    }
}

/// Exact pathname match only; a parent is never active because a child is.
pub fn is_active(entry: &SidebarEntry, pathname: &str) -> bool {
    entry.href == pathname
}

pub fn has_active_child(entry: &SidebarEntry, pathname: &str) -> bool {
    entry.children.iter().any(|child| is_active(child, pathname))
}

pub fn link_state(entry: &SidebarEntry, pathname: &str) -> LinkState {
    if is_active(entry, pathname) {
        LinkState::Active
    } else if has_active_child(entry, pathname) {
        LinkState::HasActiveChild
    } else {
        LinkState::Idle
    }
}

/// Mobile overlay visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub mobile_open: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close(&mut self) {
        self.mobile_open = false;
    }

    /// Mousedown anywhere; closes unless it landed inside the sidebar.
    pub fn pointer_down(&mut self, inside_sidebar: bool) {
        if !inside_sidebar {
            self.close();
        }
    }
}
