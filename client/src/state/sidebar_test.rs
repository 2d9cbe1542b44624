use super::*;
use crate::menus::{account_navigation, profile_entry};

#[test]
fn only_exact_path_is_active() {
    let nav = account_navigation();
    let org = &nav[1];
    assert!(is_active(org, "/account/organization"));
    assert!(!is_active(org, "/account/organization/people"));
    assert!(!is_active(&profile_entry(), "/account/profile/edit"));
}

#[test]
fn parent_marks_active_child() {
    let nav = account_navigation();
    let org = &nav[1];
    assert_eq!(link_state(org, "/account/organization/people"), LinkState::HasActiveChild);
    assert_eq!(link_state(&org.children[0], "/account/organization/people"), LinkState::Active);
    assert_eq!(link_state(&nav[0], "/account/organization/people"), LinkState::Idle);
}

#[test]
fn link_state_classes_carry_markers() {
    assert!(LinkState::Active.class().contains("--active"));
    assert!(LinkState::HasActiveChild.class().contains("has-active-child"));
    assert_eq!(LinkState::Idle.class(), "sidebar__link");
}

#[test]
fn pointer_down_outside_closes_overlay() {
    let mut state = SidebarState::default();
    state.toggle();
    state.pointer_down(true);
    assert!(state.mobile_open);
    state.pointer_down(false);
    assert!(!state.mobile_open);
}
