use records::SessionUser;

use super::*;

#[test]
fn redirects_when_loaded_without_user() {
    let state = AuthState::loaded(None);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn waits_while_loading() {
    let state = AuthState { loading: true, ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn stays_when_user_present() {
    let state = AuthState::loaded(Some(SessionUser { id: "u1".to_owned(), email: Some("ada@envesti.com".to_owned()) }));
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn sign_out_in_progress_does_not_redirect_to_login() {
    let mut state = AuthState::loaded(Some(SessionUser { id: "u1".to_owned(), email: None }));
    state.begin_sign_out();
    assert!(!should_redirect_unauth(&state));
}
