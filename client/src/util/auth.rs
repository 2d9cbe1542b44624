//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server already gates account pages, but a session can expire while a
//! page is open. Account components install the same client-side redirect so
//! the browser lands on `/login` once `/api/auth/me` comes back empty.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// True once auth has loaded and no user is present. A sign-out in progress
/// navigates on its own.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.signing_out && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
