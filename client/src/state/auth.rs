//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<AuthState>`. Account pages read it to
//! redirect anonymous visitors; the header reads it for the avatar.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::SessionUser;

/// Current user plus whether `/api/auth/me` is still in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
    /// Set once sign-out has been sent and the page is leaving for `/`.
    pub signing_out: bool,
}

impl AuthState {
    pub fn loaded(user: Option<SessionUser>) -> Self {
        Self { user, loading: false, signing_out: false }
    }

    /// Drop the user without inviting the `/login` redirect.
    pub fn begin_sign_out(&mut self) {
        self.user = None;
        self.signing_out = true;
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }

    /// Single letter for the header avatar.
    pub fn avatar_letter(&self) -> String {
        self.email()
            .and_then(|e| e.chars().next())
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
    }
}
