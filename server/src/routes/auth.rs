//! Auth routes: password sign-in, session lookup, and sign-out.
//!
//! DESIGN
//! ======
//! The backend's access token is the session. It is kept in an HTTP-only
//! `session_token` cookie and re-validated against the backend on every
//! request that needs a user, so revoking a session upstream takes effect
//! immediately.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use records::{LoginRequest, SessionUser};
use time::Duration;

use super::api_error;
use crate::backend::BackendError;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

/// Cookie lifetime when the backend does not report one.
const DEFAULT_SESSION_SECS: i64 = 3600;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

fn session_cookie(value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(max_age)
        .build()
}

/// Status for a failed token lookup. Rejected tokens are 401; anything else
/// means the backend could not be asked.
pub(crate) fn session_error_to_status(error: &BackendError) -> StatusCode {
    match error {
        BackendError::Unauthorized | BackendError::NotFound => StatusCode::UNAUTHORIZED,
        BackendError::Response { status: 400..=499, .. } => StatusCode::UNAUTHORIZED,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Resolve the cookie's token to a user.
pub(crate) async fn session_user(state: &AppState, jar: &CookieJar) -> Result<(SessionUser, String), StatusCode> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    match state.backend.user(token).await {
        Ok(user) => Ok((user, token.to_owned())),
        Err(e) => {
            let status = session_error_to_status(&e);
            if status != StatusCode::UNAUTHORIZED {
                tracing::error!(error = %e, "session lookup failed");
            }
            Err(status)
        }
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        let (user, token) = session_user(&app_state, &jar).await?;
        Ok(Self { user, token })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: password sign-in; sets the session cookie.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let email = body.email.trim();
    if email.is_empty() || body.password.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Email and password are required");
    }

    match state.backend.sign_in_with_password(email, &body.password).await {
        Ok(session) => {
            let max_age = Duration::seconds(session.expires_in.unwrap_or(DEFAULT_SESSION_SECS));
            let jar = CookieJar::new().add(session_cookie(session.access_token, max_age));
            tracing::info!(user_id = %session.user.id, "signed in");
            (jar, Json(session.user)).into_response()
        }
        Err(BackendError::Unauthorized) => api_error(StatusCode::UNAUTHORIZED, "Invalid login credentials"),
        Err(BackendError::Response { status: 400..=499, message, .. }) => api_error(StatusCode::BAD_REQUEST, message),
        Err(e) => {
            tracing::error!(error = %e, "sign-in failed");
            api_error(StatusCode::BAD_GATEWAY, "Sign-in is unavailable right now")
        }
    }
}

/// `GET /api/auth/me`: the user behind the session cookie.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: revoke upstream, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = state.backend.sign_out(&auth.token).await {
        tracing::warn!(error = %e, "upstream sign-out failed; clearing cookie anyway");
    }

    let jar = CookieJar::new().add(session_cookie(String::new(), Duration::ZERO));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
