//! Profile routes: read, create, and update the caller's own profile.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::{ProfileDraft, ProfileEnvelope};

use super::api_error;
use super::auth::AuthUser;
use crate::backend::BackendError;
use crate::services::profile::{self as profile_svc, ProfileError};
use crate::state::AppState;

pub(crate) fn profile_error_to_status(error: &ProfileError) -> StatusCode {
    match error {
        ProfileError::AlreadyExists => StatusCode::CONFLICT,
        ProfileError::Missing => StatusCode::NOT_FOUND,
        ProfileError::Fetch(source)
        | ProfileError::Create(source)
        | ProfileError::Update(source)
        | ProfileError::People(source) => match source {
            BackendError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_GATEWAY,
        },
    }
}

fn profile_error_response(error: ProfileError) -> Response {
    let status = profile_error_to_status(&error);
    if status.is_server_error() {
        tracing::error!(error = ?error, "profile request failed");
    }
    api_error(status, error.to_string())
}

/// `GET /api/profile`: `{ profile }`, null before one is created.
pub async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> Response {
    match profile_svc::load(state.backend.as_ref(), &auth.token, &auth.user).await {
        Ok(profile) => Json(ProfileEnvelope { profile }).into_response(),
        Err(e) => profile_error_response(e),
    }
}

/// `POST /api/profile`: create the caller's profile.
pub async fn create_profile(State(state): State<AppState>, auth: AuthUser, Json(draft): Json<ProfileDraft>) -> Response {
    match profile_svc::create(state.backend.as_ref(), &auth.token, &auth.user, &draft).await {
        Ok(profile) => (StatusCode::CREATED, Json(profile)).into_response(),
        Err(e) => profile_error_response(e),
    }
}

/// `PATCH /api/profile`: update name and phone.
pub async fn update_profile(State(state): State<AppState>, auth: AuthUser, Json(draft): Json<ProfileDraft>) -> Response {
    match profile_svc::update(state.backend.as_ref(), &auth.token, &auth.user, &draft).await {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => profile_error_response(e),
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
