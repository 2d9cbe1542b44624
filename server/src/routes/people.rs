//! People directory route.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};

use super::api_error;
use super::auth::AuthUser;
use super::profile::profile_error_to_status;
use crate::services::profile as profile_svc;
use crate::state::AppState;

/// `GET /api/people`: every visible profile, newest first.
pub async fn list_people(State(state): State<AppState>, auth: AuthUser) -> Response {
    match profile_svc::list_people(state.backend.as_ref(), &auth.token).await {
        Ok(people) => Json(people).into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "people lookup failed");
            api_error(profile_error_to_status(&e), e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "people_test.rs"]
mod tests;
