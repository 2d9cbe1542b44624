//! Organization routes: load, save, and create the caller's organization.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use records::{ErrorBody, OrganizationDraft};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::auth::AuthUser;
use crate::backend::BackendError;
use crate::services::organization::{self as org_svc, OrganizationError};
use crate::state::AppState;

pub(crate) fn organization_error_to_status(error: &OrganizationError) -> StatusCode {
    match error {
        OrganizationError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        OrganizationError::NotSuperAdmin => StatusCode::FORBIDDEN,
        OrganizationError::Unaffiliated => StatusCode::NOT_FOUND,
        OrganizationError::ProfileFetch(source)
        | OrganizationError::OrganizationFetch(source)
        | OrganizationError::Save(source)
        | OrganizationError::Create(source) => match source {
            BackendError::NotFound => StatusCode::NOT_FOUND,
            BackendError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_GATEWAY,
        },
    }
}

fn organization_error_response(error: OrganizationError) -> Response {
    let status = organization_error_to_status(&error);
    if status.is_server_error() {
        tracing::error!(error = ?error, "organization request failed");
    }
    let fields = match &error {
        OrganizationError::Invalid(fields) => Some(fields.clone()),
        _ => None,
    };
    (status, Json(ErrorBody { error: error.to_string(), fields })).into_response()
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// `GET /api/organization`: `{ organization, role }` for the caller.
pub async fn get_organization(State(state): State<AppState>, auth: AuthUser) -> Response {
    match org_svc::load(state.backend.as_ref(), &auth.token, &auth.user).await {
        Ok(context) => Json(context).into_response(),
        Err(e) => organization_error_response(e),
    }
}

/// `PUT /api/organization`: validate and save edits to the caller's organization.
pub async fn update_organization(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(draft): Json<OrganizationDraft>,
) -> Response {
    match org_svc::save(state.backend.as_ref(), &auth.token, &auth.user, &draft, &now_rfc3339()).await {
        Ok(org) => Json(org).into_response(),
        Err(e) => organization_error_response(e),
    }
}

/// `POST /api/organization`: create an organization and join it (Super Admin only).
pub async fn create_organization(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(draft): Json<OrganizationDraft>,
) -> Response {
    match org_svc::create(state.backend.as_ref(), &auth.token, &auth.user, &draft).await {
        Ok(org) => (StatusCode::CREATED, Json(org)).into_response(),
        Err(e) => organization_error_response(e),
    }
}

#[cfg(test)]
#[path = "organization_test.rs"]
mod tests;
