use std::sync::atomic::Ordering;

use records::{OrgField, SUPER_ADMIN_ROLE, SessionUser, ValidationErrors};

use super::*;
use crate::state::test_helpers::{organization_row, profile_row, test_app_state};

fn auth() -> AuthUser {
    AuthUser { user: SessionUser { id: "u-1".into(), email: None }, token: "tok".into() }
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn status_mapping_covers_each_failure() {
    assert_eq!(
        organization_error_to_status(&OrganizationError::Invalid(ValidationErrors::default())),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(organization_error_to_status(&OrganizationError::NotSuperAdmin), StatusCode::FORBIDDEN);
    assert_eq!(organization_error_to_status(&OrganizationError::Unaffiliated), StatusCode::NOT_FOUND);
    assert_eq!(
        organization_error_to_status(&OrganizationError::OrganizationFetch(BackendError::NotFound)),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        organization_error_to_status(&OrganizationError::Save(BackendError::Request("reset".into()))),
        StatusCode::BAD_GATEWAY
    );
}

#[tokio::test]
async fn get_returns_organization_and_role() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    backend.add_profile(profile_row("u-1", Some("supervisor"), Some("7")));
    backend.add_organization(organization_row("7"));

    let response = get_organization(State(state), auth()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["organization"]["name"], "Harbor Foster Care");
    assert_eq!(body["role"], "supervisor");
}

#[tokio::test]
async fn get_backend_outage_reports_fetch_message() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    backend.fail_tables.store(true, Ordering::SeqCst);

    let response = get_organization(State(state), auth()).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["error"], "Failed to fetch user profile");
}

#[tokio::test]
async fn put_invalid_draft_returns_field_errors() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    backend.add_profile(profile_row("u-1", None, Some("7")));
    backend.add_organization(organization_row("7"));

    let draft = OrganizationDraft { name: String::new(), email: "ops@harbor.org".into(), ..OrganizationDraft::blank() };
    let response = update_organization(State(state), auth(), Json(draft)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["fields"][OrgField::Name.column()], "Organization name is required");
    assert!(body["fields"].get("email").is_none());
}

#[tokio::test]
async fn put_valid_draft_saves_and_stamps() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    backend.add_profile(profile_row("u-1", None, Some("7")));
    backend.add_organization(organization_row("7"));

    let draft = OrganizationDraft { name: "Harbor Family Care".into(), email: "ops@harbor.org".into(), ..OrganizationDraft::blank() };
    let response = update_organization(State(state), auth(), Json(draft)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Harbor Family Care");
    assert_ne!(body["updated_at"], "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn post_creates_for_super_admin() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    backend.add_profile(profile_row("u-1", Some(SUPER_ADMIN_ROLE), None));

    let draft = OrganizationDraft { name: "New Org".into(), email: "new@org.io".into(), ..OrganizationDraft::blank() };
    let response = create_organization(State(state), auth(), Json(draft)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["status"], "active");
    assert!(backend.profile_of("u-1").unwrap().organization_id.is_some());
}
