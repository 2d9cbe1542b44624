use std::sync::atomic::Ordering;

use records::{OrgField, SUPER_ADMIN_ROLE};

use super::*;
use crate::state::test_helpers::{MockBackend, organization_row, profile_row};

const TOKEN: &str = "tok";

fn user() -> SessionUser {
    SessionUser { id: "u-1".into(), email: Some("u-1@example.org".into()) }
}

fn backend() -> MockBackend {
    let backend = MockBackend::default();
    backend.add_session(TOKEN, "u-1");
    backend
}

fn draft() -> OrganizationDraft {
    OrganizationDraft {
        name: "Bayside Family Services".into(),
        email: "hello@bayside.org".into(),
        ..OrganizationDraft::blank()
    }
}

// =============================================================================
// load
// =============================================================================

#[tokio::test]
async fn load_returns_linked_organization_and_role() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", Some("supervisor"), Some("7")));
    backend.add_organization(organization_row("7"));

    let ctx = load(&backend, TOKEN, &user()).await.unwrap();
    assert_eq!(ctx.organization.unwrap().id.as_deref(), Some("7"));
    assert_eq!(ctx.role.as_deref(), Some("supervisor"));
}

#[tokio::test]
async fn load_super_admin_without_organization_gets_empty_context() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", Some(SUPER_ADMIN_ROLE), None));

    let ctx = load(&backend, TOKEN, &user()).await.unwrap();
    assert!(ctx.organization.is_none());
    assert!(ctx.is_super_admin());
}

#[tokio::test]
async fn load_unaffiliated_non_admin_is_an_error() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", Some("case_worker"), None));

    let err = load(&backend, TOKEN, &user()).await.unwrap_err();
    assert_eq!(err.to_string(), "User is not associated with any organization");
}

#[tokio::test]
async fn load_without_profile_reports_profile_fetch_failure() {
    let err = load(&backend(), TOKEN, &user()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch user profile");
}

#[tokio::test]
async fn load_with_dangling_organization_reports_fetch_failure() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", None, Some("404")));

    let err = load(&backend, TOKEN, &user()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch organization data");
}

#[tokio::test]
async fn load_backend_failure_reports_profile_fetch_failure() {
    let backend = backend();
    backend.fail_tables.store(true, Ordering::SeqCst);

    let err = load(&backend, TOKEN, &user()).await.unwrap_err();
    assert!(matches!(err, OrganizationError::ProfileFetch(BackendError::Response { status: 500, .. })));
}

// =============================================================================
// save
// =============================================================================

#[tokio::test]
async fn save_validates_before_touching_backend() {
    let backend = backend();
    backend.fail_tables.store(true, Ordering::SeqCst);
    let invalid = OrganizationDraft { email: "nope".into(), ..draft() };

    match save(&backend, TOKEN, &user(), &invalid, "2024-05-01T00:00:00Z").await.unwrap_err() {
        OrganizationError::Invalid(errors) => {
            assert_eq!(errors.get(OrgField::Email), Some("Please enter a valid email address"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn save_updates_callers_organization_and_stamps_time() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", Some("organization_admin"), Some("7")));
    backend.add_organization(organization_row("7"));

    let saved = save(&backend, TOKEN, &user(), &draft(), "2024-05-01T00:00:00Z").await.unwrap();
    assert_eq!(saved.name, "Bayside Family Services");
    assert_eq!(saved.updated_at.as_deref(), Some("2024-05-01T00:00:00Z"));
    assert_eq!(saved.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
}

#[tokio::test]
async fn save_without_organization_is_unaffiliated() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", Some(SUPER_ADMIN_ROLE), None));

    let err = save(&backend, TOKEN, &user(), &draft(), "2024-05-01T00:00:00Z").await.unwrap_err();
    assert!(matches!(err, OrganizationError::Unaffiliated));
}

#[tokio::test]
async fn save_backend_failure_uses_save_message() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", None, Some("7")));
    backend.fail_tables.store(true, Ordering::SeqCst);

    let err = save(&backend, TOKEN, &user(), &draft(), "2024-05-01T00:00:00Z").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to save organization changes");
}

// =============================================================================
// create
// =============================================================================

#[tokio::test]
async fn create_inserts_active_organization_and_links_profile() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", Some(SUPER_ADMIN_ROLE), None));
    let paused = OrganizationDraft { status: "inactive".into(), ..draft() };

    let created = create(&backend, TOKEN, &user(), &paused).await.unwrap();
    assert_eq!(created.status.as_deref(), Some("active"));

    let linked = backend.profile_of("u-1").unwrap();
    assert_eq!(linked.organization_id, created.id);

    let ctx = load(&backend, TOKEN, &user()).await.unwrap();
    assert_eq!(ctx.organization.unwrap().name, "Bayside Family Services");
}

#[tokio::test]
async fn create_refuses_non_super_admin() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", Some("admin"), None));

    let err = create(&backend, TOKEN, &user(), &draft()).await.unwrap_err();
    assert!(matches!(err, OrganizationError::NotSuperAdmin));
    assert!(backend.organizations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_invalid_draft() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", Some(SUPER_ADMIN_ROLE), None));
    let invalid = OrganizationDraft { name: "  ".into(), ..draft() };

    let err = create(&backend, TOKEN, &user(), &invalid).await.unwrap_err();
    assert!(matches!(err, OrganizationError::Invalid(_)));
}
