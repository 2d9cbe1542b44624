use std::sync::atomic::Ordering;

use super::*;
use crate::state::test_helpers::{MockBackend, profile_row};

const TOKEN: &str = "tok";

fn user() -> SessionUser {
    SessionUser { id: "u-1".into(), email: None }
}

fn backend() -> MockBackend {
    let backend = MockBackend::default();
    backend.add_session(TOKEN, "u-1");
    backend
}

fn draft() -> ProfileDraft {
    ProfileDraft { first_name: "Ada".into(), last_name: "Obi".into(), phone_number: String::new() }
}

#[tokio::test]
async fn load_is_none_before_profile_exists() {
    assert_eq!(load(&backend(), TOKEN, &user()).await.unwrap(), None);
}

#[tokio::test]
async fn create_links_profile_to_caller_with_blank_phone_as_null() {
    let backend = backend();
    let created = create(&backend, TOKEN, &user(), &draft()).await.unwrap();
    assert_eq!(created.user_id.as_deref(), Some("u-1"));
    assert_eq!(created.phone_number, None);
    assert_eq!(created.role, None);
    assert_eq!(load(&backend, TOKEN, &user()).await.unwrap(), Some(created));
}

#[tokio::test]
async fn create_twice_is_rejected() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", None, None));
    assert!(matches!(create(&backend, TOKEN, &user(), &draft()).await, Err(ProfileError::AlreadyExists)));
}

#[tokio::test]
async fn update_changes_only_self_service_fields() {
    let backend = backend();
    backend.add_profile(profile_row("u-1", Some("supervisor"), Some("7")));

    let updated = update(&backend, TOKEN, &user(), &draft()).await.unwrap();
    assert_eq!(updated.display_name(), "Ada Obi");
    assert_eq!(updated.role.as_deref(), Some("supervisor"));
    assert_eq!(updated.organization_id.as_deref(), Some("7"));
}

#[tokio::test]
async fn update_without_profile_is_missing() {
    assert!(matches!(update(&backend(), TOKEN, &user(), &draft()).await, Err(ProfileError::Missing)));
}

#[tokio::test]
async fn list_people_is_newest_first() {
    let backend = backend();
    let mut older = profile_row("u-2", None, None);
    older.created_at = Some("2023-01-01T00:00:00Z".into());
    backend.add_profile(older);
    backend.add_profile(profile_row("u-3", None, None));

    let people = list_people(&backend, TOKEN).await.unwrap();
    let owners: Vec<_> = people.iter().filter_map(|p| p.user_id.as_deref()).collect();
    assert_eq!(owners, ["u-3", "u-2"]);
}

#[tokio::test]
async fn list_people_failure_is_reported() {
    let backend = backend();
    backend.fail_tables.store(true, Ordering::SeqCst);
    let err = list_people(&backend, TOKEN).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch people");
}
