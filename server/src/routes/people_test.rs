use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use records::{Profile, SessionUser};

use super::*;
use crate::state::test_helpers::{profile_row, test_app_state};

fn auth() -> AuthUser {
    AuthUser { user: SessionUser { id: "u-1".into(), email: None }, token: "tok".into() }
}

#[tokio::test]
async fn lists_people_newest_first() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    backend.add_profile(profile_row("u-1", Some("admin"), None));
    backend.add_profile(Profile {
        created_at: Some("2024-03-01T00:00:00Z".into()),
        ..profile_row("u-2", Some("case_worker"), None)
    });

    let response = list_people(State(state), auth()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let people: Vec<Profile> = serde_json::from_slice(&bytes).unwrap();
    let owners: Vec<_> = people.iter().map(|p| p.user_id.as_deref().unwrap()).collect();
    assert_eq!(owners, ["u-2", "u-1"]);
}

#[tokio::test]
async fn backend_failure_is_bad_gateway() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    backend.fail_tables.store(true, Ordering::SeqCst);

    let response = list_people(State(state), auth()).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let (state, _backend) = test_app_state();

    let response = list_people(State(state), auth()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
