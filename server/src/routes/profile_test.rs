use records::SessionUser;

use super::*;
use crate::state::test_helpers::{profile_row, test_app_state};

fn auth() -> AuthUser {
    AuthUser { user: SessionUser { id: "u-1".into(), email: None }, token: "tok".into() }
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn draft() -> ProfileDraft {
    ProfileDraft { first_name: "Ada".into(), last_name: "Obi".into(), phone_number: "555-0100".into() }
}

#[tokio::test]
async fn get_without_profile_is_null_envelope() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");

    let response = get_profile(State(state), auth()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "profile": null }));
}

#[tokio::test]
async fn post_then_get_returns_created_profile() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");

    let created = create_profile(State(state.clone()), auth(), Json(draft())).await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let body = body_json(get_profile(State(state), auth()).await).await;
    assert_eq!(body["profile"]["first_name"], "Ada");
    assert_eq!(body["profile"]["userId"], "u-1");
}

#[tokio::test]
async fn post_when_profile_exists_conflicts() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    backend.add_profile(profile_row("u-1", None, None));

    let response = create_profile(State(state), auth(), Json(draft())).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "Profile already exists");
}

#[tokio::test]
async fn patch_updates_existing_profile() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    backend.add_profile(profile_row("u-1", Some("trainer"), None));

    let response = update_profile(State(state), auth(), Json(draft())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["phone_number"], "555-0100");
    assert_eq!(body["role"], "trainer");
}

#[tokio::test]
async fn patch_without_profile_is_not_found() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");

    let response = update_profile(State(state), auth(), Json(draft())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
