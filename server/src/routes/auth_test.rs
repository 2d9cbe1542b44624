use axum::extract::FromRequestParts;
use axum::http::{Request, header};

use super::*;
use crate::state::test_helpers::test_app_state;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

fn parts_with_cookie(cookie: Option<&str>) -> axum::http::request::Parts {
    let mut builder = Request::builder().uri("/api/auth/me");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(()).unwrap().into_parts().0
}

// =============================================================================
// env_bool: unique env var names keep parallel tests apart.
// =============================================================================

#[test]
fn env_bool_accepts_both_spellings_case_insensitively() {
    for (i, (val, expected)) in [("1", true), ("Yes", true), (" on ", true), ("0", false), ("FALSE", false), ("off", false)]
        .iter()
        .enumerate()
    {
        let key = format!("__ENVESTI_EB_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(*expected), "for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_rejects_unknown_and_unset() {
    let key = "__ENVESTI_EB_MAYBE__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__ENVESTI_EB_SURELY_UNSET__"), None);
}

// =============================================================================
// session lookup
// =============================================================================

#[test]
fn rejected_tokens_are_unauthorized_and_outages_are_bad_gateway() {
    assert_eq!(session_error_to_status(&BackendError::Unauthorized), StatusCode::UNAUTHORIZED);
    let forbidden = BackendError::Response { status: 403, code: None, message: "bad jwt".into() };
    assert_eq!(session_error_to_status(&forbidden), StatusCode::UNAUTHORIZED);
    assert_eq!(session_error_to_status(&BackendError::Request("timeout".into())), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn extractor_requires_cookie() {
    let (state, _) = test_app_state();
    let result = AuthUser::from_request_parts(&mut parts_with_cookie(None), &state).await;
    assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn extractor_rejects_unknown_token() {
    let (state, _) = test_app_state();
    let result = AuthUser::from_request_parts(&mut parts_with_cookie(Some("session_token=stale")), &state).await;
    assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn extractor_resolves_valid_token() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");

    let auth = AuthUser::from_request_parts(&mut parts_with_cookie(Some("session_token=tok")), &state)
        .await
        .unwrap();
    assert_eq!(auth.user.id, "u-1");
    assert_eq!(auth.token, "tok");
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn login_sets_http_only_session_cookie() {
    let (state, backend) = test_app_state();
    backend.add_account("ana@example.org", "hunter2", "tok", "u-1");

    let body = LoginRequest { email: " ana@example.org ".into(), password: "hunter2".into() };
    let response = login(State(state), Json(body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("session_token=tok"), "{cookie}");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=3600"));

    let user = body_json(response).await;
    assert_eq!(user["id"], "u-1");
}

#[tokio::test]
async fn login_wrong_password_is_unauthorized_with_message() {
    let (state, backend) = test_app_state();
    backend.add_account("ana@example.org", "hunter2", "tok", "u-1");

    let body = LoginRequest { email: "ana@example.org".into(), password: "nope".into() };
    let response = login(State(state), Json(body)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&response).is_empty());
    assert_eq!(body_json(response).await["error"], "Invalid login credentials");
}

#[tokio::test]
async fn login_requires_both_fields() {
    let (state, _) = test_app_state();
    let response = login(State(state), Json(LoginRequest { email: "  ".into(), password: "x".into() })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_revokes_upstream_and_clears_cookie() {
    let (state, backend) = test_app_state();
    backend.add_session("tok", "u-1");
    let auth = AuthUser { user: SessionUser { id: "u-1".into(), email: None }, token: "tok".into() };

    let response = logout(State(state), auth).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(set_cookie(&response).contains("Max-Age=0"));
    assert_eq!(*backend.signed_out.lock().unwrap(), ["tok"]);
    assert!(backend.sessions.lock().unwrap().is_empty());
}
