use super::*;
use crate::config::BackendTimeouts;

fn config() -> BackendConfig {
    BackendConfig {
        url: "https://abc.supabase.co".into(),
        anon_key: "anon".into(),
        timeouts: BackendTimeouts { request_secs: 5, connect_secs: 2 },
    }
}

#[test]
fn urls_join_base_and_service_path() {
    let client = SupabaseClient::new(&config()).unwrap();
    assert_eq!(client.auth_url("token"), "https://abc.supabase.co/auth/v1/token");
    assert_eq!(client.rest_url("organizations"), "https://abc.supabase.co/rest/v1/organizations");
}

#[test]
fn no_rows_code_maps_to_not_found() {
    let body = r#"{"code":"PGRST116","details":"The result contains 0 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#;
    assert!(matches!(parse_error(StatusCode::NOT_ACCEPTABLE, body), BackendError::NotFound));
}

#[test]
fn unauthorized_status_maps_to_unauthorized() {
    let body = r#"{"code":401,"msg":"invalid JWT"}"#;
    assert!(matches!(parse_error(StatusCode::UNAUTHORIZED, body), BackendError::Unauthorized));
}

#[test]
fn rejected_password_maps_to_unauthorized() {
    let current = r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#;
    assert!(matches!(parse_error(StatusCode::BAD_REQUEST, current), BackendError::Unauthorized));

    let legacy = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
    assert!(matches!(parse_error(StatusCode::BAD_REQUEST, legacy), BackendError::Unauthorized));
}

#[test]
fn rest_error_keeps_code_and_message() {
    let body = r#"{"code":"42501","message":"new row violates row-level security policy"}"#;
    match parse_error(StatusCode::FORBIDDEN, body) {
        BackendError::Response { status, code, message } => {
            assert_eq!(status, 403);
            assert_eq!(code.as_deref(), Some("42501"));
            assert_eq!(message, "new row violates row-level security policy");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_json_body_falls_back_to_text_or_status() {
    match parse_error(StatusCode::BAD_GATEWAY, "upstream down") {
        BackendError::Response { message, code, .. } => {
            assert_eq!(message, "upstream down");
            assert_eq!(code, None);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    match parse_error(StatusCode::INTERNAL_SERVER_ERROR, "") {
        BackendError::Response { message, .. } => assert_eq!(message, "500 Internal Server Error"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn auth_session_deserializes_token_response() {
    let body = r#"{
        "access_token": "jwt",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh",
        "user": { "id": "u-1", "email": "a@b.co", "aud": "authenticated" }
    }"#;
    let session: AuthSession = serde_json::from_str(body).unwrap();
    assert_eq!(session.access_token, "jwt");
    assert_eq!(session.expires_in, Some(3600));
    assert_eq!(session.user.id, "u-1");
    assert_eq!(session.user.email.as_deref(), Some("a@b.co"));
}
