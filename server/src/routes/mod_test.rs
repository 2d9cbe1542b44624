use super::*;

#[test]
fn account_tree_and_coming_soon_page_are_protected() {
    for path in ["/protected", "/account", "/account/", "/account/dashboard", "/account/organization/people"] {
        assert!(is_protected_path(path), "{path}");
    }
}

#[test]
fn marketing_pages_and_lookalikes_are_public() {
    for path in ["/", "/login", "/courses", "/about-us", "/accounts", "/account-settings", "/protected/extra"] {
        assert!(!is_protected_path(path), "{path}");
    }
}

#[tokio::test]
async fn api_error_body_carries_message() {
    let response = api_error(StatusCode::NOT_FOUND, "Organization not found");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, ErrorBody::new("Organization not found"));
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

// =============================================================================
// SESSION GATE
// =============================================================================

mod gate {
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::util::ServiceExt;

    use super::*;
    use crate::state::test_helpers::test_app_state;

    fn gated_pages(state: AppState) -> Router {
        let pages = Router::new()
            .route("/account/dashboard", get(|| async { "dashboard" }))
            .route("/protected", get(|| async { "coming soon" }))
            .route("/courses", get(|| async { "courses" }))
            .fallback(|| async { (StatusCode::NOT_FOUND, "not found") });
        with_session_gate(pages, state)
    }

    fn page_request(path: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("session_token={token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn assert_login_redirect(response: &Response) {
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[tokio::test]
    async fn anonymous_account_page_redirects_to_login() {
        let (state, _) = test_app_state();
        let response = gated_pages(state).oneshot(page_request("/account/dashboard", None)).await.unwrap();
        assert_login_redirect(&response);
    }

    #[tokio::test]
    async fn rejected_token_redirects_to_login() {
        let (state, _) = test_app_state();
        let response = gated_pages(state)
            .oneshot(page_request("/protected", Some("stale-token")))
            .await
            .unwrap();
        assert_login_redirect(&response);
    }

    #[tokio::test]
    async fn valid_session_reaches_the_page() {
        let (state, backend) = test_app_state();
        backend.add_session("tok-1", "u-1");
        let response = gated_pages(state)
            .oneshot(page_request("/account/dashboard", Some("tok-1")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"dashboard");
    }

    #[tokio::test]
    async fn unknown_account_path_is_gated_before_not_found() {
        let (state, _) = test_app_state();
        let response = gated_pages(state)
            .oneshot(page_request("/account/does-not-exist", None))
            .await
            .unwrap();
        assert_login_redirect(&response);
    }

    #[tokio::test]
    async fn unknown_public_path_falls_through_to_not_found() {
        let (state, _) = test_app_state();
        let response = gated_pages(state).oneshot(page_request("/nowhere", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn public_page_needs_no_session() {
        let (state, _) = test_app_state();
        let response = gated_pages(state).oneshot(page_request("/courses", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
