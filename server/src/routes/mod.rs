//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. Page requests for the account area pass
//! through a session gate first; anonymous visitors are redirected to
//! `/login` before any page renders.

pub mod auth;
pub mod organization;
pub mod people;
pub mod profile;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum::routing::{get, post};
use axum_extra::extract::cookie::CookieJar;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use records::ErrorBody;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const LOGIN_PATH: &str = "/login";

/// JSON API routes used by the hydrated client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/organization",
            get(organization::get_organization)
                .put(organization::update_organization)
                .post(organization::create_organization),
        )
        .route("/api/people", get(people::list_people))
        .route(
            "/api/profile",
            get(profile::get_profile)
                .post(profile::create_profile)
                .patch(profile::update_profile),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// `{ "error": message }` with `status`.
pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

/// Pages that require a signed-in user.
pub(crate) fn is_protected_path(path: &str) -> bool {
    path == "/protected" || path == "/account" || path.starts_with("/account/")
}

/// Redirect anonymous requests for protected pages to the login page. Any
/// failure while checking the session counts as anonymous.
async fn require_session(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    if !is_protected_path(request.uri().path()) {
        return next.run(request).await;
    }

    match auth::session_user(&state, &jar).await {
        Ok(_) => next.run(request).await,
        Err(_) => Redirect::temporary(LOGIN_PATH).into_response(),
    }
}

/// Put `router` (its routes and its fallback) behind [`require_session`].
pub(crate) fn with_session_gate(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, require_session))
}

/// Full application: JSON API + gated Leptos SSR pages + static assets.
///
/// Paths with no Leptos route still render through the app so the router's
/// not-found page answers with a 404. Files under the site root are served
/// by the same fallback before it renders.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());
    let leptos_router = with_session_gate(leptos_router, state.clone());

    // WASM/CSS bundle under /pkg.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
