//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns an [`ApiError`] carrying a display-ready message, so
//! pages can put it straight into their error cards. A 401 without a body
//! reads "User not authenticated"; server bodies pass their `error` text
//! through; transport and decode failures collapse to a generic message.
//!
//! No response is cached. Each page mount fetches fresh rows.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{ErrorBody, Organization, OrganizationContext, OrganizationDraft, Profile, ProfileDraft, SessionUser, ValidationErrors};

use crate::state::profile::SessionMeta;

pub const UNAUTHENTICATED: &str = "User not authenticated";
pub const UNEXPECTED: &str = "An unexpected error occurred";

#[cfg(any(test, feature = "hydrate"))]
const IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";

/// Failure from an `/api` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    /// Per-field messages when the server rejected a form.
    pub fields: Option<ValidationErrors>,
}

impl ApiError {
    pub fn unexpected() -> Self {
        Self { message: UNEXPECTED.to_owned(), fields: None }
    }

    /// Build from a non-success status and whatever body came with it.
    pub fn from_response(status: u16, body: Option<ErrorBody>) -> Self {
        match body {
            Some(body) if !body.error.is_empty() => Self { message: body.error, fields: body.fields },
            _ if status == 401 => Self { message: UNAUTHENTICATED.to_owned(), fields: None },
            _ => Self::unexpected(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn location_lookup_url(ip: &str) -> String {
    format!("https://ipapi.co/{ip}/json/")
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if resp.ok() {
        return resp.json::<T>().await.map_err(|e| {
            leptos::logging::warn!("response decode failed: {e}");
            ApiError::unexpected()
        });
    }
    let status = resp.status();
    let body = resp.json::<ErrorBody>().await.ok();
    Err(ApiError::from_response(status, body))
}

#[cfg(feature = "hydrate")]
fn transport(e: gloo_net::Error) -> ApiError {
    leptos::logging::warn!("request failed: {e}");
    ApiError::unexpected()
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Password sign-in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's message for rejected credentials.
pub async fn login(email: &str, password: &str) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = records::LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::unexpected())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

// =============================================================================
// ORGANIZATION
// =============================================================================

/// The caller's organization and role from `GET /api/organization`.
///
/// # Errors
///
/// Returns an error when unauthenticated or when the lookup fails.
pub async fn fetch_organization() -> Result<OrganizationContext, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/organization").send().await.map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unexpected())
    }
}

/// Save edits to the caller's organization with `PUT /api/organization`.
///
/// # Errors
///
/// Returns field errors when validation fails server-side.
pub async fn save_organization(draft: &OrganizationDraft) -> Result<Organization, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/api/organization")
            .json(draft)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::unexpected())
    }
}

/// Create an organization with `POST /api/organization` (super admins only).
///
/// # Errors
///
/// Returns an error when the caller may not create organizations or the
/// draft is invalid.
pub async fn create_organization(draft: &OrganizationDraft) -> Result<Organization, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/organization")
            .json(draft)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::unexpected())
    }
}

// =============================================================================
// PEOPLE + PROFILE
// =============================================================================

/// All visible profiles, newest first.
///
/// # Errors
///
/// Returns an error when unauthenticated or when the query fails.
pub async fn fetch_people() -> Result<Vec<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/people").send().await.map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unexpected())
    }
}

/// The caller's own profile; `Ok(None)` when none exists yet.
///
/// # Errors
///
/// Returns an error when unauthenticated or when the query fails.
pub async fn fetch_profile() -> Result<Option<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/profile").send().await.map_err(transport)?;
        read_json::<records::ProfileEnvelope>(resp).await.map(|envelope| envelope.profile)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unexpected())
    }
}

/// Create (`POST`) or update (`PATCH`) the caller's profile.
///
/// # Errors
///
/// Returns an error when unauthenticated or when the write fails.
pub async fn save_profile(draft: &ProfileDraft, exists: bool) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = if exists {
            gloo_net::http::Request::patch("/api/profile")
        } else {
            gloo_net::http::Request::post("/api/profile")
        };
        let resp = request.json(draft).map_err(transport)?.send().await.map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (draft, exists);
        Err(ApiError::unexpected())
    }
}

// =============================================================================
// SESSION METADATA
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct IpLookup {
    #[serde(default)]
    ip: Option<String>,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct LocationLookup {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    country_name: Option<String>,
}

/// Best-effort browser facts for the profile page. Lookups that fail leave
/// their field at "Unknown".
pub async fn fetch_session_meta() -> SessionMeta {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::profile::{location_label, truncate_user_agent};

        let mut meta = SessionMeta::default();
        if let Some(zone) = browser_time_zone() {
            meta.timezone = zone;
        }
        if let Some(agent) = web_sys::window().and_then(|w| w.navigator().user_agent().ok()) {
            meta.user_agent = truncate_user_agent(&agent);
        }

        let ip = match gloo_net::http::Request::get(IP_LOOKUP_URL).send().await {
            Ok(resp) => resp.json::<IpLookup>().await.ok().and_then(|lookup| lookup.ip),
            Err(e) => {
                leptos::logging::log!("could not fetch IP: {e}");
                None
            }
        };
        let Some(ip) = ip else {
            return meta;
        };

        match gloo_net::http::Request::get(&location_lookup_url(&ip)).send().await {
            Ok(resp) => {
                if let Ok(found) = resp.json::<LocationLookup>().await {
                    if let Some(label) =
                        location_label(found.city.as_deref(), found.region.as_deref(), found.country_name.as_deref())
                    {
                        meta.location = label;
                    }
                }
            }
            Err(e) => leptos::logging::log!("could not fetch location: {e}"),
        }
        meta.ip = ip;
        meta
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionMeta::default()
    }
}

#[cfg(feature = "hydrate")]
fn browser_time_zone() -> Option<String> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    let options = format.resolved_options();
    js_sys::Reflect::get(&options, &wasm_bindgen::JsValue::from_str("timeZone")).ok()?.as_string()
}
