//! Hosted backend adapter: auth sessions plus the `profile` and
//! `organizations` tables.
//!
//! DESIGN
//! ======
//! Route handlers and services talk to the [`Backend`] trait only. The
//! production implementation is [`supabase::SupabaseClient`], a thin reqwest
//! wrapper over the project's auth and REST endpoints. Every table call is
//! made with the caller's own access token so row-level security applies
//! exactly as it would from the browser.
//!
//! Nothing is cached here; each call is a fresh request.

pub mod supabase;

use records::{NewProfile, Organization, OrganizationChanges, Profile, ProfilePatch, SessionUser};
use serde::Deserialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend responded {status}: {message}")]
    Response { status: u16, code: Option<String>, message: String },

    /// A single-row query matched no rows.
    #[error("no rows returned")]
    NotFound,

    /// The token or credentials were rejected.
    #[error("invalid or expired credentials")]
    Unauthorized,

    /// The response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// AUTH TYPES
// =============================================================================

/// Result of a successful password sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: SessionUser,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Auth and table operations used by the account area.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Exchange email + password for a session.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, BackendError>;

    /// Resolve the user behind an access token.
    async fn user(&self, access_token: &str) -> Result<SessionUser, BackendError>;

    /// Revoke the session behind an access token.
    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError>;

    /// The profile row owned by `user_id`, if one exists.
    async fn profile_for_user(&self, access_token: &str, user_id: &str) -> Result<Option<Profile>, BackendError>;

    /// Every visible profile, newest first.
    async fn list_profiles(&self, access_token: &str) -> Result<Vec<Profile>, BackendError>;

    async fn insert_profile(&self, access_token: &str, profile: &NewProfile) -> Result<Profile, BackendError>;

    async fn update_profile(
        &self,
        access_token: &str,
        user_id: &str,
        patch: &ProfilePatch,
    ) -> Result<Profile, BackendError>;

    /// Point the profile owned by `user_id` at `organization_id`.
    async fn set_profile_organization(
        &self,
        access_token: &str,
        user_id: &str,
        organization_id: &str,
    ) -> Result<(), BackendError>;

    async fn organization(&self, access_token: &str, id: &str) -> Result<Option<Organization>, BackendError>;

    async fn insert_organization(
        &self,
        access_token: &str,
        changes: &OrganizationChanges,
    ) -> Result<Organization, BackendError>;

    async fn update_organization(
        &self,
        access_token: &str,
        id: &str,
        changes: &OrganizationChanges,
    ) -> Result<Organization, BackendError>;
}
