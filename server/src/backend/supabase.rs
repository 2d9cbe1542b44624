//! Supabase auth + REST client.
//!
//! Thin HTTP wrapper over `/auth/v1` and `/rest/v1`. Pure error parsing in
//! `parse_error` for testability.

use std::time::Duration;

use records::{NewProfile, Organization, OrganizationChanges, Profile, ProfilePatch, SessionUser};
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{AuthSession, Backend, BackendError};
use crate::config::BackendConfig;

/// Ask PostgREST for a bare object instead of a one-element array. Zero rows
/// then come back as `406` with code `PGRST116`.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const NO_ROWS_CODE: &str = "PGRST116";

const PROFILE_TABLE: &str = "profile";
const ORGANIZATIONS_TABLE: &str = "organizations";

// =============================================================================
// CLIENT
// =============================================================================

pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// Build a client for the configured project.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if reqwest cannot build the client.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.url.clone(), anon_key: config.anon_key.clone() })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// Attach the project key and the caller's bearer token.
    fn authed(&self, request: RequestBuilder, access_token: &str) -> RequestBuilder {
        request.header("apikey", &self.anon_key).bearer_auth(access_token)
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, BackendError> {
        let text = Self::send(request).await?;
        serde_json::from_str(&text).map_err(|e| BackendError::Parse(e.to_string()))
    }

    async fn send(request: RequestBuilder) -> Result<String, BackendError> {
        let response = request.send().await.map_err(|e| BackendError::Request(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| BackendError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(parse_error(status, &text));
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl Backend for SupabaseClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        let request = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }));
        Self::send_json(request).await
    }

    async fn user(&self, access_token: &str) -> Result<SessionUser, BackendError> {
        let request = self.authed(self.http.get(self.auth_url("user")), access_token);
        Self::send_json(request).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        let request = self.authed(self.http.post(self.auth_url("logout")), access_token);
        Self::send(request).await.map(|_| ())
    }

    async fn profile_for_user(&self, access_token: &str, user_id: &str) -> Result<Option<Profile>, BackendError> {
        let request = self
            .authed(self.http.get(self.rest_url(PROFILE_TABLE)), access_token)
            .query(&[("select", "*".to_owned()), ("userId", format!("eq.{user_id}"))])
            .header("Accept", SINGLE_OBJECT);
        match Self::send_json(request).await {
            Ok(profile) => Ok(Some(profile)),
            Err(BackendError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_profiles(&self, access_token: &str) -> Result<Vec<Profile>, BackendError> {
        let request = self
            .authed(self.http.get(self.rest_url(PROFILE_TABLE)), access_token)
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        Self::send_json(request).await
    }

    async fn insert_profile(&self, access_token: &str, profile: &NewProfile) -> Result<Profile, BackendError> {
        let request = self
            .authed(self.http.post(self.rest_url(PROFILE_TABLE)), access_token)
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT)
            .json(profile);
        Self::send_json(request).await
    }

    async fn update_profile(
        &self,
        access_token: &str,
        user_id: &str,
        patch: &ProfilePatch,
    ) -> Result<Profile, BackendError> {
        let request = self
            .authed(self.http.patch(self.rest_url(PROFILE_TABLE)), access_token)
            .query(&[("userId", format!("eq.{user_id}"))])
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT)
            .json(patch);
        Self::send_json(request).await
    }

    async fn set_profile_organization(
        &self,
        access_token: &str,
        user_id: &str,
        organization_id: &str,
    ) -> Result<(), BackendError> {
        let request = self
            .authed(self.http.patch(self.rest_url(PROFILE_TABLE)), access_token)
            .query(&[("userId", format!("eq.{user_id}"))])
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "organization_id": organization_id }));
        Self::send(request).await.map(|_| ())
    }

    async fn organization(&self, access_token: &str, id: &str) -> Result<Option<Organization>, BackendError> {
        let request = self
            .authed(self.http.get(self.rest_url(ORGANIZATIONS_TABLE)), access_token)
            .query(&[("select", "*".to_owned()), ("id", format!("eq.{id}"))])
            .header("Accept", SINGLE_OBJECT);
        match Self::send_json(request).await {
            Ok(org) => Ok(Some(org)),
            Err(BackendError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn insert_organization(
        &self,
        access_token: &str,
        changes: &OrganizationChanges,
    ) -> Result<Organization, BackendError> {
        let request = self
            .authed(self.http.post(self.rest_url(ORGANIZATIONS_TABLE)), access_token)
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT)
            .json(changes);
        Self::send_json(request).await
    }

    async fn update_organization(
        &self,
        access_token: &str,
        id: &str,
        changes: &OrganizationChanges,
    ) -> Result<Organization, BackendError> {
        let request = self
            .authed(self.http.patch(self.rest_url(ORGANIZATIONS_TABLE)), access_token)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT)
            .json(changes);
        Self::send_json(request).await
    }
}

// =============================================================================
// ERROR PARSING
// =============================================================================

/// Union of the error shapes returned by the auth and REST services.
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

fn parse_error(status: StatusCode, body: &str) -> BackendError {
    let payload: ErrorPayload = serde_json::from_str(body).unwrap_or_default();

    let code = payload.code.as_ref().map(|c| match c {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    });

    if code.as_deref() == Some(NO_ROWS_CODE) {
        return BackendError::NotFound;
    }

    let rejected_credentials = payload.error_code.as_deref() == Some("invalid_credentials")
        || payload.error.as_deref() == Some("invalid_grant");
    if status == StatusCode::UNAUTHORIZED || rejected_credentials {
        return BackendError::Unauthorized;
    }

    let message = payload
        .error_description
        .or(payload.msg)
        .or(payload.message)
        .or(payload.error)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() { status.to_string() } else { trimmed.to_owned() }
        });

    BackendError::Response { status: status.as_u16(), code: code.or(payload.error_code), message }
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
