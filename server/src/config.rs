//! Backend configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variables: SUPABASE_URL and SUPABASE_PUBLISHABLE_OR_ANON_KEY must be set")]
    MissingBackend,
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project URL without a trailing slash.
    pub url: String,
    /// Publishable (anon) key sent as `apikey` on every request.
    pub anon_key: String,
    pub timeouts: BackendTimeouts,
}

impl BackendConfig {
    /// Build typed backend config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_PUBLISHABLE_OR_ANON_KEY`
    ///
    /// Optional:
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBackend`] when either required variable
    /// is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = non_blank_var("SUPABASE_URL").ok_or(ConfigError::MissingBackend)?;
        let anon_key = non_blank_var("SUPABASE_PUBLISHABLE_OR_ANON_KEY").ok_or(ConfigError::MissingBackend)?;
        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { url: url.trim_end_matches('/').to_owned(), anon_key, timeouts })
    }
}

/// Listen port from `PORT`, defaulting to 3000.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a `u16`.
pub fn port_from_env() -> Result<u16, ConfigError> {
    match std::env::var("PORT") {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
