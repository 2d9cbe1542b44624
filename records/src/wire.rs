//! JSON bodies exchanged between the browser and the server's `/api` routes.

use serde::{Deserialize, Serialize};

use crate::{Organization, Profile, ValidationErrors};

/// Identity attached to a validated session token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Email + password sign-in request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// What the organization page needs on mount.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationContext {
    pub organization: Option<Organization>,
    pub role: Option<String>,
}

impl OrganizationContext {
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.role.as_deref() == Some(crate::SUPER_ADMIN_ROLE)
    }
}

/// The caller's profile row, or `None` when they have not built one yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    pub profile: Option<Profile>,
}

/// Error response body. `fields` is present for validation failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into(), fields: None }
    }
}
