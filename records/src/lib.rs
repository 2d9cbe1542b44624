//! Domain records shared by the site and the account dashboard.
//!
//! This crate owns the row shapes mirrored from the hosted database, the form
//! drafts that edit them, and the static catalogs shown on marketing pages.
//! Nothing here performs I/O; `server` and `client` both depend on it so form
//! validation runs identically in the browser and behind the JSON API.

pub mod course;
pub mod department;
pub mod organization;
pub mod profile;
pub mod wire;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

pub use course::{CATEGORIES, CatalogFilter, Course, CourseLevel};
pub use department::{Department, DepartmentTotals};
pub use organization::{OrgField, Organization, OrganizationChanges, OrganizationDraft, ValidationErrors};
pub use profile::{NewProfile, PeopleFilter, PeopleSummary, Profile, ProfileDraft, ProfilePatch, Role, RoleFilter, RoleTone};
pub use wire::{ErrorBody, LoginRequest, OrganizationContext, ProfileEnvelope, SessionUser};

/// Role name that may create organizations without belonging to one.
pub const SUPER_ADMIN_ROLE: &str = "Super Admin";

/// Accept an id column stored as either an integer or a string and normalize
/// it to a string so callers never care which the table uses.
pub(crate) fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Map blank form input to `None`, keeping non-blank text verbatim.
#[must_use]
pub fn none_if_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value.to_owned()) }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
