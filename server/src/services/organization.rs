//! Organization service: load, save, and create for the signed-in user.
//!
//! DESIGN
//! ======
//! The caller's profile decides everything. A profile with an
//! `organization_id` sees and edits that organization. A profile without one
//! is an error unless its role is Super Admin, in which case the caller gets
//! an empty context and may create an organization, which is then linked
//! back to their profile.
//!
//! ERROR HANDLING
//! ==============
//! Each backend failure is wrapped in the variant for the step that failed;
//! the variant's display text is the user-facing message.

use records::{Organization, OrganizationContext, OrganizationDraft, SUPER_ADMIN_ROLE, SessionUser, ValidationErrors};

use crate::backend::{Backend, BackendError};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrganizationError {
    #[error("Failed to fetch user profile")]
    ProfileFetch(#[source] BackendError),
    #[error("Failed to fetch organization data")]
    OrganizationFetch(#[source] BackendError),
    #[error("User is not associated with any organization")]
    Unaffiliated,
    #[error("Only a Super Admin can create an organization")]
    NotSuperAdmin,
    #[error("Please fix the highlighted fields")]
    Invalid(ValidationErrors),
    #[error("Failed to save organization changes")]
    Save(#[source] BackendError),
    #[error("Failed to create organization")]
    Create(#[source] BackendError),
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Resolve the organization context for `user`.
///
/// # Errors
///
/// Fails when the profile or organization cannot be read, or when a
/// non-admin profile has no organization.
pub async fn load(
    backend: &dyn Backend,
    access_token: &str,
    user: &SessionUser,
) -> Result<OrganizationContext, OrganizationError> {
    let profile = backend
        .profile_for_user(access_token, &user.id)
        .await
        .map_err(OrganizationError::ProfileFetch)?
        .ok_or(OrganizationError::ProfileFetch(BackendError::NotFound))?;

    let Some(organization_id) = profile.organization_id.as_deref() else {
        if profile.role.as_deref() == Some(SUPER_ADMIN_ROLE) {
            return Ok(OrganizationContext { organization: None, role: profile.role });
        }
        return Err(OrganizationError::Unaffiliated);
    };

    let organization = backend
        .organization(access_token, organization_id)
        .await
        .map_err(OrganizationError::OrganizationFetch)?
        .ok_or(OrganizationError::OrganizationFetch(BackendError::NotFound))?;

    Ok(OrganizationContext { organization: Some(organization), role: profile.role })
}

/// Validate `draft` and write it over the caller's organization.
///
/// # Errors
///
/// Returns [`OrganizationError::Invalid`] before touching the backend when
/// validation fails; otherwise any lookup or write failure.
pub async fn save(
    backend: &dyn Backend,
    access_token: &str,
    user: &SessionUser,
    draft: &OrganizationDraft,
    updated_at: &str,
) -> Result<Organization, OrganizationError> {
    draft.validate().map_err(OrganizationError::Invalid)?;

    let profile = backend
        .profile_for_user(access_token, &user.id)
        .await
        .map_err(OrganizationError::Save)?
        .ok_or(OrganizationError::Save(BackendError::NotFound))?;
    let organization_id = profile.organization_id.ok_or(OrganizationError::Unaffiliated)?;

    backend
        .update_organization(access_token, &organization_id, &draft.to_changes(updated_at))
        .await
        .map_err(OrganizationError::Save)
}

/// Validate `draft`, insert it as a new active organization, and link it to
/// the caller's profile.
///
/// # Errors
///
/// Returns [`OrganizationError::NotSuperAdmin`] when the caller's role does
/// not allow creation, or any validation or backend failure.
pub async fn create(
    backend: &dyn Backend,
    access_token: &str,
    user: &SessionUser,
    draft: &OrganizationDraft,
) -> Result<Organization, OrganizationError> {
    draft.validate().map_err(OrganizationError::Invalid)?;

    let profile = backend
        .profile_for_user(access_token, &user.id)
        .await
        .map_err(OrganizationError::Create)?
        .ok_or(OrganizationError::Create(BackendError::NotFound))?;
    if profile.role.as_deref() != Some(SUPER_ADMIN_ROLE) {
        return Err(OrganizationError::NotSuperAdmin);
    }

    let organization = backend
        .insert_organization(access_token, &draft.to_insert())
        .await
        .map_err(OrganizationError::Create)?;
    let organization_id = organization
        .id
        .clone()
        .ok_or_else(|| OrganizationError::Create(BackendError::Parse("inserted organization has no id".into())))?;

    backend
        .set_profile_organization(access_token, &user.id, &organization_id)
        .await
        .map_err(OrganizationError::Create)?;

    tracing::info!(user_id = %user.id, %organization_id, "organization created");
    Ok(organization)
}

#[cfg(test)]
#[path = "organization_test.rs"]
mod tests;
