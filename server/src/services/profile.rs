//! Profile service: the caller's own profile and the people directory.

use records::{Profile, ProfileDraft, SessionUser};

use crate::backend::{Backend, BackendError};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to fetch user profile")]
    Fetch(#[source] BackendError),
    #[error("Profile already exists")]
    AlreadyExists,
    #[error("No profile to update")]
    Missing,
    #[error("Failed to create profile")]
    Create(#[source] BackendError),
    #[error("Failed to update profile")]
    Update(#[source] BackendError),
    #[error("Failed to fetch people")]
    People(#[source] BackendError),
}

/// The caller's profile, or `None` before they have created one.
///
/// # Errors
///
/// Returns [`ProfileError::Fetch`] on backend failure.
pub async fn load(backend: &dyn Backend, access_token: &str, user: &SessionUser) -> Result<Option<Profile>, ProfileError> {
    backend.profile_for_user(access_token, &user.id).await.map_err(ProfileError::Fetch)
}

/// Create the caller's profile from `draft`.
///
/// # Errors
///
/// Returns [`ProfileError::AlreadyExists`] when the caller already has one.
pub async fn create(
    backend: &dyn Backend,
    access_token: &str,
    user: &SessionUser,
    draft: &ProfileDraft,
) -> Result<Profile, ProfileError> {
    if load(backend, access_token, user).await?.is_some() {
        return Err(ProfileError::AlreadyExists);
    }
    backend
        .insert_profile(access_token, &draft.to_new_profile(&user.id))
        .await
        .map_err(ProfileError::Create)
}

/// Update the caller's name and phone number.
///
/// # Errors
///
/// Returns [`ProfileError::Missing`] when the caller has no profile yet.
pub async fn update(
    backend: &dyn Backend,
    access_token: &str,
    user: &SessionUser,
    draft: &ProfileDraft,
) -> Result<Profile, ProfileError> {
    match backend.update_profile(access_token, &user.id, &draft.to_patch()).await {
        Ok(profile) => Ok(profile),
        Err(BackendError::NotFound) => Err(ProfileError::Missing),
        Err(e) => Err(ProfileError::Update(e)),
    }
}

/// Every profile visible to the caller, newest first.
///
/// # Errors
///
/// Returns [`ProfileError::People`] on backend failure.
pub async fn list_people(backend: &dyn Backend, access_token: &str) -> Result<Vec<Profile>, ProfileError> {
    backend.list_profiles(access_token).await.map_err(ProfileError::People)
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
