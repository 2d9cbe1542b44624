//! Profile page state and the best-effort session details panel.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use records::{Profile, ProfileDraft};

pub const UNKNOWN: &str = "Unknown";
pub const USER_AGENT_LIMIT: usize = 100;

/// What the page body shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileMode {
    Loading,
    Failed,
    /// No row yet: the "Build Your Profile" prompt.
    Missing,
    Creating,
    Editing,
    Viewing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfilePageState {
    pub loading: bool,
    pub error: Option<String>,
    pub profile: Option<Profile>,
    pub form_open: bool,
    pub draft: ProfileDraft,
    pub saving: bool,
}

impl Default for ProfilePageState {
    fn default() -> Self {
        Self { loading: true, error: None, profile: None, form_open: false, draft: ProfileDraft::default(), saving: false }
    }
}

impl ProfilePageState {
    pub fn loaded(&mut self, result: Result<Option<Profile>, String>) {
        self.loading = false;
        match result {
            Ok(profile) => self.profile = profile,
            Err(message) => self.error = Some(message),
        }
    }

    pub fn mode(&self) -> ProfileMode {
        match (self.loading, &self.error, &self.profile, self.form_open) {
            (true, ..) => ProfileMode::Loading,
            (_, Some(_), ..) => ProfileMode::Failed,
            (_, None, None, false) => ProfileMode::Missing,
            (_, None, None, true) => ProfileMode::Creating,
            (_, None, Some(_), true) => ProfileMode::Editing,
            (_, None, Some(_), false) => ProfileMode::Viewing,
        }
    }

    /// Open the form, pre-filled from the existing row when there is one.
    pub fn open_form(&mut self) {
        self.draft = self.profile.as_ref().map(ProfileDraft::from_profile).unwrap_or_default();
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub fn stored(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.form_open = false;
        self.saving = false;
        self.draft = ProfileDraft::default();
    }

    pub fn failed(&mut self, message: String) {
        self.error = Some(message);
        self.saving = false;
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.profile.is_some(), self.saving) {
            (false, true) => "Creating...",
            (false, false) => "Create Profile",
            (true, true) => "Saving...",
            (true, false) => "Save Profile",
        }
    }
}

/// Editable draft inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl ProfileField {
    pub fn get(self, draft: &ProfileDraft) -> &str {
        match self {
            Self::FirstName => &draft.first_name,
            Self::LastName => &draft.last_name,
            Self::PhoneNumber => &draft.phone_number,
        }
    }

    pub fn set(self, draft: &mut ProfileDraft, value: String) {
        let slot = match self {
            Self::FirstName => &mut draft.first_name,
            Self::LastName => &mut draft.last_name,
            Self::PhoneNumber => &mut draft.phone_number,
        };
        *slot = value;
    }
}

/// Heading for the personal card: full name, else email, else "User".
pub fn heading(profile: &Profile, email: Option<&str>) -> String {
    profile.full_name().or_else(|| email.map(str::to_owned)).unwrap_or_else(|| "User".to_owned())
}

// =============================================================================
// SESSION DETAILS
// =============================================================================

/// Browser/network details shown for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionMeta {
    pub ip: String,
    pub location: String,
    pub timezone: String,
    pub user_agent: String,
}

impl Default for SessionMeta {
    fn default() -> Self {
        Self {
            ip: UNKNOWN.to_owned(),
            location: UNKNOWN.to_owned(),
            timezone: UNKNOWN.to_owned(),
            user_agent: UNKNOWN.to_owned(),
        }
    }
}

/// First 100 characters followed by "...".
pub fn truncate_user_agent(user_agent: &str) -> String {
    let head: String = user_agent.chars().take(USER_AGENT_LIMIT).collect();
    format!("{head}...")
}

/// "city, region, country" when both city and region are known.
pub fn location_label(city: Option<&str>, region: Option<&str>, country: Option<&str>) -> Option<String> {
    let city = city.filter(|s| !s.is_empty())?;
    let region = region.filter(|s| !s.is_empty())?;
    Some(format!("{city}, {region}, {}", country.unwrap_or_default()))
}
