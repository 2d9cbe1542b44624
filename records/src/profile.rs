//! Profile rows, roles, and the people directory filter.

use serde::{Deserialize, Serialize};

use crate::none_if_blank;

/// One row of the `profile` table, linked 1:1 to an auth user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "crate::deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default, deserialize_with = "crate::deserialize_opt_id")]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

impl Profile {
    /// "First Last" when both names are present.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => Some(format!("{first} {last}")),
            _ => None,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.full_name().unwrap_or_else(|| "Unnamed User".to_owned())
    }

    /// Up to two uppercase initials for avatar bubbles.
    #[must_use]
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|name| name.as_deref().and_then(|n| n.chars().next()))
            .flat_map(char::to_uppercase)
            .collect()
    }

    fn search_haystack_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

// =============================================================================
// ROLES
// =============================================================================

/// Known profile roles. Rows store the snake_case string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    OrganizationAdmin,
    Supervisor,
    CaseWorker,
    Trainer,
}

/// Badge color family for a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleTone {
    Red,
    Purple,
    Blue,
    Green,
    Orange,
    Gray,
}

impl RoleTone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Gray => "gray",
        }
    }
}

impl Role {
    pub const ALL: [Self; 5] = [Self::Admin, Self::OrganizationAdmin, Self::Supervisor, Self::CaseWorker, Self::Trainer];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::OrganizationAdmin => "organization_admin",
            Self::Supervisor => "supervisor",
            Self::CaseWorker => "case_worker",
            Self::Trainer => "trainer",
        }
    }

    /// Title-case label for filter menus.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::OrganizationAdmin => "Organization Admin",
            Self::Supervisor => "Supervisor",
            Self::CaseWorker => "Case Worker",
            Self::Trainer => "Trainer",
        }
    }

    /// Case-insensitive lookup of a stored role string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lower = raw.to_ascii_lowercase();
        Self::ALL.into_iter().find(|role| role.as_str() == lower)
    }

    #[must_use]
    pub fn tone(self) -> RoleTone {
        match self {
            Self::Admin => RoleTone::Red,
            Self::OrganizationAdmin => RoleTone::Purple,
            Self::Supervisor => RoleTone::Blue,
            Self::CaseWorker => RoleTone::Green,
            Self::Trainer => RoleTone::Orange,
        }
    }
}

/// Tone for a possibly-missing or unknown role string.
#[must_use]
pub fn role_tone(raw: Option<&str>) -> RoleTone {
    raw.and_then(Role::parse).map_or(RoleTone::Gray, Role::tone)
}

/// Badge text: the first underscore becomes a space, then uppercase.
#[must_use]
pub fn role_badge_label(raw: &str) -> String {
    raw.replacen('_', " ", 1).to_uppercase()
}

// =============================================================================
// PEOPLE FILTER
// =============================================================================

/// Role dropdown selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    /// Parse a `<select>` value; anything unrecognized means "all".
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Role::parse(value).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(role) => role.as_str(),
        }
    }
}

/// Search text plus role selection for the people directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeopleFilter {
    pub search: String,
    pub role: RoleFilter,
}

impl PeopleFilter {
    /// True when either the search box or the role filter narrows results.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.role != RoleFilter::All
    }

    #[must_use]
    pub fn matches(&self, person: &Profile) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            person.search_haystack_name().contains(&needle)
                || person.phone_number.as_deref().is_some_and(|p| p.to_lowercase().contains(&needle))
                || person.role.as_deref().is_some_and(|r| r.to_lowercase().contains(&needle))
        };
        let matches_role = match self.role {
            RoleFilter::All => true,
            RoleFilter::Only(role) => person.role.as_deref() == Some(role.as_str()),
        };
        matches_search && matches_role
    }

    #[must_use]
    pub fn apply<'a>(&self, people: &'a [Profile]) -> Vec<&'a Profile> {
        people.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Headline counts shown above the directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeopleSummary {
    pub total: usize,
    pub case_workers: usize,
    pub supervisors: usize,
    pub admins: usize,
}

impl PeopleSummary {
    #[must_use]
    pub fn from_people(people: &[Profile]) -> Self {
        let count = |role: Role| people.iter().filter(|p| p.role.as_deref() == Some(role.as_str())).count();
        Self {
            total: people.len(),
            case_workers: count(Role::CaseWorker),
            supervisors: count(Role::Supervisor),
            admins: count(Role::Admin),
        }
    }
}

// =============================================================================
// PROFILE FORM
// =============================================================================

/// Self-service fields a user can fill in on their own profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl ProfileDraft {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone().unwrap_or_default(),
            last_name: profile.last_name.clone().unwrap_or_default(),
            phone_number: profile.phone_number.clone().unwrap_or_default(),
        }
    }

    /// Insert body for a brand-new profile owned by `user_id`.
    #[must_use]
    pub fn to_new_profile(&self, user_id: &str) -> NewProfile {
        NewProfile {
            first_name: none_if_blank(&self.first_name),
            last_name: none_if_blank(&self.last_name),
            phone_number: none_if_blank(&self.phone_number),
            role: None,
            organization: None,
            team: None,
            user_id: user_id.to_owned(),
        }
    }

    /// Update body touching only the self-service fields.
    #[must_use]
    pub fn to_patch(&self) -> ProfilePatch {
        ProfilePatch {
            first_name: none_if_blank(&self.first_name),
            last_name: none_if_blank(&self.last_name),
            phone_number: none_if_blank(&self.phone_number),
        }
    }
}

/// Body for inserting a profile row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
    pub organization: Option<String>,
    pub team: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Body for a self-edit of a profile row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;
