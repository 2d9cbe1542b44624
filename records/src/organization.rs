//! Organization rows and the edit/create form that mutates them.
//!
//! DESIGN
//! ======
//! `Organization` mirrors the `organizations` table. Editing goes through an
//! `OrganizationDraft`, which holds every editable column as plain text (what
//! the form inputs hold) and knows how to validate itself, how to merge back
//! over the record it was opened from, and how to become the JSON body for an
//! insert or update.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::none_if_blank;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://.+").expect("website pattern compiles"));

/// Status assigned to newly created organizations.
pub const DEFAULT_STATUS: &str = "active";

// =============================================================================
// RECORD
// =============================================================================

/// One row of the `organizations` table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default, deserialize_with = "crate::deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub founded_date: Option<String>,
    #[serde(default)]
    pub number_of_employees: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Organization {
    /// City, state and country joined for one-line display, skipping blanks.
    #[must_use]
    pub fn locality(&self) -> String {
        [&self.city, &self.state_province, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref().map(str::trim).filter(|s| !s.is_empty()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Editable organization columns, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgField {
    Name,
    Description,
    Industry,
    Website,
    PhoneNumber,
    Email,
    AddressLine1,
    AddressLine2,
    City,
    StateProvince,
    PostalCode,
    Country,
    FoundedDate,
    NumberOfEmployees,
    Status,
}

impl OrgField {
    pub const ALL: [Self; 15] = [
        Self::Name,
        Self::Description,
        Self::Industry,
        Self::Website,
        Self::PhoneNumber,
        Self::Email,
        Self::AddressLine1,
        Self::AddressLine2,
        Self::City,
        Self::StateProvince,
        Self::PostalCode,
        Self::Country,
        Self::FoundedDate,
        Self::NumberOfEmployees,
        Self::Status,
    ];

    /// Column name in the `organizations` table.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Industry => "industry",
            Self::Website => "website",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
            Self::AddressLine1 => "address_line1",
            Self::AddressLine2 => "address_line2",
            Self::City => "city",
            Self::StateProvince => "state_province",
            Self::PostalCode => "postal_code",
            Self::Country => "country",
            Self::FoundedDate => "founded_date",
            Self::NumberOfEmployees => "number_of_employees",
            Self::Status => "status",
        }
    }

    /// Human label used next to the form input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Organization Name",
            Self::Description => "Description",
            Self::Industry => "Industry",
            Self::Website => "Website",
            Self::PhoneNumber => "Phone Number",
            Self::Email => "Email",
            Self::AddressLine1 => "Address Line 1",
            Self::AddressLine2 => "Address Line 2",
            Self::City => "City",
            Self::StateProvince => "State / Province",
            Self::PostalCode => "Postal Code",
            Self::Country => "Country",
            Self::FoundedDate => "Founded Date",
            Self::NumberOfEmployees => "Number of Employees",
            Self::Status => "Status",
        }
    }
}

/// Field-level validation failures keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} organization field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub BTreeMap<OrgField, String>);

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: OrgField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self, field: OrgField) {
        self.0.remove(&field);
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Form-side copy of an organization: text inputs plus a parsed headcount.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationDraft {
    pub name: String,
    pub description: String,
    pub industry: String,
    pub website: String,
    pub phone_number: String,
    pub email: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    pub founded_date: String,
    pub number_of_employees: Option<i64>,
    pub status: String,
}

impl OrganizationDraft {
    /// Empty draft for the create flow.
    #[must_use]
    pub fn blank() -> Self {
        Self { status: DEFAULT_STATUS.to_owned(), ..Self::default() }
    }

    /// Draft pre-filled from an existing record.
    #[must_use]
    pub fn from_record(org: &Organization) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            name: org.name.clone(),
            description: text(&org.description),
            industry: text(&org.industry),
            website: text(&org.website),
            phone_number: text(&org.phone_number),
            email: text(&org.email),
            address_line1: text(&org.address_line1),
            address_line2: text(&org.address_line2),
            city: text(&org.city),
            state_province: text(&org.state_province),
            postal_code: text(&org.postal_code),
            country: text(&org.country),
            founded_date: text(&org.founded_date),
            number_of_employees: org.number_of_employees,
            status: org.status.clone().unwrap_or_else(|| DEFAULT_STATUS.to_owned()),
        }
    }

    /// Current input text for `field`.
    #[must_use]
    pub fn get(&self, field: OrgField) -> String {
        match field {
            OrgField::NumberOfEmployees => self.number_of_employees.map(|n| n.to_string()).unwrap_or_default(),
            other => self.text(other).cloned().unwrap_or_default(),
        }
    }

    /// Apply raw input text to `field`. A headcount that does not parse as
    /// an integer is treated as unset.
    pub fn set(&mut self, field: OrgField, value: &str) {
        match field {
            OrgField::NumberOfEmployees => self.number_of_employees = value.trim().parse().ok(),
            other => {
                if let Some(slot) = self.text_mut(other) {
                    value.clone_into(slot);
                }
            }
        }
    }

    /// Backing string of a text field; `None` for the numeric headcount.
    fn text(&self, field: OrgField) -> Option<&String> {
        let slot = match field {
            OrgField::Name => &self.name,
            OrgField::Description => &self.description,
            OrgField::Industry => &self.industry,
            OrgField::Website => &self.website,
            OrgField::PhoneNumber => &self.phone_number,
            OrgField::Email => &self.email,
            OrgField::AddressLine1 => &self.address_line1,
            OrgField::AddressLine2 => &self.address_line2,
            OrgField::City => &self.city,
            OrgField::StateProvince => &self.state_province,
            OrgField::PostalCode => &self.postal_code,
            OrgField::Country => &self.country,
            OrgField::FoundedDate => &self.founded_date,
            OrgField::Status => &self.status,
            OrgField::NumberOfEmployees => return None,
        };
        Some(slot)
    }

    fn text_mut(&mut self, field: OrgField) -> Option<&mut String> {
        let slot = match field {
            OrgField::Name => &mut self.name,
            OrgField::Description => &mut self.description,
            OrgField::Industry => &mut self.industry,
            OrgField::Website => &mut self.website,
            OrgField::PhoneNumber => &mut self.phone_number,
            OrgField::Email => &mut self.email,
            OrgField::AddressLine1 => &mut self.address_line1,
            OrgField::AddressLine2 => &mut self.address_line2,
            OrgField::City => &mut self.city,
            OrgField::StateProvince => &mut self.state_province,
            OrgField::PostalCode => &mut self.postal_code,
            OrgField::Country => &mut self.country,
            OrgField::FoundedDate => &mut self.founded_date,
            OrgField::Status => &mut self.status,
            OrgField::NumberOfEmployees => return None,
        };
        Some(slot)
    }

    /// Check presence and format rules.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its user-facing message.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(OrgField::Name, "Organization name is required".to_owned());
        }

        if self.email.trim().is_empty() {
            errors.insert(OrgField::Email, "Email is required".to_owned());
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert(OrgField::Email, "Please enter a valid email address".to_owned());
        }

        if !self.website.is_empty() && !WEBSITE_RE.is_match(&self.website) {
            errors.insert(
                OrgField::Website,
                "Please enter a valid website URL (include http:// or https://)".to_owned(),
            );
        }

        if self.number_of_employees.is_some_and(|n| n < 0) {
            errors.insert(OrgField::NumberOfEmployees, "Number of employees cannot be negative".to_owned());
        }

        if errors.is_empty() { Ok(()) } else { Err(ValidationErrors(errors)) }
    }

    /// Overlay the draft onto `initial`, keeping identity and timestamps.
    /// Blank text becomes `None`.
    #[must_use]
    pub fn merge_over(&self, initial: &Organization) -> Organization {
        Organization {
            id: initial.id.clone(),
            name: self.name.clone(),
            description: none_if_blank(&self.description),
            industry: none_if_blank(&self.industry),
            website: none_if_blank(&self.website),
            phone_number: none_if_blank(&self.phone_number),
            email: none_if_blank(&self.email),
            address_line1: none_if_blank(&self.address_line1),
            address_line2: none_if_blank(&self.address_line2),
            city: none_if_blank(&self.city),
            state_province: none_if_blank(&self.state_province),
            postal_code: none_if_blank(&self.postal_code),
            country: none_if_blank(&self.country),
            founded_date: none_if_blank(&self.founded_date),
            number_of_employees: self.number_of_employees,
            status: none_if_blank(&self.status).or_else(|| initial.status.clone()),
            created_at: initial.created_at.clone(),
            updated_at: initial.updated_at.clone(),
        }
    }

    /// Body for an update, stamped with `updated_at`.
    #[must_use]
    pub fn to_changes(&self, updated_at: &str) -> OrganizationChanges {
        OrganizationChanges { updated_at: Some(updated_at.to_owned()), ..self.changes_with_status(none_if_blank(&self.status)) }
    }

    /// Body for an insert; new organizations always start `active`.
    #[must_use]
    pub fn to_insert(&self) -> OrganizationChanges {
        self.changes_with_status(Some(DEFAULT_STATUS.to_owned()))
    }

    fn changes_with_status(&self, status: Option<String>) -> OrganizationChanges {
        OrganizationChanges {
            name: self.name.trim().to_owned(),
            description: none_if_blank(&self.description),
            industry: none_if_blank(&self.industry),
            website: none_if_blank(&self.website),
            phone_number: none_if_blank(&self.phone_number),
            email: none_if_blank(&self.email),
            address_line1: none_if_blank(&self.address_line1),
            address_line2: none_if_blank(&self.address_line2),
            city: none_if_blank(&self.city),
            state_province: none_if_blank(&self.state_province),
            postal_code: none_if_blank(&self.postal_code),
            country: none_if_blank(&self.country),
            founded_date: none_if_blank(&self.founded_date),
            number_of_employees: self.number_of_employees,
            status,
            updated_at: None,
        }
    }
}

/// Column values written by an insert or update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationChanges {
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub founded_date: Option<String>,
    pub number_of_employees: Option<i64>,
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl OrganizationChanges {
    /// Write these column values onto `org`. `updated_at` is only touched when set.
    pub fn apply_to(&self, org: &mut Organization) {
        org.name.clone_from(&self.name);
        org.description.clone_from(&self.description);
        org.industry.clone_from(&self.industry);
        org.website.clone_from(&self.website);
        org.phone_number.clone_from(&self.phone_number);
        org.email.clone_from(&self.email);
        org.address_line1.clone_from(&self.address_line1);
        org.address_line2.clone_from(&self.address_line2);
        org.city.clone_from(&self.city);
        org.state_province.clone_from(&self.state_province);
        org.postal_code.clone_from(&self.postal_code);
        org.country.clone_from(&self.country);
        org.founded_date.clone_from(&self.founded_date);
        org.number_of_employees = self.number_of_employees;
        org.status.clone_from(&self.status);
        if self.updated_at.is_some() {
            org.updated_at.clone_from(&self.updated_at);
        }
    }
}

#[cfg(test)]
#[path = "organization_test.rs"]
mod organization_test;
