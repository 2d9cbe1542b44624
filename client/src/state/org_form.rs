//! Organization edit/create form state.
//!
//! Field errors come from `OrganizationDraft::validate`, the same rules the
//! server re-checks. Editing a field clears only that field's error.

#[cfg(test)]
#[path = "org_form_test.rs"]
mod org_form_test;

use records::{OrgField, Organization, OrganizationDraft, ValidationErrors};

/// A validated form ready to send: the draft for the API and the edited
/// record as it should appear locally.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub draft: OrganizationDraft,
    pub merged: Organization,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrgFormState {
    pub initial: Organization,
    pub draft: OrganizationDraft,
    pub errors: ValidationErrors,
    pub create_mode: bool,
}

impl OrgFormState {
    /// Form pre-filled from an existing organization.
    pub fn edit(initial: &Organization) -> Self {
        Self {
            initial: initial.clone(),
            draft: OrganizationDraft::from_record(initial),
            errors: ValidationErrors::default(),
            create_mode: false,
        }
    }

    /// Empty form for a new organization.
    pub fn create() -> Self {
        Self { draft: OrganizationDraft::blank(), create_mode: true, ..Self::default() }
    }

    pub fn value(&self, field: OrgField) -> String {
        self.draft.get(field)
    }

    pub fn error(&self, field: OrgField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn set(&mut self, field: OrgField, value: &str) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Validate; on success return the submission, otherwise record the
    /// field errors and return `None`.
    pub fn submit(&mut self) -> Option<Submission> {
        match self.draft.validate() {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                Some(Submission { draft: self.draft.clone(), merged: self.draft.merge_over(&self.initial) })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn submit_label(&self, saving: bool) -> &'static str {
        match (self.create_mode, saving) {
            (true, true) => "Creating...",
            (false, true) => "Saving...",
            (true, false) => "Create Organization",
            (false, false) => "Save Changes",
        }
    }
}

/// Input placeholder for a field.
pub fn placeholder(field: OrgField) -> &'static str {
    match field {
        OrgField::Name => "Enter organization name",
        OrgField::Industry => "e.g., Healthcare, Technology, Education",
        OrgField::Description => "Brief description of your organization",
        OrgField::Email => "contact@organization.com",
        OrgField::PhoneNumber => "(555) 123-4567",
        OrgField::Website => "https://www.organization.com",
        OrgField::AddressLine1 => "123 Main Street",
        OrgField::AddressLine2 => "Suite 100 (optional)",
        OrgField::City => "Los Angeles",
        OrgField::StateProvince => "CA",
        OrgField::PostalCode => "90210",
        OrgField::Country => "United States",
        OrgField::NumberOfEmployees => "50",
        OrgField::FoundedDate | OrgField::Status => "",
    }
}
