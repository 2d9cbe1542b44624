//! Organization page load/save state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page fetches `{organization, role}` on mount. Failures arrive as the
//! user-facing message from the API; any of them replaces the page body with
//! a retry card.

#[cfg(test)]
#[path = "organization_test.rs"]
mod organization_test;

use records::{Organization, OrganizationContext};

/// What the page body shows.
#[derive(Clone, Debug, PartialEq)]
pub enum OrganizationView {
    Loading,
    Failed(String),
    /// No organization yet; Super Admins may create one.
    Empty { super_admin: bool },
    Ready(Organization),
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrganizationPageState {
    pub loading: bool,
    pub error: Option<String>,
    pub context: OrganizationContext,
    pub saving: bool,
    pub edit_open: bool,
    pub create_open: bool,
}

impl Default for OrganizationPageState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            context: OrganizationContext::default(),
            saving: false,
            edit_open: false,
            create_open: false,
        }
    }
}

impl OrganizationPageState {
    pub fn loaded(&mut self, result: Result<OrganizationContext, String>) {
        self.loading = false;
        match result {
            Ok(context) => self.context = context,
            Err(message) => self.error = Some(message),
        }
    }

    pub fn view(&self) -> OrganizationView {
        if self.loading {
            return OrganizationView::Loading;
        }
        if let Some(message) = &self.error {
            return OrganizationView::Failed(message.clone());
        }
        match &self.context.organization {
            Some(org) => OrganizationView::Ready(org.clone()),
            None => OrganizationView::Empty { super_admin: self.context.is_super_admin() },
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.context.is_super_admin()
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
    }

    /// A save or create succeeded; show the stored row and close dialogs.
    pub fn stored(&mut self, organization: Organization) {
        self.context.organization = Some(organization);
        self.saving = false;
        self.edit_open = false;
        self.create_open = false;
    }

    /// A save or create failed; the message replaces the page body.
    pub fn failed(&mut self, message: String) {
        self.error = Some(message);
        self.saving = false;
        self.edit_open = false;
        self.create_open = false;
    }
}

/// Street address on one line, or a placeholder when none is stored.
pub fn address_line(org: &Organization) -> String {
    let Some(line1) = org.address_line1.as_deref().filter(|s| !s.is_empty()) else {
        return "No address provided".to_owned();
    };
    let mut out = line1.to_owned();
    for part in [&org.address_line2, &org.city, &org.state_province] {
        if let Some(part) = part.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(", ");
            out.push_str(part);
        }
    }
    if let Some(postal) = org.postal_code.as_deref().filter(|s| !s.is_empty()) {
        out.push(' ');
        out.push_str(postal);
    }
    out
}

/// Four-digit founding year, or "Not specified".
pub fn founded_year(org: &Organization) -> String {
    org.founded_date
        .as_deref()
        .and_then(|d| d.get(..4))
        .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
        .map_or_else(|| "Not specified".to_owned(), str::to_owned)
}
