//! People directory page state.

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;

use records::{PeopleFilter, PeopleSummary, Profile, RoleFilter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PeopleLayout {
    #[default]
    Cards,
    Table,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeoplePageState {
    pub loading: bool,
    pub error: Option<String>,
    pub people: Vec<Profile>,
    pub filter: PeopleFilter,
    pub layout: PeopleLayout,
}

impl Default for PeoplePageState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            people: Vec::new(),
            filter: PeopleFilter::default(),
            layout: PeopleLayout::default(),
        }
    }
}

impl PeoplePageState {
    pub fn loaded(&mut self, result: Result<Vec<Profile>, String>) {
        self.loading = false;
        match result {
            Ok(people) => self.people = people,
            Err(message) => self.error = Some(message),
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.filter.search = search;
    }

    pub fn set_role(&mut self, value: &str) {
        self.filter.role = RoleFilter::from_value(value);
    }

    pub fn visible(&self) -> Vec<Profile> {
        self.filter.apply(&self.people).into_iter().cloned().collect()
    }

    /// Counts over everyone, ignoring the filter.
    pub fn summary(&self) -> PeopleSummary {
        PeopleSummary::from_people(&self.people)
    }

    /// Empty-state hint; differs when the filter is what hid everyone.
    pub fn empty_hint(&self) -> &'static str {
        if self.filter.is_active() {
            "Try adjusting your search or filter criteria."
        } else {
            "Get started by adding people to your organization."
        }
    }
}
