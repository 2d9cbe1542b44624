use super::*;

fn existing() -> Organization {
    Organization {
        id: Some("7".to_owned()),
        name: "Bright Futures".to_owned(),
        email: Some("hello@bright.org".to_owned()),
        city: Some("Austin".to_owned()),
        status: Some("active".to_owned()),
        created_at: Some("2024-01-01T00:00:00Z".to_owned()),
        ..Organization::default()
    }
}

#[test]
fn empty_name_blocks_submission() {
    let mut form = OrgFormState::edit(&existing());
    form.set(OrgField::Name, "  ");
    assert_eq!(form.submit(), None);
    assert_eq!(form.error(OrgField::Name), Some("Organization name is required"));
}

#[test]
fn invalid_email_blocks_submission() {
    let mut form = OrgFormState::edit(&existing());
    form.set(OrgField::Email, "not-an-email");
    assert_eq!(form.submit(), None);
    assert_eq!(form.error(OrgField::Email), Some("Please enter a valid email address"));
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = OrgFormState::create();
    assert_eq!(form.submit(), None);
    assert!(form.error(OrgField::Name).is_some());
    assert!(form.error(OrgField::Email).is_some());
    form.set(OrgField::Name, "Acme");
    assert_eq!(form.error(OrgField::Name), None);
    assert!(form.error(OrgField::Email).is_some());
}

#[test]
fn valid_submission_merges_edits_over_initial() {
    let mut form = OrgFormState::edit(&existing());
    form.set(OrgField::City, "Dallas");
    form.set(OrgField::NumberOfEmployees, "42");
    let submission = form.submit().unwrap();
    assert_eq!(submission.merged.id.as_deref(), Some("7"));
    assert_eq!(submission.merged.name, "Bright Futures");
    assert_eq!(submission.merged.city.as_deref(), Some("Dallas"));
    assert_eq!(submission.merged.number_of_employees, Some(42));
    assert_eq!(submission.merged.created_at, existing().created_at);
    assert_eq!(submission.draft.city, "Dallas");
}

#[test]
fn submit_label_follows_mode_and_saving() {
    let edit = OrgFormState::edit(&existing());
    assert_eq!(edit.submit_label(false), "Save Changes");
    assert_eq!(edit.submit_label(true), "Saving...");
    let create = OrgFormState::create();
    assert_eq!(create.submit_label(false), "Create Organization");
    assert_eq!(create.submit_label(true), "Creating...");
}
