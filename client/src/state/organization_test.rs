use super::*;

fn org(name: &str) -> Organization {
    Organization { id: Some("1".to_owned()), name: name.to_owned(), ..Organization::default() }
}

#[test]
fn starts_loading() {
    assert_eq!(OrganizationPageState::default().view(), OrganizationView::Loading);
}

#[test]
fn load_error_shows_failure_message() {
    let mut state = OrganizationPageState::default();
    state.loaded(Err("Failed to fetch user profile".to_owned()));
    assert_eq!(state.view(), OrganizationView::Failed("Failed to fetch user profile".to_owned()));
}

#[test]
fn super_admin_without_organization_may_create() {
    let mut state = OrganizationPageState::default();
    state.loaded(Ok(OrganizationContext { organization: None, role: Some("Super Admin".to_owned()) }));
    assert_eq!(state.view(), OrganizationView::Empty { super_admin: true });
}

#[test]
fn stored_organization_replaces_view_and_closes_dialogs() {
    let mut state = OrganizationPageState::default();
    state.loaded(Ok(OrganizationContext { organization: Some(org("Old")), role: None }));
    state.edit_open = true;
    state.begin_save();
    state.stored(org("New"));
    assert_eq!(state.view(), OrganizationView::Ready(org("New")));
    assert!(!state.saving);
    assert!(!state.edit_open);
}

#[test]
fn failed_save_surfaces_error() {
    let mut state = OrganizationPageState::default();
    state.loaded(Ok(OrganizationContext { organization: Some(org("Old")), role: None }));
    state.begin_save();
    state.failed("Failed to save organization changes".to_owned());
    assert_eq!(state.view(), OrganizationView::Failed("Failed to save organization changes".to_owned()));
    assert!(!state.saving);
}

#[test]
fn address_joins_present_parts() {
    let mut o = org("A");
    assert_eq!(address_line(&o), "No address provided");
    o.address_line1 = Some("1 Main St".to_owned());
    o.city = Some("Austin".to_owned());
    o.state_province = Some("TX".to_owned());
    o.postal_code = Some("78701".to_owned());
    assert_eq!(address_line(&o), "1 Main St, Austin, TX 78701");
}

#[test]
fn founded_year_takes_date_prefix() {
    let mut o = org("A");
    assert_eq!(founded_year(&o), "Not specified");
    o.founded_date = Some("1998-05-01".to_owned());
    assert_eq!(founded_year(&o), "1998");
}
