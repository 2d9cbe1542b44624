use super::*;

fn profile() -> Profile {
    Profile {
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        phone_number: Some("555-0100".to_owned()),
        ..Profile::default()
    }
}

#[test]
fn missing_profile_prompts_build() {
    let mut state = ProfilePageState::default();
    assert_eq!(state.mode(), ProfileMode::Loading);
    state.loaded(Ok(None));
    assert_eq!(state.mode(), ProfileMode::Missing);
    state.open_form();
    assert_eq!(state.mode(), ProfileMode::Creating);
    assert_eq!(state.draft, ProfileDraft::default());
    assert_eq!(state.submit_label(), "Create Profile");
}

#[test]
fn editing_prefills_existing_values() {
    let mut state = ProfilePageState::default();
    state.loaded(Ok(Some(profile())));
    assert_eq!(state.mode(), ProfileMode::Viewing);
    state.open_form();
    assert_eq!(state.mode(), ProfileMode::Editing);
    assert_eq!(state.draft.first_name, "Ada");
    assert_eq!(state.draft.phone_number, "555-0100");
}

#[test]
fn stored_profile_closes_form() {
    let mut state = ProfilePageState::default();
    state.loaded(Ok(None));
    state.open_form();
    state.saving = true;
    assert_eq!(state.submit_label(), "Creating...");
    state.stored(profile());
    assert_eq!(state.mode(), ProfileMode::Viewing);
    assert!(!state.saving);
}

#[test]
fn load_failure_shows_error() {
    let mut state = ProfilePageState::default();
    state.loaded(Err("Failed to fetch user profile".to_owned()));
    assert_eq!(state.mode(), ProfileMode::Failed);
}

#[test]
fn heading_falls_back_to_email_then_user() {
    assert_eq!(heading(&profile(), Some("a@b.co")), "Ada Lovelace");
    assert_eq!(heading(&Profile::default(), Some("a@b.co")), "a@b.co");
    assert_eq!(heading(&Profile::default(), None), "User");
}

#[test]
fn user_agent_is_cut_at_limit_with_ellipsis() {
    let long = "x".repeat(150);
    let shown = truncate_user_agent(&long);
    assert_eq!(shown.len(), USER_AGENT_LIMIT + 3);
    assert!(shown.ends_with("..."));
    assert_eq!(truncate_user_agent("Mozilla"), "Mozilla...");
}

#[test]
fn location_needs_city_and_region() {
    assert_eq!(
        location_label(Some("Austin"), Some("Texas"), Some("United States")).as_deref(),
        Some("Austin, Texas, United States")
    );
    assert_eq!(location_label(Some("Austin"), None, Some("United States")), None);
}

#[test]
fn session_meta_defaults_to_unknown() {
    let meta = SessionMeta::default();
    assert_eq!(meta.ip, UNKNOWN);
    assert_eq!(meta.timezone, UNKNOWN);
}

#[test]
fn draft_fields_write_through() {
    let mut draft = ProfileDraft::default();
    ProfileField::PhoneNumber.set(&mut draft, "555-0199".to_owned());
    ProfileField::LastName.set(&mut draft, "Hopper".to_owned());
    assert_eq!(draft.phone_number, "555-0199");
    assert_eq!(ProfileField::LastName.get(&draft), "Hopper");
    assert_eq!(ProfileField::FirstName.get(&draft), "");
}
