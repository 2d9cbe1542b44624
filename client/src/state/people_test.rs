use super::*;

fn person(first: &str, last: &str, role: &str) -> Profile {
    Profile {
        first_name: Some(first.to_owned()),
        last_name: Some(last.to_owned()),
        role: Some(role.to_owned()),
        ..Profile::default()
    }
}

fn loaded() -> PeoplePageState {
    let mut state = PeoplePageState::default();
    state.loaded(Ok(vec![
        person("Ada", "Lovelace", "admin"),
        person("Grace", "Hopper", "supervisor"),
        person("Alan", "Turing", "case_worker"),
    ]));
    state
}

#[test]
fn search_and_role_narrow_visible_people() {
    let mut state = loaded();
    state.set_search("hop".to_owned());
    assert_eq!(state.visible().len(), 1);
    state.set_search(String::new());
    state.set_role("case_worker");
    assert_eq!(state.visible()[0].first_name.as_deref(), Some("Alan"));
}

#[test]
fn summary_ignores_filter() {
    let mut state = loaded();
    state.set_role("admin");
    let summary = state.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.supervisors, 1);
}

#[test]
fn empty_hint_depends_on_filter() {
    let mut state = loaded();
    assert_eq!(state.empty_hint(), "Get started by adding people to your organization.");
    state.set_search("zzz".to_owned());
    assert!(state.visible().is_empty());
    assert_eq!(state.empty_hint(), "Try adjusting your search or filter criteria.");
}

#[test]
fn load_error_is_kept() {
    let mut state = PeoplePageState::default();
    state.loaded(Err("Failed to fetch people".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch people"));
}
