use super::*;

fn person(first: &str, last: &str, phone: &str, role: &str) -> Profile {
    let opt = |s: &str| if s.is_empty() { None } else { Some(s.to_owned()) };
    Profile {
        first_name: opt(first),
        last_name: opt(last),
        phone_number: opt(phone),
        role: opt(role),
        ..Profile::default()
    }
}

fn directory() -> Vec<Profile> {
    vec![
        person("Emily", "Rodriguez", "(555) 123-4567", "case_worker"),
        person("David", "Thompson", "(555) 234-5678", "supervisor"),
        person("Sarah", "Davis", "", "case_worker"),
        person("Michael", "", "", "admin"),
        person("", "", "(555) 999-0000", ""),
    ]
}

#[test]
fn display_name_requires_both_names() {
    assert_eq!(person("Emily", "Rodriguez", "", "").display_name(), "Emily Rodriguez");
    assert_eq!(person("Michael", "", "", "").display_name(), "Unnamed User");
    assert_eq!(person("", "", "", "").display_name(), "Unnamed User");
}

#[test]
fn initials_use_available_names() {
    assert_eq!(person("emily", "rodriguez", "", "").initials(), "ER");
    assert_eq!(person("Michael", "", "", "").initials(), "M");
}

#[test]
fn role_badge_label_replaces_only_first_underscore() {
    assert_eq!(role_badge_label("case_worker"), "CASE WORKER");
    assert_eq!(role_badge_label("organization_admin"), "ORGANIZATION ADMIN");
    assert_eq!(role_badge_label("a_b_c"), "A B_C");
}

#[test]
fn role_tone_covers_known_and_unknown_roles() {
    assert_eq!(role_tone(Some("admin")), RoleTone::Red);
    assert_eq!(role_tone(Some("ORGANIZATION_ADMIN")), RoleTone::Purple);
    assert_eq!(role_tone(Some("trainer")), RoleTone::Orange);
    assert_eq!(role_tone(Some("Super Admin")), RoleTone::Gray);
    assert_eq!(role_tone(None), RoleTone::Gray);
}

#[test]
fn role_filter_parses_select_values() {
    assert_eq!(RoleFilter::from_value("all"), RoleFilter::All);
    assert_eq!(RoleFilter::from_value("supervisor"), RoleFilter::Only(Role::Supervisor));
    assert_eq!(RoleFilter::from_value("nonsense"), RoleFilter::All);
    assert_eq!(RoleFilter::Only(Role::CaseWorker).value(), "case_worker");
}

#[test]
fn people_filter_searches_name_phone_and_role() {
    let people = directory();

    let by_name = PeopleFilter { search: "RODRI".to_owned(), ..PeopleFilter::default() };
    assert_eq!(by_name.apply(&people).len(), 1);

    let by_phone = PeopleFilter { search: "999".to_owned(), ..PeopleFilter::default() };
    assert_eq!(by_phone.apply(&people).len(), 1);

    let by_role = PeopleFilter { search: "worker".to_owned(), ..PeopleFilter::default() };
    assert_eq!(by_role.apply(&people).len(), 2);

    let across_names = PeopleFilter { search: "emily rod".to_owned(), ..PeopleFilter::default() };
    assert_eq!(across_names.apply(&people).len(), 1);
}

#[test]
fn people_filter_combines_search_and_role() {
    let people = directory();
    let filter = PeopleFilter { search: "davis".to_owned(), role: RoleFilter::Only(Role::CaseWorker) };
    let hits = filter.apply(&people);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].display_name(), "Sarah Davis");

    let filter = PeopleFilter { search: "davis".to_owned(), role: RoleFilter::Only(Role::Supervisor) };
    assert!(filter.apply(&people).is_empty());
}

#[test]
fn people_filter_is_active_tracks_inputs() {
    assert!(!PeopleFilter::default().is_active());
    assert!(PeopleFilter { search: "x".to_owned(), ..PeopleFilter::default() }.is_active());
    assert!(PeopleFilter { role: RoleFilter::Only(Role::Admin), ..PeopleFilter::default() }.is_active());
}

#[test]
fn people_summary_counts_roles() {
    let summary = PeopleSummary::from_people(&directory());
    assert_eq!(summary, PeopleSummary { total: 5, case_workers: 2, supervisors: 1, admins: 1 });
}

#[test]
fn draft_to_new_profile_nulls_blanks_and_links_user() {
    let draft = ProfileDraft { first_name: "Ada".to_owned(), last_name: String::new(), phone_number: " ".to_owned() };
    let body = draft.to_new_profile("user-1");
    assert_eq!(body.first_name.as_deref(), Some("Ada"));
    assert_eq!(body.last_name, None);
    assert_eq!(body.phone_number, None);
    assert_eq!(body.role, None);

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["userId"], "user-1");
}

#[test]
fn profile_reads_user_id_column() {
    let profile: Profile =
        serde_json::from_str(r#"{"id": 3, "userId": "abc", "organization_id": 9, "role": "trainer"}"#).unwrap();
    assert_eq!(profile.id.as_deref(), Some("3"));
    assert_eq!(profile.user_id.as_deref(), Some("abc"));
    assert_eq!(profile.organization_id.as_deref(), Some("9"));
}

#[test]
fn draft_round_trips_from_profile() {
    let profile = person("Emily", "Rodriguez", "(555) 123-4567", "case_worker");
    let draft = ProfileDraft::from_profile(&profile);
    assert_eq!(draft.to_patch().first_name.as_deref(), Some("Emily"));
    assert_eq!(draft.to_patch().phone_number.as_deref(), Some("(555) 123-4567"));
}
