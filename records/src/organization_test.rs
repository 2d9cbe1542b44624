use super::*;

fn valid_draft() -> OrganizationDraft {
    OrganizationDraft {
        name: "Harbor Foster Care".to_owned(),
        email: "ops@harbor.org".to_owned(),
        website: "https://harbor.org".to_owned(),
        number_of_employees: Some(42),
        ..OrganizationDraft::blank()
    }
}

fn existing() -> Organization {
    Organization {
        id: Some("7".to_owned()),
        name: "Old Name".to_owned(),
        description: Some("Old description".to_owned()),
        email: Some("old@harbor.org".to_owned()),
        city: Some("Tacoma".to_owned()),
        status: Some("active".to_owned()),
        created_at: Some("2024-01-01T00:00:00Z".to_owned()),
        updated_at: Some("2024-01-02T00:00:00Z".to_owned()),
        ..Organization::default()
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_accepts_well_formed_draft() {
    assert_eq!(valid_draft().validate(), Ok(()));
}

#[test]
fn validate_requires_name() {
    let draft = OrganizationDraft { name: "   ".to_owned(), ..valid_draft() };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get(OrgField::Name), Some("Organization name is required"));
    assert_eq!(errors.0.len(), 1);
}

#[test]
fn validate_requires_email() {
    let draft = OrganizationDraft { email: String::new(), ..valid_draft() };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get(OrgField::Email), Some("Email is required"));
}

#[test]
fn validate_rejects_malformed_email() {
    for bad in ["no-at-sign.org", "a@b", "a b@c.org", "@c.org", "a@@c.org"] {
        let draft = OrganizationDraft { email: bad.to_owned(), ..valid_draft() };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get(OrgField::Email),
            Some("Please enter a valid email address"),
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn validate_website_must_carry_scheme_when_present() {
    let draft = OrganizationDraft { website: "harbor.org".to_owned(), ..valid_draft() };
    let errors = draft.validate().unwrap_err();
    assert_eq!(
        errors.get(OrgField::Website),
        Some("Please enter a valid website URL (include http:// or https://)")
    );

    let draft = OrganizationDraft { website: String::new(), ..valid_draft() };
    assert_eq!(draft.validate(), Ok(()));

    let draft = OrganizationDraft { website: "http://harbor.org".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn validate_rejects_negative_headcount() {
    let draft = OrganizationDraft { number_of_employees: Some(-1), ..valid_draft() };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get(OrgField::NumberOfEmployees), Some("Number of employees cannot be negative"));

    let draft = OrganizationDraft { number_of_employees: Some(0), ..valid_draft() };
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn validate_reports_every_failing_field() {
    let draft = OrganizationDraft {
        name: String::new(),
        email: "bad".to_owned(),
        website: "ftp://x".to_owned(),
        number_of_employees: Some(-5),
        ..OrganizationDraft::blank()
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.0.len(), 4);
}

#[test]
fn validation_errors_clear_removes_single_field() {
    let mut errors = OrganizationDraft::blank().validate().unwrap_err();
    assert!(errors.get(OrgField::Name).is_some());
    errors.clear(OrgField::Name);
    assert!(errors.get(OrgField::Name).is_none());
    assert!(errors.get(OrgField::Email).is_some());
}

// =============================================================================
// get / set
// =============================================================================

#[test]
fn set_and_get_round_trip_text_fields() {
    let mut draft = OrganizationDraft::blank();
    for field in OrgField::ALL {
        if field == OrgField::NumberOfEmployees {
            continue;
        }
        draft.set(field, field.column());
        assert_eq!(draft.get(field), field.column());
    }
}

#[test]
fn set_headcount_parses_or_clears() {
    let mut draft = OrganizationDraft::blank();
    draft.set(OrgField::NumberOfEmployees, " 12 ");
    assert_eq!(draft.number_of_employees, Some(12));
    assert_eq!(draft.get(OrgField::NumberOfEmployees), "12");
    draft.set(OrgField::NumberOfEmployees, "twelve");
    assert_eq!(draft.number_of_employees, None);
    assert_eq!(draft.get(OrgField::NumberOfEmployees), "");
}

#[test]
fn headcount_never_touches_status() {
    let mut draft = OrganizationDraft::blank();
    draft.set(OrgField::Status, "inactive");
    draft.set(OrgField::NumberOfEmployees, "40");
    draft.set(OrgField::NumberOfEmployees, "forty");
    assert_eq!(draft.status, "inactive");
    assert_eq!(draft.get(OrgField::Status), "inactive");
    assert_eq!(draft.text(OrgField::NumberOfEmployees), None);
    assert!(draft.text_mut(OrgField::NumberOfEmployees).is_none());
}

#[test]
fn blank_draft_defaults_status_active() {
    assert_eq!(OrganizationDraft::blank().status, "active");
}

// =============================================================================
// merge / changes
// =============================================================================

#[test]
fn merge_over_keeps_identity_and_overlays_edits() {
    let initial = existing();
    let mut draft = OrganizationDraft::from_record(&initial);
    draft.set(OrgField::Name, "Harbor Foster Care");
    draft.set(OrgField::Description, "");
    draft.set(OrgField::Industry, "Foster Care");

    let merged = draft.merge_over(&initial);
    assert_eq!(merged.id.as_deref(), Some("7"));
    assert_eq!(merged.created_at, initial.created_at);
    assert_eq!(merged.name, "Harbor Foster Care");
    assert_eq!(merged.description, None);
    assert_eq!(merged.industry.as_deref(), Some("Foster Care"));
    assert_eq!(merged.city.as_deref(), Some("Tacoma"));
    assert_eq!(merged.email.as_deref(), Some("old@harbor.org"));
}

#[test]
fn to_insert_maps_blanks_to_null_and_forces_active() {
    let draft = OrganizationDraft { status: "suspended".to_owned(), city: "  ".to_owned(), ..valid_draft() };
    let body = draft.to_insert();
    assert_eq!(body.status.as_deref(), Some("active"));
    assert_eq!(body.city, None);
    assert_eq!(body.updated_at, None);

    let json = serde_json::to_value(&body).unwrap();
    assert!(json.get("updated_at").is_none());
    assert!(json.get("city").unwrap().is_null());
}

#[test]
fn to_changes_stamps_updated_at() {
    let body = valid_draft().to_changes("2024-05-01T10:00:00Z");
    assert_eq!(body.updated_at.as_deref(), Some("2024-05-01T10:00:00Z"));
    assert_eq!(body.status.as_deref(), Some("active"));
    assert_eq!(body.number_of_employees, Some(42));
}

#[test]
fn organization_deserializes_numeric_id_and_null_name() {
    let org: Organization = serde_json::from_str(r#"{"id": 12, "name": null, "email": "a@b.co"}"#).unwrap();
    assert_eq!(org.id.as_deref(), Some("12"));
    assert_eq!(org.name, "");
    assert_eq!(org.email.as_deref(), Some("a@b.co"));
}

#[test]
fn locality_skips_blank_parts() {
    let org = Organization {
        city: Some("Tacoma".to_owned()),
        state_province: Some(" ".to_owned()),
        country: Some("USA".to_owned()),
        ..Organization::default()
    };
    assert_eq!(org.locality(), "Tacoma, USA");
}

#[test]
fn apply_to_keeps_updated_at_when_changes_carry_none() {
    let mut org = existing();
    let before = org.updated_at.clone();
    valid_draft().to_insert().apply_to(&mut org);
    assert_eq!(org.updated_at, before);
    assert_eq!(org.name, valid_draft().name);

    valid_draft().to_changes("2025-01-01T00:00:00Z").apply_to(&mut org);
    assert_eq!(org.updated_at.as_deref(), Some("2025-01-01T00:00:00Z"));
}
