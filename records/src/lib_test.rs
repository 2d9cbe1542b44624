use super::*;

#[derive(Debug, serde::Deserialize)]
struct Row {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    id: Option<String>,
}

#[test]
fn id_accepts_number_string_null_and_missing() {
    let row: Row = serde_json::from_str(r#"{"id": 41}"#).unwrap();
    assert_eq!(row.id.as_deref(), Some("41"));

    let row: Row = serde_json::from_str(r#"{"id": "8f1c"}"#).unwrap();
    assert_eq!(row.id.as_deref(), Some("8f1c"));

    let row: Row = serde_json::from_str(r#"{"id": null}"#).unwrap();
    assert_eq!(row.id, None);

    let row: Row = serde_json::from_str("{}").unwrap();
    assert_eq!(row.id, None);
}

#[test]
fn id_rejects_other_json_shapes() {
    assert!(serde_json::from_str::<Row>(r#"{"id": [1]}"#).is_err());
}

#[test]
fn none_if_blank_treats_whitespace_as_empty() {
    assert_eq!(none_if_blank(""), None);
    assert_eq!(none_if_blank("   "), None);
    assert_eq!(none_if_blank("x"), Some("x".to_owned()));
}

#[test]
fn error_body_omits_fields_when_absent() {
    let json = serde_json::to_value(ErrorBody::new("Organization not found")).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Organization not found" }));
}

#[test]
fn organization_context_detects_super_admin() {
    let ctx = OrganizationContext { organization: None, role: Some(SUPER_ADMIN_ROLE.to_owned()) };
    assert!(ctx.is_super_admin());
    assert!(!OrganizationContext::default().is_super_admin());
}
