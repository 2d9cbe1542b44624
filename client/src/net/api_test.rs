use super::*;

#[test]
fn server_message_wins_over_status() {
    let body = ErrorBody::new("Invalid login credentials");
    let err = ApiError::from_response(401, Some(body));
    assert_eq!(err.message, "Invalid login credentials");
}

#[test]
fn bare_unauthorized_reads_not_authenticated() {
    assert_eq!(ApiError::from_response(401, None).message, UNAUTHENTICATED);
    assert_eq!(ApiError::from_response(401, Some(ErrorBody::new(""))).message, UNAUTHENTICATED);
}

#[test]
fn unknown_failures_are_generic() {
    assert_eq!(ApiError::from_response(502, None), ApiError::unexpected());
    assert_eq!(ApiError::unexpected().to_string(), "An unexpected error occurred");
}

#[test]
fn validation_fields_are_kept() {
    let mut fields = ValidationErrors::default();
    fields.0.insert(records::OrgField::Name, "Organization name is required".to_owned());
    let body = ErrorBody { error: "Validation failed".to_owned(), fields: Some(fields.clone()) };
    let err = ApiError::from_response(422, Some(body));
    assert_eq!(err.fields, Some(fields));
}

#[test]
fn location_lookup_embeds_ip() {
    assert_eq!(location_lookup_url("1.2.3.4"), "https://ipapi.co/1.2.3.4/json/");
    assert!(IP_LOOKUP_URL.starts_with("https://api.ipify.org"));
}
