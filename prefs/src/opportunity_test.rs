use super::*;

#[test]
fn request_uses_snake_case_wire_keys() {
    let body = serde_json::to_string(&OpportunityRequest::new("Rice", "Warangal")).expect("encode");
    assert_eq!(body, r#"{"crop_name":"Rice","district":"Warangal"}"#);
}

#[test]
fn request_for_location_targets_subregion() {
    let location = LocationPreference::new("Telangana", "Warangal");
    assert_eq!(OpportunityRequest::for_location("Cotton", &location).district, "Warangal");
}

#[test]
fn recommendations_shape_decodes() {
    let raw = r#"{"recommendations":[{"company_name":"Deccan Agro","address":"Hanamkonda",
        "status":"Active","domain":"Biofuel","distance":80,"rating":4.5}]}"#;
    let response: OpportunityResponse = serde_json::from_str(raw).expect("decode");
    assert_eq!(response.recommendations().len(), 1);
    assert_eq!(response.recommendations()[0].company_name, "Deccan Agro");
    assert!((response.recommendations()[0].distance - 80.0).abs() < f64::EPSILON);
    assert_eq!(response.notice(), None);
}

#[test]
fn message_and_error_shapes_surface_as_notice() {
    let message: OpportunityResponse =
        serde_json::from_str(r#"{"message":"No companies found"}"#).expect("decode message");
    let error: OpportunityResponse =
        serde_json::from_str(r#"{"error":"No data available for crop: teff"}"#).expect("decode error");

    assert!(message.recommendations().is_empty());
    assert_eq!(message.notice(), Some("No companies found"));
    assert_eq!(error.notice(), Some("No data available for crop: teff"));
}

#[test]
fn unknown_shape_is_rejected() {
    assert!(serde_json::from_str::<OpportunityResponse>(r#"{"status":"ok"}"#).is_err());
}
