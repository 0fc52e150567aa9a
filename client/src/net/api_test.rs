use super::*;

#[test]
fn recommendations_endpoint_joins_base_url() {
    assert_eq!(recommendations_endpoint("http://127.0.0.1:8000/"), "http://127.0.0.1:8000/recommendations");
    assert_eq!(recommendations_endpoint("https://krishi.example"), "https://krishi.example/recommendations");
}

#[test]
fn base_url_has_a_default() {
    assert!(opportunity_base_url().starts_with("http"));
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "opportunity request failed: 502");
}
