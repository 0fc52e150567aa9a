use super::*;

#[test]
fn logged_out_visitor_is_sent_to_login() {
    assert_eq!(unauth_redirect(false), Some("/login"));
}

#[test]
fn logged_in_visitor_stays() {
    assert_eq!(unauth_redirect(true), None);
}
