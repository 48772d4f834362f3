use super::*;
use crate::state::session;

// =============================================================
// Token precondition
// =============================================================

#[test]
fn absent_token_fast_fails_before_any_network_io() {
    assert_eq!(require_token(), Err(ApiError::Unauthenticated));
}

#[test]
fn present_token_is_handed_to_the_transport() {
    session::set("abc");
    assert_eq!(require_token(), Ok("abc".to_owned()));
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn success_statuses_pass_through() {
    assert_eq!(classify_response(200, "{}"), None);
    assert_eq!(classify_response(201, "{}"), None);
    assert_eq!(classify_response(204, ""), None);
}

#[test]
fn unauthorized_clears_the_session() {
    session::set("abc");
    let err = classify_response(401, "");
    assert_eq!(err, Some(ApiError::Unauthorized));
    assert_eq!(session::get(), None);
}

#[test]
fn unauthorized_without_a_session_is_still_unauthorized() {
    let err = classify_response(401, "");
    assert_eq!(err, Some(ApiError::Unauthorized));
    assert_eq!(session::get(), None);
}

#[test]
fn resource_error_prefers_message_then_error_field() {
    let err = classify_response(400, r#"{"message":"m1","error":"m2"}"#);
    assert_eq!(err, Some(ApiError::Resource("m1".to_owned())));

    let err = classify_response(400, r#"{"error":"m2"}"#);
    assert_eq!(err, Some(ApiError::Resource("m2".to_owned())));
}

#[test]
fn resource_error_falls_back_to_a_generic_message() {
    let err = classify_response(500, "<html>oops</html>");
    assert_eq!(
        err,
        Some(ApiError::Resource("request failed with status 500".to_owned()))
    );
}

#[test]
fn needs_login_covers_both_auth_classes() {
    assert!(ApiError::Unauthenticated.needs_login());
    assert!(ApiError::Unauthorized.needs_login());
    assert!(!ApiError::Network.needs_login());
    assert!(!ApiError::Resource("x".to_owned()).needs_login());
}

// =============================================================
// Body decoding
// =============================================================

#[test]
fn decode_surfaces_unexpected_bodies_as_resource_errors() {
    let result: ApiResult<crate::net::types::Order> = decode("not json");
    assert_eq!(
        result,
        Err(ApiError::Resource(
            "unexpected response from the server".to_owned()
        ))
    );
}

#[test]
fn decode_reads_a_list_in_server_order() {
    let orders: Vec<crate::net::types::Order> =
        decode(r#"[{"id":2,"order_details":"b"},{"id":1,"order_details":"a"}]"#)
            .expect("two orders");
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, "2");
    assert_eq!(orders[1].id, "1");
}
