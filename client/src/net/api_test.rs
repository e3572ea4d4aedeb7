use super::*;
use crate::net::types::Role;

#[test]
fn decode_envelope_returns_data_on_success() {
    let body = r#"{"success":true,"data":{"isAdmin":true}}"#;
    let check: AdminCheck = decode_envelope(200, body).unwrap();
    assert!(check.is_admin);
}

#[test]
fn decode_envelope_unit_accepts_missing_data() {
    let body = r#"{"success":true,"message":"deleted"}"#;
    let result: Result<(), ApiError> = decode_envelope(200, body);
    assert_eq!(result, Ok(()));
}

#[test]
fn decode_envelope_missing_data_for_record_is_decode_error() {
    let body = r#"{"success":true}"#;
    let result: Result<User, ApiError> = decode_envelope(200, body);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn decode_envelope_rejected_uses_server_error_message() {
    let body = r#"{"success":false,"error":"Invalid email or password"}"#;
    let result: Result<Session, ApiError> = decode_envelope(200, body);
    assert_eq!(result, Err(ApiError::Rejected("Invalid email or password".to_owned())));
}

#[test]
fn decode_envelope_error_status_keeps_server_message() {
    let body = r#"{"success":false,"error":"Not authorized as admin"}"#;
    let result: Result<Vec<User>, ApiError> = decode_envelope(403, body);
    assert_eq!(
        result,
        Err(ApiError::Status { status: 403, message: "Not authorized as admin".to_owned() })
    );
}

#[test]
fn decode_envelope_non_json_error_falls_back_to_status_message() {
    let result: Result<Vec<Order>, ApiError> = decode_envelope(502, "<html>Bad Gateway</html>");
    assert_eq!(result, Err(ApiError::Status { status: 502, message: status_message(502) }));
}

#[test]
fn decode_envelope_wrong_record_shape_is_decode_error() {
    let body = r#"{"success":true,"data":[{"id":"o1","status":"shipped"}]}"#;
    let result: Result<Vec<Order>, ApiError> = decode_envelope(200, body);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn decode_envelope_decodes_session() {
    let body = r#"{"success":true,"data":{"token":"t1","user":{"id":"u1","email":"a@b.com","name":"A","role":"admin"}}}"#;
    let session: Session = decode_envelope(200, body).unwrap();
    assert_eq!(session.token, "t1");
    assert_eq!(session.user.role, Role::Admin);
}

#[test]
fn unauthorized_status_is_detected() {
    let err = ApiError::Status { status: 401, message: "expired".to_owned() };
    assert!(err.is_unauthorized());
    assert!(!ApiError::Rejected("no".to_owned()).is_unauthorized());
}

#[test]
fn user_message_hides_transport_details() {
    assert_eq!(ApiError::Rejected("Email taken".to_owned()).user_message(), "Email taken");
    assert!(!ApiError::Network("TypeError: fetch".to_owned()).user_message().contains("TypeError"));
}

#[test]
fn client_attaches_bearer_token() {
    let config = ClientConfig::from_values(Some("http://api.test"), None);
    let client = ApiClient::new(&config, Some("abc".to_owned()));
    assert_eq!(client.authorization().as_deref(), Some("Bearer abc"));
    assert_eq!(client.base_url(), "http://api.test");
    assert!(ApiClient::new(&config, None).authorization().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_is_unavailable_outside_browser() {
    let config = ClientConfig::from_values(None, None);
    let client = ApiClient::new(&config, None);
    let result = futures::executor::block_on(fetch_orders(&client));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn invalid_id_fails_before_any_request() {
    let config = ClientConfig::from_values(None, None);
    let client = ApiClient::new(&config, None);
    let result = futures::executor::block_on(fetch_order(&client, ".."));
    assert_eq!(result, Err(ApiError::InvalidSegment("..".to_owned())));
}
