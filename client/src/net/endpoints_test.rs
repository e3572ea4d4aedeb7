use super::*;

#[test]
fn url_joins_base_and_path() {
    let req = list_orders();
    assert_eq!(req.url("http://localhost:5000/api/"), "http://localhost:5000/api/orders");
}

#[test]
fn encode_segment_escapes_reserved_characters() {
    assert_eq!(encode_segment("abc-123_x.y~z").as_deref(), Ok("abc-123_x.y~z"));
    assert_eq!(encode_segment("a/b?c").as_deref(), Ok("a%2Fb%3Fc"));
    assert_eq!(encode_segment("with space").as_deref(), Ok("with%20space"));
}

#[test]
fn encode_segment_refuses_dot_and_empty_segments() {
    for raw in ["", ".", "..", "..."] {
        assert_eq!(encode_segment(raw), Err(ApiError::InvalidSegment(raw.to_owned())));
    }
}

#[test]
fn id_builders_refuse_parent_directory_ids() {
    assert!(get_order("..").is_err());
    assert!(delete_user(".").is_err());
    assert!(update_fund_request_status("..", FundRequestStatus::Complete).is_err());
    assert!(get_blog_post("").is_err());
}

#[test]
fn login_posts_credentials() {
    let req = login(&Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() });
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.body, Some(json!({ "email": "a@b.com", "password": "pw" })));
}

#[test]
fn change_password_uses_camel_case_body() {
    let req = change_password(&PasswordChange {
        current_password: "old".to_owned(),
        new_password: "new-secret".to_owned(),
    });
    assert_eq!(req.path, "/auth/change-password");
    assert_eq!(req.body, Some(json!({ "currentPassword": "old", "newPassword": "new-secret" })));
}

#[test]
fn fund_request_status_change_is_single_put_with_status_body() {
    let req = update_fund_request_status("f1", FundRequestStatus::Complete).expect("valid id");
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/fund-requests/f1");
    assert_eq!(req.body, Some(json!({ "status": "complete" })));
}

#[test]
fn order_status_change_targets_status_subresource() {
    let req = update_order_status("o7", OrderStatus::Completed).expect("valid id");
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/orders/o7/status");
    assert_eq!(req.body, Some(json!({ "status": "completed" })));
}

#[test]
fn user_admin_actions_use_expected_paths() {
    assert_eq!(make_admin("u1").map(|r| r.path).as_deref(), Ok("/users/profile/u1/make-admin"));
    assert_eq!(suspend_user("u1").map(|r| r.path).as_deref(), Ok("/users/u1/suspend"));
    assert_eq!(activate_user("u1").map(|r| r.path).as_deref(), Ok("/users/u1/activate"));
    assert_eq!(check_admin().path, "/users/check-admin");
    assert_eq!(delete_user("u1").map(|r| r.method), Ok(Method::Delete));
}

#[test]
fn create_payment_intent_serializes_items() {
    let req = create_payment_intent(&[CheckoutItem {
        site_id: "s1".to_owned(),
        target_url: "https://me.test".to_owned(),
        anchor_text: "best widgets".to_owned(),
    }]);
    assert_eq!(req.path, "/payments/create-intent");
    assert_eq!(
        req.body,
        Some(json!({ "items": [{ "siteId": "s1", "targetUrl": "https://me.test", "anchorText": "best widgets" }] }))
    );
}

#[test]
fn auth_recovery_endpoints_use_expected_paths() {
    assert_eq!(verify_email("t").path, "/auth/verify-email");
    assert_eq!(resend_verification("a@b.com").path, "/auth/resend-verification");
    assert_eq!(confirm_password_reset("t", "pw").path, "/auth/password-reset/confirm");
    assert_eq!(confirm_password_reset("t", "pw").body, Some(json!({ "token": "t", "password": "pw" })));
}

#[test]
fn get_order_escapes_id() {
    assert_eq!(get_order("../admin").map(|r| r.path).as_deref(), Ok("/orders/..%2Fadmin"));
}

#[test]
fn support_message_posts_to_public_endpoint() {
    let req = submit_support_message(&SupportMessage {
        name: "N".to_owned(),
        email: "n@x.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
    });
    assert_eq!(req.path, "/support/public");
    assert_eq!(req.method, Method::Post);
}
