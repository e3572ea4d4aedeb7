use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_mongo_id_and_camel_case_fields() {
    let raw = r#"{"_id":"u1","email":"a@b.com","name":"Ann","role":"admin","emailVerified":true,"balance":"12.50"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_admin());
    assert!(user.email_verified);
    assert_eq!(user.status, AccountStatus::Active);
    assert!((user.balance - 12.5).abs() < f64::EPSILON);
}

#[test]
fn user_defaults_optional_fields() {
    let raw = r#"{"id":"u2","email":"b@c.com","name":"Bo","role":"user"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert!(!user.is_admin());
    assert!(user.balance.abs() < f64::EPSILON);
    assert!(user.created_at.is_none());
}

#[test]
fn user_rejects_unknown_role() {
    let raw = r#"{"id":"u3","email":"c@d.com","name":"Cy","role":"superuser"}"#;
    assert!(serde_json::from_str::<User>(raw).is_err());
}

#[test]
fn user_rejects_missing_email() {
    let raw = r#"{"id":"u4","name":"Di","role":"user"}"#;
    assert!(serde_json::from_str::<User>(raw).is_err());
}

// =============================================================
// Listings and orders
// =============================================================

#[test]
fn site_listing_accepts_da_alias_and_default_category() {
    let raw = r#"{"id":"s1","name":"Tech Daily","url":"https://tech.test","da":54,"price":120}"#;
    let site: SiteListing = serde_json::from_str(raw).unwrap();
    assert_eq!(site.domain_authority, 54);
    assert_eq!(site.category, "General");
    assert!((site.price - 120.0).abs() < f64::EPSILON);
}

#[test]
fn order_accepts_site_name_alias() {
    let raw = r#"{"_id":"o1","siteName":"Tech Daily","amount":99.5,"status":"processing","targetUrl":"https://me.test"}"#;
    let order: Order = serde_json::from_str(raw).unwrap();
    assert_eq!(order.site, "Tech Daily");
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.target_url.as_deref(), Some("https://me.test"));
}

#[test]
fn order_rejects_non_numeric_amount() {
    let raw = r#"{"id":"o2","site":"X","amount":"lots","status":"pending"}"#;
    assert!(serde_json::from_str::<Order>(raw).is_err());
}

#[test]
fn order_status_parse_round_trips_known_values() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(OrderStatus::parse("shipped"), None);
}

// =============================================================
// Fund requests
// =============================================================

#[test]
fn fund_request_status_complete_has_complete_label() {
    let raw = r#"{"id":"f1","amount":50,"method":"bank_transfer","status":"complete"}"#;
    let request: FundRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.status, FundRequestStatus::Complete);
    assert_eq!(request.status.label(), "Complete");
}

#[test]
fn fund_request_status_serializes_lowercase() {
    assert_eq!(serde_json::to_value(FundRequestStatus::Complete).unwrap(), serde_json::json!("complete"));
}

#[test]
fn payment_intent_checkout_url_is_optional() {
    let raw = r#"{"clientSecret":"pi_secret","orderId":"o9"}"#;
    let intent: PaymentIntent = serde_json::from_str(raw).unwrap();
    assert_eq!(intent.order_id, "o9");
    assert!(intent.checkout_url.is_none());
}
