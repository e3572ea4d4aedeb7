use super::*;

// =============================================================
// Password change
// =============================================================

#[test]
fn password_change_mismatch_is_reported() {
    assert_eq!(validate_password_change("old-pass", "new-pass-1", "new-pass-2"), Err(PASSWORD_MISMATCH));
}

#[test]
fn password_change_mismatch_wins_over_length() {
    assert_eq!(validate_password_change("old-pass", "short", "shorter"), Err(PASSWORD_MISMATCH));
}

#[test]
fn password_change_requires_every_field() {
    assert_eq!(validate_password_change("", "new-pass-1", "new-pass-1"), Err("Fill in all password fields."));
}

#[test]
fn password_change_rejects_short_and_unchanged() {
    assert_eq!(
        validate_password_change("old-pass", "short", "short"),
        Err("New password must be at least 8 characters.")
    );
    assert_eq!(
        validate_password_change("same-pass", "same-pass", "same-pass"),
        Err("New password must differ from the current password.")
    );
}

#[test]
fn password_change_valid_builds_payload() {
    let change = validate_password_change("old-pass", "new-pass-1", "new-pass-1").unwrap();
    assert_eq!(change.current_password, "old-pass");
    assert_eq!(change.new_password, "new-pass-1");
}

// =============================================================
// Login and registration
// =============================================================

#[test]
fn login_trims_email_and_requires_fields() {
    let creds = validate_login("  a@b.com ", "pw").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(validate_login(" ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_login("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn email_shape_checks() {
    assert!(looks_like_email("a@b.co"));
    assert!(!looks_like_email("ab.co"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("a b@c.com"));
    assert!(!looks_like_email("@c.com"));
    assert_eq!(validate_email("nope"), Err("Enter a valid email address."));
}

#[test]
fn registration_checks_name_then_email_then_password() {
    assert_eq!(validate_registration("", "a@b.com", "password1", "password1"), Err("Enter your name."));
    assert_eq!(
        validate_registration("Ann", "bad", "password1", "password1"),
        Err("Enter a valid email address.")
    );
    assert_eq!(validate_registration("Ann", "a@b.com", "password1", "password2"), Err(PASSWORD_MISMATCH));
    assert!(validate_registration(" Ann ", "a@b.com", "password1", "password1").is_ok());
}

#[test]
fn password_reset_requires_token() {
    assert_eq!(
        validate_password_reset(None, "password1", "password1"),
        Err("This reset link is invalid. Request a new one.")
    );
    assert_eq!(validate_password_reset(Some("tok"), "password1", "password1"), Ok("password1".to_owned()));
}

// =============================================================
// Fund requests
// =============================================================

#[test]
fn fund_request_amount_bounds() {
    assert_eq!(validate_fund_request("abc", "paypal", "", ""), Err("Enter the amount as a number."));
    assert_eq!(validate_fund_request("5", "paypal", "", ""), Err("The minimum fund request is $10.00."));
    assert_eq!(
        validate_fund_request("10000.01", "paypal", "", ""),
        Err("The maximum fund request is $10,000.00.")
    );
}

#[test]
fn fund_request_requires_known_method() {
    assert_eq!(validate_fund_request("50", "cash", "", ""), Err("Choose a payment method."));
}

#[test]
fn fund_request_rounds_and_drops_blank_optionals() {
    let req = validate_fund_request(" 25.456 ", "bank_transfer", "  ", "thanks").unwrap();
    assert!((req.amount - 25.46).abs() < 1e-9);
    assert_eq!(req.reference, None);
    assert_eq!(req.note.as_deref(), Some("thanks"));
}

// =============================================================
// Checkout and content
// =============================================================

#[test]
fn target_url_requires_scheme_and_host() {
    assert_eq!(validate_target_url(""), Err("Enter the target URL."));
    assert_eq!(validate_target_url("example.com"), Err("Target URL must start with http:// or https://."));
    assert_eq!(validate_target_url("https://localhost/x"), Err("Enter a valid target URL."));
    assert_eq!(validate_target_url(" https://ex.com/a?b=1 "), Ok("https://ex.com/a?b=1".to_owned()));
}

#[test]
fn target_url_rejects_other_schemes_and_malformed_hosts() {
    assert_eq!(validate_target_url("ftp://ex.com/file"), Err("Target URL must start with http:// or https://."));
    assert_eq!(validate_target_url("javascript:alert(1)"), Err("Target URL must start with http:// or https://."));
    assert_eq!(validate_target_url("https://"), Err("Enter a valid target URL."));
    assert_eq!(validate_target_url("https://ex.com/a b"), Err("Enter a valid target URL."));
    assert_eq!(validate_target_url("https://user@ex.com/"), Err("Enter a valid target URL."));
}

#[test]
fn anchor_text_length_limit() {
    assert!(validate_anchor_text(&"x".repeat(MAX_ANCHOR_LEN)).is_ok());
    assert_eq!(
        validate_anchor_text(&"x".repeat(MAX_ANCHOR_LEN + 1)),
        Err("Anchor text must be 100 characters or fewer.")
    );
}

#[test]
fn support_message_requires_all_fields() {
    assert_eq!(validate_support_message("A", "a@b.com", "", "Hi"), Err("Fill in every field before sending."));
    assert!(validate_support_message("A", "a@b.com", "S", "Hi").is_ok());
}

#[test]
fn slugify_collapses_separators() {
    assert_eq!(slugify("  Hello, World! 2024 "), "hello-world-2024");
    assert_eq!(slugify("--a--b--"), "a-b");
}

#[test]
fn blog_draft_derives_slug_from_title() {
    let draft = validate_blog_draft("Guest Posting 101", "", "Body", "", true).unwrap();
    assert_eq!(draft.slug, "guest-posting-101");
    assert!(draft.excerpt.is_none());
    assert_eq!(validate_blog_draft("T", "", "  ", "", false), Err("Write some content first."));
}
