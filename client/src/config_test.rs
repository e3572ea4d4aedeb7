use super::*;

#[test]
fn from_values_defaults_when_missing() {
    let cfg = ClientConfig::from_values(None, None);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
}

#[test]
fn from_values_strips_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some("https://api.example.com/v1/"), Some("https://example.com//"));
    assert_eq!(cfg.api_url, "https://api.example.com/v1");
    assert_eq!(cfg.site_url, "https://example.com");
}

#[test]
fn normalize_base_url_treats_blank_as_missing() {
    assert_eq!(normalize_base_url(Some("   "), "http://fallback"), "http://fallback");
}

#[test]
fn normalize_base_url_trims_whitespace() {
    assert_eq!(normalize_base_url(Some("  http://a.test/ "), "x"), "http://a.test");
}

#[test]
fn first_set_prefers_primary_name() {
    assert_eq!(first_set(Some("https://a.test"), Some("https://b.test")), Some("https://a.test"));
}

#[test]
fn first_set_falls_back_to_next_public_name() {
    assert_eq!(first_set(None, Some("https://b.test")), Some("https://b.test"));
    assert_eq!(first_set(Some(" "), Some("https://b.test")), Some("https://b.test"));
    assert_eq!(first_set(None, None), None);
}
