use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_owned(),
            site_url: DEFAULT_SITE_URL.to_owned(),
            readiness_timeout_secs: DEFAULT_READINESS_TIMEOUT_SECS,
        }
    );
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_overrides_and_trims_trailing_slashes() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("PUBLIC_API_URL", "https://api.example.test/api/"),
        ("PUBLIC_SITE_URL", "https://example.test/"),
        ("READINESS_TIMEOUT_SECS", "10"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.api_url, "https://api.example.test/api");
    assert_eq!(cfg.site_url, "https://example.test");
    assert_eq!(cfg.readiness_timeout_secs, 10);
}

#[test]
fn from_lookup_accepts_next_public_names() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("NEXT_PUBLIC_API_URL", "https://legacy-api.test/api/"),
        ("NEXT_PUBLIC_SITE_URL", "https://legacy.test"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_url, "https://legacy-api.test/api");
    assert_eq!(cfg.site_url, "https://legacy.test");
}

#[test]
fn public_names_win_over_next_public_names() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PUBLIC_API_URL", "https://api.test"),
        ("NEXT_PUBLIC_API_URL", "https://legacy-api.test"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_url, "https://api.test");
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::Config(msg) if msg.contains("PORT")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PUBLIC_API_URL", "  "), ("READINESS_TIMEOUT_SECS", "0")])).unwrap();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.readiness_timeout_secs, DEFAULT_READINESS_TIMEOUT_SECS);
}
