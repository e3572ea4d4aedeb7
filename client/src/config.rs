//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so the backend
//! base URL and public site URL are captured with `option_env!` when the
//! crate is compiled. The SSR host reads the same variables at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Resolved front-end configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend REST API base URL, without a trailing slash.
    pub api_url: String,
    /// Public marketing site URL used as the logout destination.
    pub site_url: String,
}

impl ClientConfig {
    /// Configuration captured from `PUBLIC_API_URL` / `PUBLIC_SITE_URL` at build time,
    /// falling back to the `NEXT_PUBLIC_` names.
    pub fn from_build_env() -> Self {
        Self::from_values(
            first_set(option_env!("PUBLIC_API_URL"), option_env!("NEXT_PUBLIC_API_URL")),
            first_set(option_env!("PUBLIC_SITE_URL"), option_env!("NEXT_PUBLIC_SITE_URL")),
        )
    }

    /// Build a configuration from optional raw values, applying defaults.
    pub fn from_values(api_url: Option<&str>, site_url: Option<&str>) -> Self {
        Self {
            api_url: normalize_base_url(api_url, DEFAULT_API_URL),
            site_url: normalize_base_url(site_url, DEFAULT_SITE_URL),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// `primary` unless it is missing or blank, then `fallback`.
pub fn first_set<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    primary.filter(|v| !v.trim().is_empty()).or(fallback)
}

/// Trim whitespace and trailing slashes; blank values fall back to `default`.
pub fn normalize_base_url(raw: Option<&str>, default: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    value.trim_end_matches('/').to_owned()
}
