//! SSR host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there behave like
//! real environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ServerError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_READINESS_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Backend REST API base URL, probed by `/readyz`.
    pub api_url: String,
    /// Public site URL (logout redirect target in the browser bundle).
    pub site_url: String,
    pub readiness_timeout_secs: u64,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `PUBLIC_API_URL` (or `NEXT_PUBLIC_API_URL`): default `http://localhost:5000/api`
    /// - `PUBLIC_SITE_URL` (or `NEXT_PUBLIC_SITE_URL`): default `http://localhost:3000`
    /// - `READINESS_TIMEOUT_SECS`: default 3
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `PORT` is set but not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let host = non_blank(lookup("HOST")).unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ServerError::Config(format!("invalid PORT: {raw}")))?,
            None => DEFAULT_PORT,
        };
        let api_url = base_url(
            non_blank(lookup("PUBLIC_API_URL")).or_else(|| lookup("NEXT_PUBLIC_API_URL")),
            DEFAULT_API_URL,
        );
        let site_url = base_url(
            non_blank(lookup("PUBLIC_SITE_URL")).or_else(|| lookup("NEXT_PUBLIC_SITE_URL")),
            DEFAULT_SITE_URL,
        );
        let readiness_timeout_secs = lookup("READINESS_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_READINESS_TIMEOUT_SECS);

        Ok(Self { host, port, api_url, site_url, readiness_timeout_secs })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn base_url(raw: Option<String>, default: &str) -> String {
    non_blank(raw).unwrap_or_else(|| default.to_owned()).trim_end_matches('/').to_owned()
}
