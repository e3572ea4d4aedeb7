//! Shared state for the host's own routes.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Client for backend readiness probes.
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let timeout = Duration::from_secs(config.readiness_timeout_secs);
        let http = reqwest::Client::builder().connect_timeout(timeout).timeout(timeout).build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
