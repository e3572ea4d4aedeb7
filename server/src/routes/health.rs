//! Liveness and readiness probes.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Ready when the backend API answers at all without a server error.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let backend = state.config.api_url.clone();
    let probe = match state.http.get(&backend).send().await {
        Ok(resp) => Ok(resp.status().as_u16()),
        Err(e) => Err(e.to_string()),
    };
    let (status, report) = readiness(backend, probe);
    if status != StatusCode::OK {
        tracing::warn!(backend = %report.backend, detail = ?report.detail, "backend not ready");
    }
    (status, Json(report))
}

/// Map a probe outcome (HTTP status or transport error) to the response.
pub fn readiness(backend: String, probe: Result<u16, String>) -> (StatusCode, Readiness) {
    match probe {
        Ok(code) if code < 500 => (StatusCode::OK, Readiness { status: "ready", backend, detail: None }),
        Ok(code) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Readiness { status: "unavailable", backend, detail: Some(format!("backend returned {code}")) },
        ),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, Readiness { status: "unavailable", backend, detail: Some(e) }),
    }
}
