use super::*;
use crate::config::ServerConfig;

fn state_for(api_url: &str) -> AppState {
    let config = ServerConfig {
        host: "127.0.0.1".to_owned(),
        port: 0,
        api_url: api_url.to_owned(),
        site_url: "http://localhost:3000".to_owned(),
        readiness_timeout_secs: 1,
    };
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn readiness_accepts_client_errors_from_backend() {
    let (status, report) = readiness("http://api".to_owned(), Ok(404));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report.status, "ready");
    assert_eq!(report.detail, None);
}

#[test]
fn readiness_rejects_server_errors() {
    let (status, report) = readiness("http://api".to_owned(), Ok(502));
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(report.detail.as_deref(), Some("backend returned 502"));
}

#[test]
fn readiness_reports_transport_errors() {
    let (status, report) = readiness("http://api".to_owned(), Err("connection refused".to_owned()));
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(report.status, "unavailable");
}

#[tokio::test]
async fn readyz_is_unavailable_when_backend_unreachable() {
    // Nothing listens on the discard port.
    let (status, Json(report)) = readyz(State(state_for("http://127.0.0.1:9/api"))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(report.backend, "http://127.0.0.1:9/api");
}
