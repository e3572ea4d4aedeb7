mod config;
mod error;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();
    let api_url = config.api_url.clone();

    let state = state::AppState::new(config)?;
    let app = routes::app(state).inspect_err(|e| tracing::error!(error = %e, "router setup failed"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, backend = %api_url, "guestpost listening");
    axum::serve(listener, app).await?;
    Ok(())
}
