//! Errors that stop the SSR host from starting or serving.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
