//! Flat error taxonomy for backend calls.
//!
//! Every failure is caught at the call site, logged, and shown to the visitor
//! via `user_message`. No variant is retried automatically.

use thiserror::Error;

/// Failure from a backend API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success HTTP status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The backend answered 2xx but the envelope reported `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The response body did not match the expected envelope or record shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// An id or slug that cannot be placed in a request path.
    #[error("invalid path segment: {0:?}")]
    InvalidSegment(String),
    /// Backend calls are browser-only; SSR renders without data.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for a toast or inline error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } | Self::Rejected(message) => message.clone(),
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::InvalidSegment(_) => "That record could not be found.".to_owned(),
            Self::Decode(_) | Self::Unavailable => "Something went wrong. Please try again.".to_owned(),
        }
    }

    /// Whether the backend rejected the session credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Fallback message for a status code when the body carries none.
pub fn status_message(status: u16) -> String {
    match status {
        400 => "The request was invalid.".to_owned(),
        401 => "Your session has expired. Please sign in again.".to_owned(),
        403 => "You do not have permission to do that.".to_owned(),
        404 => "The requested record was not found.".to_owned(),
        429 => "Too many requests. Please wait and try again.".to_owned(),
        s if s >= 500 => "The server encountered an error.".to_owned(),
        s => format!("Request failed with status {s}."),
    }
}
