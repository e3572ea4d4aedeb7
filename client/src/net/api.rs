//! REST API client for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Responses arrive in a `{ success, data, error? }` envelope. `decode_envelope`
//! maps transport status, envelope flag, and record shape onto `ApiError` so
//! callers get one `Result` and never panic on a malformed body.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::endpoints::{self, ApiRequest};
use super::error::{ApiError, status_message};
use super::types::{
    AdminCheck, BlogDraft, BlogPost, CheckoutItem, Credentials, FundRequest, FundRequestStatus, Invoice,
    NewFundRequest, Order, OrderStatus, PasswordChange, Payment, PaymentIntent, RefreshedToken, Registration,
    Session, SiteListing, SupportMessage, User,
};
use crate::config::ClientConfig;

/// Response envelope shared by every backend endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
    message: Option<String>,
}

/// Decode a raw response body into `T`, honoring the envelope contract.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let ok_status = (200..300).contains(&status);
    let envelope: Envelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !ok_status => {
            return Err(ApiError::Status { status, message: status_message(status) });
        }
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    if !ok_status || !envelope.success {
        let message = envelope
            .error
            .or(envelope.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status_message(status));
        return Err(if ok_status { ApiError::Rejected(message) } else { ApiError::Status { status, message } });
    }

    match envelope.data {
        Some(data) => Ok(data),
        // Endpoints that acknowledge without a payload decode into `()`.
        None => serde_json::from_value(serde_json::Value::Null)
            .map_err(|_| ApiError::Decode("response is missing data".to_owned())),
    }
}

/// HTTP client bound to a base URL and, optionally, a session bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, token: Option<String>) -> Self {
        Self { base_url: config.api_url.clone(), token }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `Authorization` header value, when a session token is attached.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Execute `request` and decode the enveloped payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status or envelope,
    /// or when the payload does not match `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = self.execute(&request).await?;
            decode_envelope(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn execute(&self, request: &ApiRequest) -> Result<(u16, String), ApiError> {
        use endpoints::Method;
        use gloo_net::http::Request;

        let url = request.url(&self.base_url);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        builder = builder.header("Accept", "application/json");
        if let Some(auth) = self.authorization() {
            builder = builder.header("Authorization", &auth);
        }
        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, body))
    }
}

// =============================================================
// Auth
// =============================================================

/// # Errors
/// Fails with the backend's message on invalid credentials, or on network failure.
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<Session, ApiError> {
    client.send(endpoints::login(credentials)).await
}

/// # Errors
/// Propagates any backend failure; callers ignore it during logout.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.send(endpoints::logout()).await
}

/// # Errors
/// Fails when the token is missing, expired, or the backend is unreachable.
pub async fn fetch_current_user(client: &ApiClient) -> Result<User, ApiError> {
    client.send(endpoints::current_user()).await
}

/// # Errors
/// Fails when the session can no longer be refreshed.
pub async fn refresh_session(client: &ApiClient) -> Result<String, ApiError> {
    let refreshed: RefreshedToken = client.send(endpoints::refresh_session()).await?;
    Ok(refreshed.token)
}

/// # Errors
/// Fails when the backend rejects the registration (e.g. email taken).
pub async fn register(client: &ApiClient, registration: &Registration) -> Result<(), ApiError> {
    client.send(endpoints::register(registration)).await
}

/// # Errors
/// Fails when the current password is wrong or the request cannot be sent.
pub async fn change_password(client: &ApiClient, change: &PasswordChange) -> Result<(), ApiError> {
    client.send(endpoints::change_password(change)).await
}

/// # Errors
/// Fails when the token is invalid or expired.
pub async fn verify_email(client: &ApiClient, token: &str) -> Result<(), ApiError> {
    client.send(endpoints::verify_email(token)).await
}

/// # Errors
/// Fails when the backend cannot send the email.
pub async fn resend_verification(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    client.send(endpoints::resend_verification(email)).await
}

/// # Errors
/// Fails when the backend cannot issue a reset email.
pub async fn request_password_reset(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    client.send(endpoints::request_password_reset(email)).await
}

/// # Errors
/// Fails when the reset token is invalid or expired.
pub async fn confirm_password_reset(client: &ApiClient, token: &str, password: &str) -> Result<(), ApiError> {
    client.send(endpoints::confirm_password_reset(token, password)).await
}

// =============================================================
// Storefront and checkout
// =============================================================

/// # Errors
/// Fails on any backend or decode failure.
pub async fn fetch_sites(client: &ApiClient) -> Result<Vec<SiteListing>, ApiError> {
    client.send(endpoints::list_sites()).await
}

/// # Errors
/// Fails when the backend cannot price or reserve the items.
pub async fn create_payment_intent(client: &ApiClient, items: &[CheckoutItem]) -> Result<PaymentIntent, ApiError> {
    client.send(endpoints::create_payment_intent(items)).await
}

// =============================================================
// Orders, payments, invoices
// =============================================================

/// # Errors
/// Fails on any backend or decode failure.
pub async fn fetch_orders(client: &ApiClient) -> Result<Vec<Order>, ApiError> {
    client.send(endpoints::list_orders()).await
}

/// # Errors
/// Fails on any backend or decode failure.
pub async fn fetch_my_orders(client: &ApiClient) -> Result<Vec<Order>, ApiError> {
    client.send(endpoints::list_my_orders()).await
}

/// # Errors
/// Fails when the order does not exist or is not visible to the caller.
pub async fn fetch_order(client: &ApiClient, id: &str) -> Result<Order, ApiError> {
    client.send(endpoints::get_order(id)?).await
}

/// # Errors
/// Fails when the backend rejects the transition.
pub async fn update_order_status(client: &ApiClient, id: &str, status: OrderStatus) -> Result<(), ApiError> {
    client.send(endpoints::update_order_status(id, status)?).await
}

/// # Errors
/// Fails when the backend refuses the deletion.
pub async fn delete_order(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.send(endpoints::delete_order(id)?).await
}

/// # Errors
/// Fails on any backend or decode failure.
pub async fn fetch_payments(client: &ApiClient) -> Result<Vec<Payment>, ApiError> {
    client.send(endpoints::list_payments()).await
}

/// # Errors
/// Fails on any backend or decode failure.
pub async fn fetch_invoices(client: &ApiClient) -> Result<Vec<Invoice>, ApiError> {
    client.send(endpoints::list_invoices()).await
}

// =============================================================
// Fund requests
// =============================================================

/// # Errors
/// Fails on any backend or decode failure.
pub async fn fetch_fund_requests(client: &ApiClient) -> Result<Vec<FundRequest>, ApiError> {
    client.send(endpoints::list_fund_requests()).await
}

/// # Errors
/// Fails on any backend or decode failure.
pub async fn fetch_my_fund_requests(client: &ApiClient) -> Result<Vec<FundRequest>, ApiError> {
    client.send(endpoints::list_my_fund_requests()).await
}

/// # Errors
/// Fails when the backend rejects the request.
pub async fn create_fund_request(client: &ApiClient, request: &NewFundRequest) -> Result<(), ApiError> {
    client.send(endpoints::create_fund_request(request)).await
}

/// # Errors
/// Fails when the backend rejects the status change.
pub async fn update_fund_request_status(
    client: &ApiClient,
    id: &str,
    status: FundRequestStatus,
) -> Result<(), ApiError> {
    client.send(endpoints::update_fund_request_status(id, status)?).await
}

/// # Errors
/// Fails when the backend refuses the deletion.
pub async fn delete_fund_request(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.send(endpoints::delete_fund_request(id)?).await
}

// =============================================================
// Users
// =============================================================

/// # Errors
/// Fails on any backend or decode failure.
pub async fn fetch_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.send(endpoints::list_users()).await
}

/// Ask the backend whether the session holder is an administrator.
///
/// # Errors
/// Fails when the session is invalid or the backend is unreachable.
pub async fn check_admin(client: &ApiClient) -> Result<bool, ApiError> {
    let check: AdminCheck = client.send(endpoints::check_admin()).await?;
    Ok(check.is_admin)
}

/// # Errors
/// Fails when the backend rejects the promotion.
pub async fn make_admin(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.send(endpoints::make_admin(id)?).await
}

/// # Errors
/// Fails when the backend rejects the change.
pub async fn suspend_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.send(endpoints::suspend_user(id)?).await
}

/// # Errors
/// Fails when the backend rejects the change.
pub async fn activate_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.send(endpoints::activate_user(id)?).await
}

/// # Errors
/// Fails when the backend refuses the deletion.
pub async fn delete_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.send(endpoints::delete_user(id)?).await
}

// =============================================================
// Blog and support
// =============================================================

/// # Errors
/// Fails on any backend or decode failure.
pub async fn fetch_blog_posts(client: &ApiClient) -> Result<Vec<BlogPost>, ApiError> {
    client.send(endpoints::list_blog_posts()).await
}

/// # Errors
/// Fails when no post has `slug`.
pub async fn fetch_blog_post(client: &ApiClient, slug: &str) -> Result<BlogPost, ApiError> {
    client.send(endpoints::get_blog_post(slug)?).await
}

/// # Errors
/// Fails when the backend rejects the draft.
pub async fn create_blog_post(client: &ApiClient, draft: &BlogDraft) -> Result<(), ApiError> {
    client.send(endpoints::create_blog_post(draft)).await
}

/// # Errors
/// Fails when the backend rejects the draft.
pub async fn update_blog_post(client: &ApiClient, id: &str, draft: &BlogDraft) -> Result<(), ApiError> {
    client.send(endpoints::update_blog_post(id, draft)?).await
}

/// # Errors
/// Fails when the backend refuses the deletion.
pub async fn delete_blog_post(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.send(endpoints::delete_blog_post(id)?).await
}

/// # Errors
/// Fails when the backend rejects the message.
pub async fn submit_support_message(client: &ApiClient, message: &SupportMessage) -> Result<(), ApiError> {
    client.send(endpoints::submit_support_message(message)).await
}
