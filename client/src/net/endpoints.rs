//! Request descriptions for every backend endpoint the front end calls.
//!
//! DESIGN
//! ======
//! Builders are pure so wire paths and JSON bodies can be asserted in tests
//! without a browser. `api::ApiClient` turns an `ApiRequest` into a real
//! HTTP call.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde_json::{Value, json};

use super::error::ApiError;

use super::types::{
    BlogDraft, CheckoutItem, Credentials, FundRequestStatus, NewFundRequest, OrderStatus, PasswordChange,
    Registration, SupportMessage,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One HTTP call relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path beginning with `/`, relative to the configured base URL.
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: Option<Value>) -> Self {
        Self { method: Method::Put, path: path.into(), body }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }

    /// Absolute URL for this request under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// Percent-encode one path segment so ids and slugs cannot alter the route.
///
/// # Errors
///
/// Empty and dot-only segments are refused: browsers resolve `.`/`..` (and
/// their `%2E` forms) against the parent path.
pub fn encode_segment(raw: &str) -> Result<String, ApiError> {
    if raw.is_empty() || raw.chars().all(|c| c == '.') {
        return Err(ApiError::InvalidSegment(raw.to_owned()));
    }
    Ok(urlencoding::encode(raw).into_owned())
}

// =============================================================
// Auth
// =============================================================

pub fn login(credentials: &Credentials) -> ApiRequest {
    ApiRequest::post("/auth/login", json!({ "email": credentials.email, "password": credentials.password }))
}

pub fn logout() -> ApiRequest {
    ApiRequest::post("/auth/logout", json!({}))
}

pub fn current_user() -> ApiRequest {
    ApiRequest::get("/auth/me")
}

pub fn refresh_session() -> ApiRequest {
    ApiRequest::post("/auth/refresh", json!({}))
}

pub fn register(registration: &Registration) -> ApiRequest {
    ApiRequest::post(
        "/auth/register",
        json!({
            "name": registration.name,
            "email": registration.email,
            "password": registration.password,
        }),
    )
}

pub fn change_password(change: &PasswordChange) -> ApiRequest {
    ApiRequest::post(
        "/auth/change-password",
        json!({
            "currentPassword": change.current_password,
            "newPassword": change.new_password,
        }),
    )
}

pub fn verify_email(token: &str) -> ApiRequest {
    ApiRequest::post("/auth/verify-email", json!({ "token": token }))
}

pub fn resend_verification(email: &str) -> ApiRequest {
    ApiRequest::post("/auth/resend-verification", json!({ "email": email }))
}

pub fn request_password_reset(email: &str) -> ApiRequest {
    ApiRequest::post("/auth/password-reset/request", json!({ "email": email }))
}

pub fn confirm_password_reset(token: &str, password: &str) -> ApiRequest {
    ApiRequest::post("/auth/password-reset/confirm", json!({ "token": token, "password": password }))
}

// =============================================================
// Storefront and checkout
// =============================================================

pub fn list_sites() -> ApiRequest {
    ApiRequest::get("/sites")
}

pub fn create_payment_intent(items: &[CheckoutItem]) -> ApiRequest {
    let items: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "siteId": item.site_id,
                "targetUrl": item.target_url,
                "anchorText": item.anchor_text,
            })
        })
        .collect();
    ApiRequest::post("/payments/create-intent", json!({ "items": items }))
}

// =============================================================
// Orders
// =============================================================

pub fn list_orders() -> ApiRequest {
    ApiRequest::get("/orders")
}

pub fn list_my_orders() -> ApiRequest {
    ApiRequest::get("/orders/my")
}

pub fn get_order(id: &str) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::get(format!("/orders/{}", encode_segment(id)?)))
}

pub fn update_order_status(id: &str, status: OrderStatus) -> Result<ApiRequest, ApiError> {
    let path = format!("/orders/{}/status", encode_segment(id)?);
    Ok(ApiRequest::put(path, Some(json!({ "status": status.as_str() }))))
}

pub fn delete_order(id: &str) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::delete(format!("/orders/{}", encode_segment(id)?)))
}

// =============================================================
// Payments and invoices
// =============================================================

pub fn list_payments() -> ApiRequest {
    ApiRequest::get("/payments")
}

pub fn list_invoices() -> ApiRequest {
    ApiRequest::get("/invoices")
}

// =============================================================
// Fund requests
// =============================================================

pub fn list_fund_requests() -> ApiRequest {
    ApiRequest::get("/fund-requests")
}

pub fn list_my_fund_requests() -> ApiRequest {
    ApiRequest::get("/fund-requests/my")
}

pub fn create_fund_request(request: &NewFundRequest) -> ApiRequest {
    ApiRequest::post(
        "/fund-requests",
        json!({
            "amount": request.amount,
            "method": request.method,
            "reference": request.reference,
            "note": request.note,
        }),
    )
}

pub fn update_fund_request_status(id: &str, status: FundRequestStatus) -> Result<ApiRequest, ApiError> {
    let path = format!("/fund-requests/{}", encode_segment(id)?);
    Ok(ApiRequest::put(path, Some(json!({ "status": status.as_str() }))))
}

pub fn delete_fund_request(id: &str) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::delete(format!("/fund-requests/{}", encode_segment(id)?)))
}

// =============================================================
// Users
// =============================================================

pub fn list_users() -> ApiRequest {
    ApiRequest::get("/users")
}

pub fn check_admin() -> ApiRequest {
    ApiRequest::get("/users/check-admin")
}

pub fn make_admin(id: &str) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::put(format!("/users/profile/{}/make-admin", encode_segment(id)?), None))
}

pub fn suspend_user(id: &str) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::put(format!("/users/{}/suspend", encode_segment(id)?), None))
}

pub fn activate_user(id: &str) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::put(format!("/users/{}/activate", encode_segment(id)?), None))
}

pub fn delete_user(id: &str) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::delete(format!("/users/{}", encode_segment(id)?)))
}

// =============================================================
// Blog and support
// =============================================================

pub fn list_blog_posts() -> ApiRequest {
    ApiRequest::get("/blog")
}

pub fn get_blog_post(slug: &str) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::get(format!("/blog/{}", encode_segment(slug)?)))
}

fn blog_body(draft: &BlogDraft) -> Value {
    json!({
        "title": draft.title,
        "slug": draft.slug,
        "content": draft.content,
        "excerpt": draft.excerpt,
        "published": draft.published,
    })
}

pub fn create_blog_post(draft: &BlogDraft) -> ApiRequest {
    ApiRequest::post("/blog", blog_body(draft))
}

pub fn update_blog_post(id: &str, draft: &BlogDraft) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::put(format!("/blog/{}", encode_segment(id)?), Some(blog_body(draft))))
}

pub fn delete_blog_post(id: &str) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::delete(format!("/blog/{}", encode_segment(id)?)))
}

pub fn submit_support_message(message: &SupportMessage) -> ApiRequest {
    ApiRequest::post(
        "/support/public",
        json!({
            "name": message.name,
            "email": message.email,
            "subject": message.subject,
            "message": message.message,
        }),
    )
}
