//! Typed records for the backend REST boundary.
//!
//! DESIGN
//! ======
//! Every list row and detail view is decoded into an explicit record so that
//! field-shape drift between front end and backend surfaces as a decode error
//! at the API boundary instead of a silently empty cell. Enum fields are
//! closed sets; unknown values fail decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Visitor role. `Admin` is the privileged role that unlocks the back office.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

/// Account standing as managed by administrators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
        }
    }
}

/// A user record as returned by `/auth/me`, `/auth/login`, and `/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier (accepts Mongo-style `_id`).
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub status: AccountStatus,
    /// Prepaid account balance available for orders.
    #[serde(default, deserialize_with = "deserialize_money")]
    pub balance: f64,
    #[serde(default)]
    pub email_verified: bool,
    pub created_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authenticated session returned by `/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token attached to subsequent requests.
    pub token: String,
    pub user: User,
}

/// Response of `/auth/refresh`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshedToken {
    pub token: String,
}

/// Response of `/users/check-admin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheck {
    pub is_admin: bool,
}

/// A website available for guest-post placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteListing {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub url: String,
    /// Domain Authority score (0-100).
    #[serde(alias = "da")]
    pub domain_authority: u32,
    /// Placement price in account currency.
    #[serde(deserialize_with = "deserialize_money")]
    pub price: f64,
    #[serde(default = "default_category")]
    pub category: String,
    pub description: Option<String>,
    /// Typical days from order to publication.
    pub turnaround_days: Option<u32>,
}

fn default_category() -> String {
    "General".to_owned()
}

/// Order lifecycle status. Transitions are owned by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Processing, Self::Completed, Self::Cancelled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// A guest-post order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    /// Name of the site the post is placed on.
    #[serde(alias = "siteName")]
    pub site: String,
    pub site_url: Option<String>,
    #[serde(deserialize_with = "deserialize_money")]
    pub amount: f64,
    pub status: OrderStatus,
    /// Page the guest post links to.
    pub target_url: Option<String>,
    pub anchor_text: Option<String>,
    pub buyer_email: Option<String>,
    pub created_at: Option<String>,
}

/// Payment capture status reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(alias = "_id")]
    pub id: String,
    pub order_id: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub amount: f64,
    pub status: PaymentStatus,
    pub user_email: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(alias = "_id")]
    pub id: String,
    pub order_id: String,
    /// Human-facing invoice number (e.g. `INV-0042`).
    pub number: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub amount: f64,
    #[serde(default)]
    pub paid: bool,
    pub issued_at: Option<String>,
}

/// Review status of a fund request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundRequestStatus {
    Pending,
    Complete,
    Rejected,
}

impl FundRequestStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Complete, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Complete => "complete",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Complete => "Complete",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// A request to have an administrator credit the account balance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRequest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub amount: f64,
    /// Payment method the buyer used (e.g. `"bank_transfer"`).
    pub method: String,
    /// Transaction reference supplied by the buyer.
    pub reference: Option<String>,
    pub note: Option<String>,
    pub status: FundRequestStatus,
    pub user_email: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub created_at: Option<String>,
}

/// Result of `/payments/create-intent`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
    pub order_id: String,
    /// Hosted checkout page to follow, when the processor provides one.
    pub checkout_url: Option<String>,
}

// =============================================================
// Request inputs
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewFundRequest {
    pub amount: f64,
    pub method: String,
    pub reference: Option<String>,
    pub note: Option<String>,
}

/// One site placement inside a checkout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutItem {
    pub site_id: String,
    pub target_url: String,
    pub anchor_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published: bool,
}

/// Accept money as a JSON number or a numeric string (`"49.99"`).
fn deserialize_money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let amount = match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number"))?,
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid amount: {raw}")))?,
        _ => return Err(D::Error::custom("expected number")),
    };
    if !amount.is_finite() {
        return Err(D::Error::custom("amount must be finite"));
    }
    Ok(amount)
}
