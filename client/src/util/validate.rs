//! Synchronous form validation.
//!
//! Every form runs its validator before building a request; an `Err` blocks
//! submission and its message is shown inline. Nothing here touches the
//! network.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use url::{ParseError, Url};

use crate::net::types::{BlogDraft, Credentials, NewFundRequest, PasswordChange, Registration, SupportMessage};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_ANCHOR_LEN: usize = 100;
pub const MIN_FUND_AMOUNT: f64 = 10.0;
pub const MAX_FUND_AMOUNT: f64 = 10_000.0;

/// Accepted fund-request payment methods as `(wire value, label)`.
pub const FUND_METHODS: [(&str, &str); 3] =
    [("bank_transfer", "Bank transfer"), ("paypal", "PayPal"), ("crypto", "Crypto")];

pub const PASSWORD_MISMATCH: &str = "New passwords do not match.";

pub fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !raw.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// # Errors
/// Returns an inline message when the address is blank or malformed.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

/// # Errors
/// Returns an inline message when either field is missing.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    let email = validate_email(email)?;
    Ok(Credentials { email, password: password.to_owned() })
}

fn validate_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 8 characters.");
    }
    Ok(())
}

/// Check a change-password form. Mismatch is reported before length rules.
///
/// # Errors
/// Returns an inline message for blank fields, mismatch, weak, or unchanged passwords.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<PasswordChange, &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Fill in all password fields.");
    }
    validate_new_password(new, confirm)?;
    if new == current {
        return Err("New password must differ from the current password.");
    }
    Ok(PasswordChange { current_password: current.to_owned(), new_password: new.to_owned() })
}

/// # Errors
/// Returns an inline message for blank fields, bad email, or password problems.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err("Choose a password.");
    }
    validate_new_password(password, confirm)?;
    Ok(Registration { name: name.to_owned(), email, password: password.to_owned() })
}

/// # Errors
/// Returns an inline message for a missing token or password problems.
pub fn validate_password_reset(token: Option<&str>, password: &str, confirm: &str) -> Result<String, &'static str> {
    if token.is_none_or(|t| t.trim().is_empty()) {
        return Err("This reset link is invalid. Request a new one.");
    }
    if password.is_empty() {
        return Err("Choose a new password.");
    }
    validate_new_password(password, confirm)?;
    Ok(password.to_owned())
}

/// # Errors
/// Returns an inline message for out-of-range amounts or an unknown method.
pub fn validate_fund_request(
    amount: &str,
    method: &str,
    reference: &str,
    note: &str,
) -> Result<NewFundRequest, &'static str> {
    let amount: f64 = amount.trim().parse().map_err(|_| "Enter the amount as a number.")?;
    if !amount.is_finite() || amount < MIN_FUND_AMOUNT {
        return Err("The minimum fund request is $10.00.");
    }
    if amount > MAX_FUND_AMOUNT {
        return Err("The maximum fund request is $10,000.00.");
    }
    if !FUND_METHODS.iter().any(|(value, _)| *value == method) {
        return Err("Choose a payment method.");
    }
    Ok(NewFundRequest {
        amount: (amount * 100.0).round() / 100.0,
        method: method.to_owned(),
        reference: non_blank(reference),
        note: non_blank(note),
    })
}

/// # Errors
/// Returns an inline message for any blank field or a malformed email.
pub fn validate_support_message(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<SupportMessage, &'static str> {
    if name.trim().is_empty() || subject.trim().is_empty() || message.trim().is_empty() {
        return Err("Fill in every field before sending.");
    }
    let email = validate_email(email)?;
    Ok(SupportMessage {
        name: name.trim().to_owned(),
        email,
        subject: subject.trim().to_owned(),
        message: message.trim().to_owned(),
    })
}

/// # Errors
/// Returns an inline message unless the value is an absolute http(s) URL with a host.
pub fn validate_target_url(raw: &str) -> Result<String, &'static str> {
    let url = raw.trim();
    if url.is_empty() {
        return Err("Enter the target URL.");
    }
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(ParseError::RelativeUrlWithoutBase) => return Err("Target URL must start with http:// or https://."),
        Err(_) => return Err("Enter a valid target URL."),
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err("Target URL must start with http:// or https://.");
    }
    let has_domain = parsed.domain().is_some_and(|d| d.contains('.') && !d.ends_with('.'));
    if !has_domain || !parsed.username().is_empty() || url.chars().any(char::is_whitespace) {
        return Err("Enter a valid target URL.");
    }
    Ok(url.to_owned())
}

/// # Errors
/// Returns an inline message when the anchor text is blank or too long.
pub fn validate_anchor_text(raw: &str) -> Result<String, &'static str> {
    let text = raw.trim();
    if text.is_empty() {
        return Err("Enter the anchor text.");
    }
    if text.chars().count() > MAX_ANCHOR_LEN {
        return Err("Anchor text must be 100 characters or fewer.");
    }
    Ok(text.to_owned())
}

/// # Errors
/// Returns an inline message when the title or body is blank.
pub fn validate_blog_draft(
    title: &str,
    slug: &str,
    content: &str,
    excerpt: &str,
    published: bool,
) -> Result<BlogDraft, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title.");
    }
    if content.trim().is_empty() {
        return Err("Write some content first.");
    }
    let slug = if slug.trim().is_empty() { slugify(title) } else { slugify(slug) };
    if slug.is_empty() {
        return Err("Enter a slug using letters or numbers.");
    }
    Ok(BlogDraft { title: title.to_owned(), slug, content: content.to_owned(), excerpt: non_blank(excerpt), published })
}

/// Lowercase, hyphen-separated ASCII slug.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_owned()
}

pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
