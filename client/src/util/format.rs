//! Display formatting for money, dates, and status badges.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{AccountStatus, FundRequestStatus, OrderStatus, PaymentStatus};

/// Format an amount as US dollars with thousands separators: `$1,234.50`.
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{cents}")
}

/// Date portion of an ISO-8601 timestamp, or an em-dash placeholder.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(ts) => ts.split('T').next().unwrap_or(ts).to_owned(),
        None => "\u{2014}".to_owned(),
    }
}

/// Shorten `text` to at most `max` characters, appending an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}\u{2026}", cut.trim_end())
}

pub fn order_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Processing => "badge badge--info",
        OrderStatus::Completed => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--muted",
    }
}

pub fn payment_badge_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "badge badge--warning",
        PaymentStatus::Succeeded => "badge badge--success",
        PaymentStatus::Failed => "badge badge--danger",
        PaymentStatus::Refunded => "badge badge--muted",
    }
}

pub fn fund_badge_class(status: FundRequestStatus) -> &'static str {
    match status {
        FundRequestStatus::Pending => "badge badge--warning",
        FundRequestStatus::Complete => "badge badge--success",
        FundRequestStatus::Rejected => "badge badge--danger",
    }
}

pub fn account_badge_class(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "badge badge--success",
        AccountStatus::Suspended => "badge badge--danger",
    }
}
