//! Navigation helpers that leave the single-page router.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Full-page navigation to `url` (external site, hosted checkout).
pub fn hard_redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                leptos::logging::warn!("redirect to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Non-blank, trimmed query parameter value.
pub fn query_value(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Checkout success route for `order_id`.
pub fn checkout_success_path(order_id: &str) -> String {
    format!("/checkout/success?orderId={}", urlencoding::encode(order_id))
}
