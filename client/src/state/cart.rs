//! Checkout cart of selected site placements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled from the storefront, edited on the checkout page, and persisted to
//! `localStorage` so a reload keeps the selection. Prices are display-only;
//! the backend prices the payment intent.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{CheckoutItem, SiteListing};
use crate::util::validate::{validate_anchor_text, validate_target_url};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub site: SiteListing,
    pub target_url: String,
    pub anchor_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Add a site once. Returns `false` if it was already in the cart.
    pub fn add(&mut self, site: SiteListing) -> bool {
        if self.contains(&site.id) {
            return false;
        }
        self.items.push(CartItem { site, target_url: String::new(), anchor_text: String::new() });
        true
    }

    pub fn remove(&mut self, site_id: &str) {
        self.items.retain(|item| item.site.id != site_id);
    }

    pub fn contains(&self, site_id: &str) -> bool {
        self.items.iter().any(|item| item.site.id == site_id)
    }

    pub fn set_target_url(&mut self, site_id: &str, value: String) {
        if let Some(item) = self.items.iter_mut().find(|item| item.site.id == site_id) {
            item.target_url = value;
        }
    }

    pub fn set_anchor_text(&mut self, site_id: &str, value: String) {
        if let Some(item) = self.items.iter_mut().find(|item| item.site.id == site_id) {
            item.anchor_text = value;
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.site.price).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Validate every line and produce the payment-intent payload.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first site whose fields are invalid.
    pub fn checkout_items(&self) -> Result<Vec<CheckoutItem>, String> {
        if self.items.is_empty() {
            return Err("Your cart is empty.".to_owned());
        }
        self.items
            .iter()
            .map(|item| {
                let target_url =
                    validate_target_url(&item.target_url).map_err(|e| format!("{}: {e}", item.site.name))?;
                let anchor_text =
                    validate_anchor_text(&item.anchor_text).map_err(|e| format!("{}: {e}", item.site.name))?;
                Ok(CheckoutItem { site_id: item.site.id.clone(), target_url, anchor_text })
            })
            .collect()
    }
}
