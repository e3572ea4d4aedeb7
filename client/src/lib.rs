//! # client
//!
//! Leptos + WASM front end for the guest-post marketplace: storefront,
//! checkout, buyer dashboard, and admin back office.
//!
//! All business rules live in the backend REST API. This crate holds typed
//! projections of backend records, the session store, route guards, and the
//! pages that render and mutate them through `net::api`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating guestpost client");
    leptos::mount::hydrate_body(app::App);
}
