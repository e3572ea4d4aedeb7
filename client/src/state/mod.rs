//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `listing`, `cart`, etc.) so pages depend
//! on small focused models. Each model is a plain struct with pure
//! transitions; pages wrap them in `RwSignal`s so readers subscribe to
//! changes reactively.

pub mod auth;
pub mod cart;
pub mod confirm;
pub mod guard;
pub mod listing;
pub mod session;
pub mod stats;
pub mod storefront;
pub mod toast;
