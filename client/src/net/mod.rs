//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` builds request descriptions, `api` executes them and unwraps
//! the response envelope, `error` is the flat failure taxonomy, and `types`
//! defines the typed records decoded at the boundary.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod types;
