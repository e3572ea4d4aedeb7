//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! or validation rules from page and component logic to improve reuse and
//! testability.

pub mod format;
pub mod markdown;
pub mod nav;
pub mod remote;
pub mod storage;
pub mod validate;
