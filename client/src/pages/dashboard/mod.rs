//! Buyer dashboard pages, rendered inside `DashboardLayout`.

pub mod funds;
pub mod invoices;
pub mod orders;
pub mod overview;
pub mod settings;
