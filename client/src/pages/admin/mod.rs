//! Admin back office. Every page except `login` renders inside `AdminLayout`,
//! which holds the admin guard.

pub mod blog;
pub mod fund_requests;
pub mod login;
pub mod order_detail;
pub mod orders;
pub mod overview;
pub mod payments;
pub mod users;
