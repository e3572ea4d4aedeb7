pub mod admin;
pub mod blog;
pub mod checkout;
pub mod checkout_success;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod password_reset;
pub mod register;
pub mod static_pages;
pub mod verify_email;
