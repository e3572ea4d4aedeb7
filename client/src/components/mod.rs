pub mod badge;
pub mod confirm_dialog;
pub mod guard;
pub mod layout;
pub mod list_view;
pub mod site_card;
pub mod stat_tile;
pub mod toast;
