use super::*;
use crate::net::types::Role;

fn user(id: &str, role: Role, status: AccountStatus) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        name: id.to_owned(),
        role,
        status,
        balance: 0.0,
        email_verified: true,
        created_at: None,
    }
}

#[test]
fn active_buyer_can_be_suspended_promoted_and_deleted() {
    let actions = row_actions(&user("u1", Role::User, AccountStatus::Active), Some("admin"));
    assert_eq!(actions, RowActions { make_admin: true, suspend: true, activate: false, delete: true });
}

#[test]
fn suspended_user_offers_activate_instead_of_suspend() {
    let actions = row_actions(&user("u1", Role::User, AccountStatus::Suspended), Some("admin"));
    assert!(actions.activate);
    assert!(!actions.suspend);
}

#[test]
fn existing_admin_cannot_be_promoted_again() {
    let actions = row_actions(&user("u2", Role::Admin, AccountStatus::Active), Some("admin"));
    assert!(!actions.make_admin);
    assert!(actions.delete);
}

#[test]
fn own_row_has_no_actions() {
    let actions = row_actions(&user("admin", Role::Admin, AccountStatus::Active), Some("admin"));
    assert_eq!(actions, RowActions { make_admin: false, suspend: false, activate: false, delete: false });
}

#[test]
fn delete_message_names_the_account() {
    let action = UserAction::Delete { id: "u1".to_owned(), email: "a@b.com".to_owned() };
    assert_eq!(action.title(), "Delete user?");
    assert!(action.message().starts_with("a@b.com"));
}
