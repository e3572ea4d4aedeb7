use super::*;
use crate::net::types::{AccountStatus, Role};

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "ann@example.com".to_owned(),
        name: "Ann".to_owned(),
        role,
        status: AccountStatus::Active,
        balance: 0.0,
        email_verified: true,
        created_at: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn starting_state_is_loading() {
    let state = AuthState::starting(Some("t".to_owned()));
    assert!(state.loading);
    assert_eq!(state.token.as_deref(), Some("t"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn restore_finished_with_user_keeps_token() {
    let mut state = AuthState::starting(Some("t".to_owned()));
    state.restore_finished(Some(user(Role::User)));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("t"));
}

#[test]
fn restore_finished_without_user_clears_token_and_loading() {
    let mut state = AuthState::starting(Some("stale".to_owned()));
    state.restore_finished(None);
    assert!(!state.loading);
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn signed_in_then_out() {
    let mut state = AuthState::starting(None);
    state.signed_in(Session { token: "abc".to_owned(), user: user(Role::Admin) });
    assert!(state.is_admin());
    state.signed_out();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_admin());
}

#[test]
fn token_refresh_ignored_without_user() {
    let mut state = AuthState::default();
    state.token_refreshed("new".to_owned());
    assert!(state.token.is_none());
}

#[test]
fn display_name_falls_back_to_email() {
    let mut u = user(Role::User);
    u.name = "  ".to_owned();
    let state = AuthState { user: Some(u), token: None, loading: false };
    assert_eq!(state.display_name().as_deref(), Some("ann@example.com"));
}
