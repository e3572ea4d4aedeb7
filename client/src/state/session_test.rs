use super::*;
use crate::net::types::{AccountStatus, Role, Session};
use futures::executor::block_on;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "ann@example.com".to_owned(),
        name: "Ann".to_owned(),
        role: Role::User,
        status: AccountStatus::Active,
        balance: 0.0,
        email_verified: true,
        created_at: None,
    }
}

fn signed_in() -> (Owner, RwSignal<AuthState>, RwSignal<ToastState>) {
    let owner = Owner::new();
    owner.set();
    let mut state = AuthState::starting(None);
    state.signed_in(Session { token: "tok".to_owned(), user: user() });
    (owner, RwSignal::new(state), RwSignal::new(ToastState::default()))
}

fn status(code: u16, message: &str) -> ApiError {
    ApiError::Status { status: code, message: message.to_owned() }
}

fn change() -> PasswordChange {
    PasswordChange { current_password: "wrong-one".to_owned(), new_password: "new-secret".to_owned() }
}

// =============================================================
// logout / discard
// =============================================================

#[test]
fn logout_clears_token_and_user_even_when_request_fails() {
    let (_owner, auth, _) = signed_in();
    block_on(logout(auth));
    let state = auth.get_untracked();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
}

#[test]
fn discard_signs_out_locally() {
    let (_owner, auth, _) = signed_in();
    discard(auth);
    assert!(!auth.get_untracked().is_authenticated());
}

// =============================================================
// change_password
// =============================================================

#[test]
fn failed_password_change_leaves_session_untouched() {
    let (_owner, auth, _) = signed_in();
    let before = auth.get_untracked();
    assert!(block_on(change_password(auth, change())).is_err());
    assert_eq!(auth.get_untracked(), before);
}

#[test]
fn unauthorized_form_rejection_keeps_session_and_returns_backend_message() {
    let (_owner, auth, toasts) = signed_in();
    let message = form_rejection("change password", &status(401, "Current password is incorrect."));
    assert_eq!(message, "Current password is incorrect.");
    assert!(auth.get_untracked().is_authenticated());
    assert!(toasts.get_untracked().items.is_empty());
}

// =============================================================
// restore / refresh
// =============================================================

#[test]
fn restore_without_token_finishes_loading() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::starting(None));
    block_on(restore(auth));
    let state = auth.get_untracked();
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn failed_restore_finishes_loading_and_drops_token() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::starting(Some("stale".to_owned())));
    block_on(restore(auth));
    let state = auth.get_untracked();
    assert!(!state.loading);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn failed_refresh_signs_out() {
    let (_owner, auth, _) = signed_in();
    assert!(block_on(refresh(auth)).is_err());
    assert!(!auth.get_untracked().is_authenticated());
}

// =============================================================
// report_failure
// =============================================================

#[test]
fn report_failure_keeps_session_for_non_auth_errors() {
    let (_owner, auth, toasts) = signed_in();
    report_failure(auth, toasts, "load orders", &status(500, "Server error"));
    assert!(auth.get_untracked().is_authenticated());
    let items = toasts.get_untracked().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].message, "Server error");
}

#[test]
fn report_failure_drops_expired_session() {
    let (_owner, auth, toasts) = signed_in();
    report_failure(auth, toasts, "load orders", &status(401, "Session expired"));
    assert!(!auth.get_untracked().is_authenticated());
    assert_eq!(toasts.get_untracked().items.len(), 1);
}
