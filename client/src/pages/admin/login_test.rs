use super::*;
use crate::net::types::{AccountStatus, Role, Session, User};

fn admin_session() -> AuthState {
    let mut state = AuthState::starting(None);
    state.signed_in(Session {
        token: "tok".to_owned(),
        user: User {
            id: "a1".to_owned(),
            email: "ops@example.com".to_owned(),
            name: "Ops".to_owned(),
            role: Role::Admin,
            status: AccountStatus::Active,
            balance: 0.0,
            email_verified: true,
            created_at: None,
        },
    });
    state
}

#[test]
fn signed_in_admin_skips_form() {
    assert!(skips_form(&admin_session(), false));
}

#[test]
fn pending_role_check_does_not_redirect() {
    assert!(!skips_form(&admin_session(), true));
}

#[test]
fn loading_or_signed_out_shows_form() {
    assert!(!skips_form(&AuthState::starting(Some("tok".to_owned())), false));
    assert!(!skips_form(&AuthState::default(), false));
}
