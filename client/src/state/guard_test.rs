use super::*;
use crate::net::types::{AccountStatus, Role, User};

fn signed_in(role: Role) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: "u@example.com".to_owned(),
            name: "U".to_owned(),
            role,
            status: AccountStatus::Active,
            balance: 0.0,
            email_verified: true,
            created_at: None,
        }),
        token: Some("t".to_owned()),
        loading: false,
    }
}

#[test]
fn loading_is_checking_for_every_access_level() {
    let state = AuthState::starting(Some("t".to_owned()));
    assert_eq!(evaluate(&state, Access::Admin), GuardState::Checking);
    assert_eq!(evaluate(&state, Access::SignedIn), GuardState::Checking);
    assert_eq!(redirect_target(&state, Access::Admin), None);
}

#[test]
fn anonymous_visitor_is_redirected_from_admin() {
    let state = AuthState::default();
    assert_eq!(evaluate(&state, Access::Admin), GuardState::Unauthorized);
    assert_eq!(redirect_target(&state, Access::Admin), Some("/admin/login"));
}

#[test]
fn non_admin_user_is_redirected_from_admin() {
    let state = signed_in(Role::User);
    assert_eq!(evaluate(&state, Access::Admin), GuardState::Unauthorized);
    assert_eq!(redirect_target(&state, Access::Admin), Some("/admin/login"));
}

#[test]
fn admin_is_authorized_without_redirect() {
    let state = signed_in(Role::Admin);
    assert_eq!(evaluate(&state, Access::Admin), GuardState::Authorized);
    assert_eq!(redirect_target(&state, Access::Admin), None);
}

#[test]
fn dashboard_allows_any_signed_in_user() {
    assert_eq!(evaluate(&signed_in(Role::User), Access::SignedIn), GuardState::Authorized);
    assert_eq!(evaluate(&signed_in(Role::Admin), Access::SignedIn), GuardState::Authorized);
}

#[test]
fn dashboard_redirects_anonymous_to_login() {
    assert_eq!(redirect_target(&AuthState::default(), Access::SignedIn), Some("/login"));
}
