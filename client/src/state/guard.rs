//! Route-guard state machine.
//!
//! `Checking` while the session is resolving, then exactly one of
//! `Authorized` / `Unauthorized`. Pure derived state: no retries, no timeout.
//! Guards are a navigation convenience; the backend authorizes every call.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::auth::AuthState;

/// Requirement a guarded route places on the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Any signed-in visitor (buyer dashboard).
    SignedIn,
    /// Visitor whose role is `admin` (back office).
    Admin,
}

impl Access {
    /// Where an unauthorized visitor is sent.
    pub fn login_route(self) -> &'static str {
        match self {
            Self::SignedIn => "/login",
            Self::Admin => "/admin/login",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authorized,
    Unauthorized,
}

pub fn evaluate(state: &AuthState, access: Access) -> GuardState {
    if state.loading {
        return GuardState::Checking;
    }
    let allowed = match access {
        Access::SignedIn => state.is_authenticated(),
        Access::Admin => state.is_admin(),
    };
    if allowed { GuardState::Authorized } else { GuardState::Unauthorized }
}

/// Redirect path for the current state, if the visitor must leave.
pub fn redirect_target(state: &AuthState, access: Access) -> Option<&'static str> {
    (evaluate(state, access) == GuardState::Unauthorized).then(|| access.login_route())
}
