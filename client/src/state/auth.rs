//! Auth-session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` at the application root and consumed
//! by route guards and identity-aware components. The async operations that
//! drive these transitions live in `state::session`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

/// Authentication state tracking the current user, token, and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Bearer token for API calls; present before `user` while restoring.
    pub token: Option<String>,
    /// True from app start until the persisted session has been resolved.
    pub loading: bool,
}

impl AuthState {
    /// State at application start, before the persisted token is checked.
    pub fn starting(token: Option<String>) -> Self {
        Self { user: None, token, loading: true }
    }

    /// Resolve the startup restore. A missing user discards the token.
    pub fn restore_finished(&mut self, user: Option<User>) {
        if user.is_none() {
            self.token = None;
        }
        self.user = user;
        self.loading = false;
    }

    pub fn signed_in(&mut self, session: Session) {
        self.token = Some(session.token);
        self.user = Some(session.user);
        self.loading = false;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
    }

    pub fn token_refreshed(&mut self, token: String) {
        if self.user.is_some() {
            self.token = Some(token);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Display name for headers, falling back to the email address.
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(|u| {
            if u.name.trim().is_empty() { u.email.clone() } else { u.name.clone() }
        })
    }
}
