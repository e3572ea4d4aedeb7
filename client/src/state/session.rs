//! Session lifecycle operations over the shared `AuthState` signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates the signal once (`start`), restores the persisted token,
//! and tears it down on `logout`. Pages call these helpers instead of
//! touching storage or the token directly.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `Result<_, ApiError>`; `report_failure` is the single place
//! that logs, raises a toast, and drops an expired session. Form submissions
//! that the backend refuses go through `form_rejection` instead, which never
//! touches the session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::auth::AuthState;
use super::toast::ToastState;
use crate::config::ClientConfig;
use crate::net::api::{self, ApiClient};
use crate::net::error::ApiError;
use crate::net::types::{Credentials, PasswordChange, User};
use crate::util::{nav, storage};

/// Interval between background token refreshes.
pub const REFRESH_INTERVAL_SECS: u64 = 15 * 60;

/// Initial state: the persisted token is read but not yet verified.
pub fn start() -> AuthState {
    AuthState::starting(storage::load_token())
}

/// API client carrying the current session token.
pub fn api_client(auth: RwSignal<AuthState>) -> ApiClient {
    ApiClient::new(&ClientConfig::from_build_env(), auth.with_untracked(|a| a.token.clone()))
}

/// API client without credentials, for public endpoints.
pub fn anonymous_client() -> ApiClient {
    ApiClient::new(&ClientConfig::from_build_env(), None)
}

/// Resolve the persisted token into a user. Always clears `loading`.
pub async fn restore(auth: RwSignal<AuthState>) {
    if auth.with_untracked(|a| a.token.is_none()) {
        auth.update(|a| a.restore_finished(None));
        return;
    }
    match api::fetch_current_user(&api_client(auth)).await {
        Ok(user) => auth.update(|a| a.restore_finished(Some(user))),
        Err(err) => {
            leptos::logging::warn!("session restore failed: {err}");
            storage::clear_token();
            auth.update(|a| a.restore_finished(None));
        }
    }
}

/// Sign in and persist the returned session.
///
/// # Errors
///
/// Returns the backend's rejection for invalid credentials, or a network error.
pub async fn login(auth: RwSignal<AuthState>, credentials: Credentials) -> Result<User, ApiError> {
    let session = api::login(&anonymous_client(), &credentials).await?;
    storage::save_token(&session.token);
    let user = session.user.clone();
    auth.update(|a| a.signed_in(session));
    Ok(user)
}

/// Clear the session and leave for the public site. Never fails.
pub async fn logout(auth: RwSignal<AuthState>) {
    if let Err(err) = api::logout(&api_client(auth)).await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    storage::clear_token();
    auth.update(AuthState::signed_out);
    nav::hard_redirect(&ClientConfig::from_build_env().site_url);
}

/// Forward a password change. The local session is untouched either way.
///
/// # Errors
///
/// Returns the backend's message when the change is refused.
pub async fn change_password(auth: RwSignal<AuthState>, change: PasswordChange) -> Result<(), ApiError> {
    api::change_password(&api_client(auth), &change).await
}

/// Exchange the current token for a fresh one; a refusal ends the session.
///
/// # Errors
///
/// Returns the refresh failure after the session has been cleared.
pub async fn refresh(auth: RwSignal<AuthState>) -> Result<(), ApiError> {
    match api::refresh_session(&api_client(auth)).await {
        Ok(token) => {
            storage::save_token(&token);
            auth.update(|a| a.token_refreshed(token));
            Ok(())
        }
        Err(err) => {
            discard(auth);
            Err(err)
        }
    }
}

/// Refresh the token on a fixed interval while a user is signed in.
pub fn spawn_refresh_loop(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_INTERVAL_SECS)).await;
            if !auth.with_untracked(AuthState::is_authenticated) {
                continue;
            }
            if let Err(err) = refresh(auth).await {
                leptos::logging::warn!("session refresh failed: {err}");
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Drop the local session without contacting the backend or leaving the page.
pub fn discard(auth: RwSignal<AuthState>) {
    storage::clear_token();
    auth.update(AuthState::signed_out);
}

/// Log a refused form submission and return the inline message for it.
pub fn form_rejection(context: &str, err: &ApiError) -> String {
    leptos::logging::warn!("{context}: {err}");
    err.user_message()
}

/// Log a failed call, surface it as a toast, and drop an expired session.
pub fn report_failure(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, context: &str, err: &ApiError) {
    leptos::logging::error!("{context}: {err}");
    toasts.update(|t| {
        t.error(err.user_message());
    });
    if err.is_unauthorized() {
        discard(auth);
    }
}
