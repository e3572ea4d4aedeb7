//! Spawn helpers that tie API calls to page state.
//!
//! Every list load and mutation follows the same shape: build a client from
//! the current session, run the call off the render path, report failures
//! through `session::report_failure`, then commit the outcome to a signal.

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::session;
use crate::state::toast::ToastState;

/// Fetch a collection into `list`. One request, no retry.
pub fn load_list<T, F, Fut>(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    list: RwSignal<ListState<T>>,
    context: &'static str,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    list.update(ListState::begin);
    let client = session::api_client(auth);
    leptos::task::spawn_local(async move {
        let result = fetch(client).await;
        if let Err(err) = &result {
            session::report_failure(auth, toasts, context, err);
        }
        list.update(|l| l.finish(result));
    });
}

/// Run a single write, toast the outcome, and call `on_success` afterwards
/// (usually a list refetch).
pub fn mutate<F, Fut, S>(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    context: &'static str,
    success_message: &'static str,
    action: F,
    on_success: S,
) where
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    S: FnOnce() + 'static,
{
    let client = session::api_client(auth);
    leptos::task::spawn_local(async move {
        match action(client).await {
            Ok(()) => {
                toasts.update(|t| {
                    t.success(success_message);
                });
                on_success();
            }
            Err(err) => session::report_failure(auth, toasts, context, &err),
        }
    });
}
