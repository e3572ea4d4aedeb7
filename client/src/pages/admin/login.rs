//! Admin sign-in. The backend confirms the role before the back office opens.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::session;
use crate::util::validate::validate_login;

const NOT_ADMIN: &str = "This account does not have admin access.";

/// Admins already signed in go straight to the back office. While a
/// submission is in flight the role check has not finished, so the submit
/// handler decides instead.
pub fn skips_form(auth: &AuthState, submitting: bool) -> bool {
    !submitting && !auth.loading && auth.is_admin()
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let redirect = navigate.clone();
    Effect::new(move || {
        if auth.with(|a| skips_form(a, busy.get())) {
            redirect("/admin", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = match session::login(auth, credentials).await {
                Ok(user) if user.is_admin() => api::check_admin(&session::api_client(auth)).await,
                Ok(_) => Ok(false),
                Err(err) => Err(err),
            };
            match outcome {
                Ok(true) => navigate("/admin", NavigateOptions::default()),
                Ok(false) => {
                    session::discard(auth);
                    error.set(Some(NOT_ADMIN.to_owned()));
                    busy.set(false);
                }
                Err(err) => {
                    leptos::logging::warn!("admin login failed: {err}");
                    session::discard(auth);
                    error.set(Some(err.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text="Admin login | GuestPost Marketplace"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Admin login"</h1>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        "Email"
                        <input
                            class="input"
                            type="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Password"
                        <input
                            class="input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Checking..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__links">
                    <A href="/">"Back to the marketplace"</A>
                </p>
            </div>
        </div>
    }
}
