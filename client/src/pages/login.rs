//! Buyer login with email and password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::layout::PublicLayout;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::session;
use crate::util::validate::validate_login;

/// Where a freshly signed-in user lands.
pub fn landing_route(user: &User) -> &'static str {
    if user.is_admin() { "/admin" } else { "/dashboard" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let redirect = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading {
            if let Some(user) = &state.user {
                redirect(landing_route(user), NavigateOptions::default());
            }
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
            match session::login(auth, credentials).await {
                Ok(user) => navigate(landing_route(&user), NavigateOptions::default()),
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    error.set(Some(err.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text="Log in | GuestPost Marketplace"/>
        <PublicLayout>
            <div class="auth-card">
                <h1>"Log in"</h1>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        "Email"
                        <input
                            class="input"
                            type="email"
                            autocomplete="email"
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
                        {move || if busy.get() { "Signing in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__links">
                    <A href="/forgot-password">"Forgot your password?"</A>
                    " · "
                    <A href="/register">"Create an account"</A>
                </p>
            </div>
        </PublicLayout>
    }
}
