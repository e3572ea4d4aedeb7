//! Forgot-password request and reset-by-token pages.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::layout::PublicLayout;
use crate::net::api;
use crate::state::session;
use crate::state::toast::ToastState;
use crate::util::nav::query_value;
use crate::util::validate::{validate_email, validate_password_reset};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = match validate_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::request_password_reset(&session::anonymous_client(), &address).await {
                Ok(()) => sent.set(true),
                Err(err) => {
                    leptos::logging::warn!("password reset request failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Title text="Forgot password | GuestPost Marketplace"/>
        <PublicLayout>
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <Show
                    when=move || sent.get()
                    fallback=move || {
                        view! {
                            <form class="form" on:submit=on_submit>
                                <label class="form__field">
                                    "Email"
                                    <input
                                        class="input"
                                        type="email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>
                                <Show when=move || error.get().is_some()>
                                    <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                                </Show>
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    "Send reset link"
                                </button>
                            </form>
                        }
                    }
                >
                    <p>"If an account exists for that address, a reset link is on its way."</p>
                </Show>
                <p class="auth-card__links">
                    <A href="/login">"Back to log in"</A>
                </p>
            </div>
        </PublicLayout>
    }
}

/// Sets a new password using the `?token=` from the reset email.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let token = query_value(query.read_untracked().get("token"));
        let new_password =
            match validate_password_reset(token.as_deref(), &password.get_untracked(), &confirm.get_untracked()) {
                Ok(new_password) => new_password,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        let token = token.unwrap_or_default();
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::confirm_password_reset(&session::anonymous_client(), &token, &new_password).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Password updated. Log in with your new password.");
                    });
                    navigate("/login", NavigateOptions::default());
                }
                Err(err) => {
                    leptos::logging::warn!("password reset failed: {err}");
                    error.set(Some(err.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text="Choose a new password | GuestPost Marketplace"/>
        <PublicLayout>
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        "New password"
                        <input
                            class="input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Confirm new password"
                        <input
                            class="input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Update password"
                    </button>
                </form>
            </div>
        </PublicLayout>
    }
}
