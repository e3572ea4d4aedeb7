//! Email verification landing page and the resend form.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::layout::PublicLayout;
use crate::net::api;
use crate::state::session;
use crate::util::nav::query_value;
use crate::util::validate::validate_email;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Verification {
    Pending,
    Verified,
    Failed(String),
}

/// Reads `?token=` and confirms it once on mount.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let outcome = RwSignal::new(Verification::Pending);

    Effect::new(move || {
        let Some(token) = query_value(query.read_untracked().get("token")) else {
            outcome.set(Verification::Failed("This verification link is incomplete.".to_owned()));
            return;
        };
        leptos::task::spawn_local(async move {
            match api::verify_email(&session::anonymous_client(), &token).await {
                Ok(()) => outcome.set(Verification::Verified),
                Err(err) => {
                    leptos::logging::warn!("email verification failed: {err}");
                    outcome.set(Verification::Failed(err.user_message()));
                }
            }
        });
    });

    view! {
        <Title text="Verify email | GuestPost Marketplace"/>
        <PublicLayout>
            <div class="auth-card">
                {move || match outcome.get() {
                    Verification::Pending => view! {
                        <h1>"Verifying..."</h1>
                        <span class="spinner"></span>
                    }
                    .into_any(),
                    Verification::Verified => view! {
                        <h1>"Email verified"</h1>
                        <p>"Your account is active."</p>
                        <A href="/login" attr:class="btn btn--primary">
                            "Log in"
                        </A>
                    }
                    .into_any(),
                    Verification::Failed(message) => view! {
                        <h1>"Verification failed"</h1>
                        <p class="form__error">{message}</p>
                        <A href="/resend-verification">"Send a new link"</A>
                    }
                    .into_any(),
                }}
            </div>
        </PublicLayout>
    }
}

#[component]
pub fn ResendVerificationPage() -> impl IntoView {
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
            match api::resend_verification(&session::anonymous_client(), &address).await {
                Ok(()) => sent.set(true),
                Err(err) => {
                    leptos::logging::warn!("resend verification failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Title text="Resend verification | GuestPost Marketplace"/>
        <PublicLayout>
            <div class="auth-card">
                <h1>"Resend verification email"</h1>
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
                                    "Send link"
                                </button>
                            </form>
                        }
                    }
                >
                    <p>"If that address has an unverified account, a new link is on its way."</p>
                </Show>
            </div>
        </PublicLayout>
    }
}
