//! Account registration.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::layout::PublicLayout;
use crate::net::api;
use crate::state::session;
use crate::util::validate::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match validate_registration(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(registration) => registration,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::register(&session::anonymous_client(), &registration).await {
                Ok(()) => registered.set(true),
                Err(err) => {
                    leptos::logging::warn!("registration failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
            busy.set(false);
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__field">
                {label}
                <input
                    class="input"
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <Title text="Create an account | GuestPost Marketplace"/>
        <PublicLayout>
            <div class="auth-card">
                <Show
                    when=move || registered.get()
                    fallback=move || {
                        view! {
                            <h1>"Create an account"</h1>
                            <form class="form" on:submit=on_submit>
                                {text_field("Name", "text", "name", name)}
                                {text_field("Email", "email", "email", email)}
                                {text_field("Password", "password", "new-password", password)}
                                {text_field("Confirm password", "password", "new-password", confirm)}
                                <Show when=move || error.get().is_some()>
                                    <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                                </Show>
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    "Sign up"
                                </button>
                            </form>
                            <p class="auth-card__links">
                                "Already have an account? " <A href="/login">"Log in"</A>
                            </p>
                        }
                    }
                >
                    <h1>"Check your inbox"</h1>
                    <p>
                        "We sent a verification link to " <strong>{move || email.get()}</strong>
                        ". Follow it to activate your account."
                    </p>
                    <p class="auth-card__links">
                        <A href="/resend-verification">"Didn't get the email?"</A>
                        " · "
                        <A href="/login">"Log in"</A>
                    </p>
                </Show>
            </div>
        </PublicLayout>
    }
}
