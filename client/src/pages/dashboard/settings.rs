//! Account details and the change-password form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::auth::AuthState;
use crate::state::session;
use crate::state::toast::ToastState;
use crate::util::format::format_date;
use crate::util::validate::validate_password_change;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let change = match validate_password_change(
            &current.get_untracked(),
            &new_password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(change) => change,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match session::change_password(auth, change).await {
                Ok(()) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    toasts.update(|t| {
                        t.success("Password changed.");
                    });
                }
                Err(err) => error.set(Some(session::form_rejection("change password", &err))),
            }
            busy.set(false);
        });
    };

    let profile_field = move |label: &'static str, read: fn(&AuthState) -> String| {
        view! {
            <dt>{label}</dt>
            <dd>{move || auth.with(read)}</dd>
        }
    };

    let password_field = move |label: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__field">
                {label}
                <input
                    class="input"
                    type="password"
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <Title text="Settings | GuestPost Marketplace"/>
        <h1>"Settings"</h1>
        <section class="card">
            <h2>"Profile"</h2>
            <dl class="detail-list">
                {profile_field("Name", |a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                {profile_field("Email", |a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                {profile_field("Member since", |a| format_date(a.user.as_ref().and_then(|u| u.created_at.as_deref())))}
            </dl>
        </section>
        <section class="card">
            <h2>"Change password"</h2>
            <form class="form" on:submit=on_submit>
                {password_field("Current password", "current-password", current)}
                {password_field("New password", "new-password", new_password)}
                {password_field("Confirm new password", "new-password", confirm)}
                <Show when=move || error.get().is_some()>
                    <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Update password"
                </button>
            </form>
        </section>
    }
}
