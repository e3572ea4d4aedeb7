//! Public support form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::PublicLayout;
use crate::net::api;
use crate::state::session;
use crate::state::toast::ToastState;
use crate::util::validate::validate_support_message;

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let support = match validate_support_message(
            &name.get_untracked(),
            &email.get_untracked(),
            &subject.get_untracked(),
            &message.get_untracked(),
        ) {
            Ok(support) => support,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::submit_support_message(&session::anonymous_client(), &support).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Thanks! We'll reply by email.");
                    });
                    subject.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    leptos::logging::error!("support message failed: {err}");
                    toasts.update(|t| {
                        t.error(err.user_message());
                    });
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Title text="Contact | GuestPost Marketplace"/>
        <PublicLayout>
            <div class="auth-card auth-card--wide">
                <h1>"Contact us"</h1>
                <p>"Questions about a site, an order, or your balance? Send us a note."</p>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        "Name"
                        <input class="input" type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                    </label>
                    <label class="form__field">
                        "Email"
                        <input class="input" type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev))/>
                    </label>
                    <label class="form__field">
                        "Subject"
                        <input class="input" type="text" prop:value=move || subject.get() on:input=move |ev| subject.set(event_target_value(&ev))/>
                    </label>
                    <label class="form__field">
                        "Message"
                        <textarea class="input" rows="6" prop:value=move || message.get() on:input=move |ev| message.set(event_target_value(&ev))></textarea>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send message" }}
                    </button>
                </form>
            </div>
        </PublicLayout>
    }
}
