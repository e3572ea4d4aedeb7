//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u64 = 5_000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id.clone()
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id.clone();

    #[cfg(feature = "hydrate")]
    {
        let id = id.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
            toasts.update(|t| t.dismiss(&id));
        });
    }

    view! {
        <div class=toast.kind.class() role="status">
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" title="Dismiss" on:click=move |_| toasts.update(|t| t.dismiss(&id))>
                "×"
            </button>
        </div>
    }
}
