//! Modal confirmation for destructive actions.

use leptos::prelude::*;

/// Confirmation dialog. Cancelling (button, backdrop, or Escape) runs
/// `on_cancel` only; the caller issues its request from `on_confirm`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(default = "Delete")] confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="dialog"
                    role="alertdialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>{title}</h2>
                    <p class="dialog__message">{move || message.get()}</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                            {confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
