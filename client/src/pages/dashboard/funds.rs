//! Add-funds requests: submit a new one and follow earlier ones.

#[cfg(test)]
#[path = "funds_test.rs"]
mod funds_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::badge::StatusBadge;
use crate::components::list_view::ListView;
use crate::net::api;
use crate::net::types::FundRequest;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money, fund_badge_class};
use crate::util::remote;
use crate::util::validate::{FUND_METHODS, validate_fund_request};

/// Label for a stored method value; unknown values pass through.
pub fn method_label(method: &str) -> String {
    FUND_METHODS
        .iter()
        .find(|(value, _)| *value == method)
        .map_or_else(|| method.to_owned(), |(_, label)| (*label).to_owned())
}

#[component]
pub fn FundsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let requests = RwSignal::new(ListState::<FundRequest>::default());

    let amount = RwSignal::new(String::new());
    let method = RwSignal::new(FUND_METHODS[0].0.to_owned());
    let reference = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let reload = move || {
        remote::load_list(auth, toasts, requests, "load fund requests", |client| async move {
            api::fetch_my_fund_requests(&client).await
        });
    };
    Effect::new(move || reload());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_fund_request(
            &amount.get_untracked(),
            &method.get_untracked(),
            &reference.get_untracked(),
            &note.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        remote::mutate(
            auth,
            toasts,
            "create fund request",
            "Fund request submitted. We'll credit your balance once it's reviewed.",
            move |client| async move { api::create_fund_request(&client, &request).await },
            move || {
                amount.set(String::new());
                reference.set(String::new());
                note.set(String::new());
                reload();
            },
        );
    };

    view! {
        <Title text="Add funds | GuestPost Marketplace"/>
        <h1>"Add funds"</h1>
        <form class="form form--inline" on:submit=on_submit>
            <label class="form__field">
                "Amount (USD)"
                <input
                    class="input"
                    type="number"
                    min="10"
                    max="10000"
                    step="0.01"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </label>
            <label class="form__field">
                "Method"
                <select class="input" on:change=move |ev| method.set(event_target_value(&ev))>
                    {FUND_METHODS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option value=value selected={move || method.get() == value}>
                                    {label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="form__field">
                "Transaction reference"
                <input
                    class="input"
                    type="text"
                    prop:value=move || reference.get()
                    on:input=move |ev| reference.set(event_target_value(&ev))
                />
            </label>
            <label class="form__field">
                "Note"
                <input
                    class="input"
                    type="text"
                    prop:value=move || note.get()
                    on:input=move |ev| note.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit">
                "Submit request"
            </button>
        </form>

        <h2>"Your requests"</h2>
        <ListView list=requests empty="No fund requests yet.">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Amount"</th>
                        <th>"Method"</th>
                        <th>"Reference"</th>
                        <th>"Status"</th>
                        <th>"Submitted"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || requests.get().items
                        key=|request| request.id.clone()
                        children=|request| {
                            view! {
                                <tr>
                                    <td>{format_money(request.amount)}</td>
                                    <td>{method_label(&request.method)}</td>
                                    <td>{request.reference.clone().unwrap_or_default()}</td>
                                    <td>
                                        <StatusBadge class=fund_badge_class(request.status) label=request.status.label()/>
                                    </td>
                                    <td>{format_date(request.created_at.as_deref())}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </ListView>
    }
}
