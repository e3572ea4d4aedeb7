//! Fund request review. A status change is a single PUT followed by a refetch.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::badge::StatusBadge;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::list_view::ListView;
use crate::net::api;
use crate::net::types::{FundRequest, FundRequestStatus};
use crate::pages::dashboard::funds::method_label;
use crate::state::auth::AuthState;
use crate::state::confirm::ConfirmState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money, fund_badge_class};
use crate::util::remote;

#[component]
pub fn AdminFundRequestsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let requests = RwSignal::new(ListState::<FundRequest>::default());
    let confirm = RwSignal::new(ConfirmState::<(String, f64)>::default());

    let reload = move || {
        remote::load_list(auth, toasts, requests, "load fund requests", |client| async move {
            api::fetch_fund_requests(&client).await
        });
    };
    Effect::new(move || reload());

    let change_status = move |id: String, status: FundRequestStatus| {
        remote::mutate(
            auth,
            toasts,
            "update fund request",
            "Fund request updated.",
            move |client| async move { api::update_fund_request_status(&client, &id, status).await },
            reload,
        );
    };

    let on_confirm = Callback::new(move |()| {
        let Some((id, _)) = confirm.try_update(ConfirmState::confirm).flatten() else {
            return;
        };
        remote::mutate(
            auth,
            toasts,
            "delete fund request",
            "Fund request deleted.",
            move |client| async move { api::delete_fund_request(&client, &id).await },
            reload,
        );
    });
    let on_cancel = Callback::new(move |()| confirm.update(ConfirmState::cancel));

    view! {
        <Title text="Fund requests | Admin"/>
        <h1>"Fund requests"</h1>
        <ListView list=requests empty="No fund requests.">
            <table class="table">
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Amount"</th>
                        <th>"Method"</th>
                        <th>"Reference"</th>
                        <th>"Note"</th>
                        <th>"Status"</th>
                        <th>"Submitted"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || requests.get().items
                        key=|request| (request.id.clone(), request.status.as_str())
                        children=move |request| {
                            let id = request.id.clone();
                            let pending = (request.id.clone(), request.amount);
                            view! {
                                <tr>
                                    <td>{request.user_email.clone().unwrap_or_default()}</td>
                                    <td>{format_money(request.amount)}</td>
                                    <td>{method_label(&request.method)}</td>
                                    <td>{request.reference.clone().unwrap_or_default()}</td>
                                    <td>{request.note.clone().unwrap_or_default()}</td>
                                    <td>
                                        <StatusBadge class=fund_badge_class(request.status) label=request.status.label()/>
                                    </td>
                                    <td>{format_date(request.created_at.as_deref())}</td>
                                    <td class="table__actions">
                                        <select
                                            class="input input--compact"
                                            title="Change status"
                                            on:change=move |ev| {
                                                if let Some(status) = FundRequestStatus::parse(&event_target_value(&ev)) {
                                                    change_status(id.clone(), status);
                                                }
                                            }
                                        >
                                            {FundRequestStatus::ALL
                                                .into_iter()
                                                .map(|s| {
                                                    view! {
                                                        <option value=s.as_str() selected={s == request.status}>
                                                            {s.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                        <button
                                            class="btn btn--danger btn--small"
                                            on:click=move |_| confirm.update(|c| c.request(pending.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </ListView>
        <ConfirmDialog
            open=Signal::derive(move || confirm.with(ConfirmState::is_open))
            title="Delete fund request?"
            message=Signal::derive(move || {
                confirm
                    .with(|c| c.pending().map(|(_, amount)| format!("The {} request will be removed permanently.", format_money(*amount))))
                    .unwrap_or_default()
            })
            on_confirm=on_confirm
            on_cancel=on_cancel
        />
    }
}
