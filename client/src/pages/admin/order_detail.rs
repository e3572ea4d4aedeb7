//! Single order view with status change and deletion.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::badge::StatusBadge;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::api;
use crate::net::types::{Order, OrderStatus};
use crate::state::auth::AuthState;
use crate::state::session;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money, order_badge_class};
use crate::util::remote;

#[derive(Clone, Debug, PartialEq)]
enum Detail {
    Loading,
    Failed(String),
    Ready(Order),
}

#[component]
pub fn AdminOrderDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let detail = RwSignal::new(Detail::Loading);
    let next_status = RwSignal::new(None::<OrderStatus>);
    let confirm_open = RwSignal::new(false);

    let order_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let load = move |id: String| {
        let client = session::api_client(auth);
        leptos::task::spawn_local(async move {
            match api::fetch_order(&client, &id).await {
                Ok(order) => {
                    next_status.set(Some(order.status));
                    detail.set(Detail::Ready(order));
                }
                Err(err) => {
                    session::report_failure(auth, toasts, "load order", &err);
                    detail.set(Detail::Failed(err.user_message()));
                }
            }
        });
    };
    Effect::new(move || {
        detail.set(Detail::Loading);
        load(order_id.get());
    });

    let save_status = move |_| {
        let Some(status) = next_status.get_untracked() else {
            return;
        };
        let id = order_id.get_untracked();
        let reload_id = id.clone();
        remote::mutate(
            auth,
            toasts,
            "update order status",
            "Order status updated.",
            move |client| async move { api::update_order_status(&client, &id, status).await },
            move || load(reload_id),
        );
    };

    let on_confirm = Callback::new(move |()| {
        confirm_open.set(false);
        let id = order_id.get_untracked();
        let navigate = navigate.clone();
        remote::mutate(
            auth,
            toasts,
            "delete order",
            "Order deleted.",
            move |client| async move { api::delete_order(&client, &id).await },
            move || navigate("/admin/orders", NavigateOptions::default()),
        );
    });
    let on_cancel = Callback::new(move |()| confirm_open.set(false));

    view! {
        <Title text="Order | Admin"/>
        <A href="/admin/orders">"← All orders"</A>
        {move || match detail.get() {
            Detail::Loading => view! { <span class="spinner"></span> }.into_any(),
            Detail::Failed(message) => view! {
                <div class="list-state list-state--error" role="alert">
                    <p class="list-state__title">"Could not load this order."</p>
                    <p class="list-state__detail">{message}</p>
                </div>
            }
            .into_any(),
            Detail::Ready(order) => view! {
                <h1>"Order " {order.id.clone()}</h1>
                <section class="card">
                    <dl class="detail-list">
                        <dt>"Status"</dt>
                        <dd>
                            <StatusBadge class=order_badge_class(order.status) label=order.status.label()/>
                        </dd>
                        <dt>"Buyer"</dt>
                        <dd>{order.buyer_email.clone().unwrap_or_default()}</dd>
                        <dt>"Site"</dt>
                        <dd>{order.site.clone()} " " {order.site_url.clone().unwrap_or_default()}</dd>
                        <dt>"Target URL"</dt>
                        <dd class="table__url">{order.target_url.clone().unwrap_or_default()}</dd>
                        <dt>"Anchor text"</dt>
                        <dd>{order.anchor_text.clone().unwrap_or_default()}</dd>
                        <dt>"Amount"</dt>
                        <dd>{format_money(order.amount)}</dd>
                        <dt>"Placed"</dt>
                        <dd>{format_date(order.created_at.as_deref())}</dd>
                    </dl>
                </section>
                <section class="card form--inline">
                    <label class="form__field">
                        "Status"
                        <select class="input" on:change=move |ev| next_status.set(OrderStatus::parse(&event_target_value(&ev)))>
                            {OrderStatus::ALL
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <option value=s.as_str() selected={s == order.status}>
                                            {s.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <button class="btn btn--primary" on:click=save_status>
                        "Save status"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| confirm_open.set(true)>
                        "Delete order"
                    </button>
                </section>
            }
            .into_any(),
        }}
        <ConfirmDialog
            open=confirm_open
            title="Delete order?"
            message=Signal::derive(move || format!("Order {} will be removed permanently.", order_id.get()))
            on_confirm=on_confirm
            on_cancel=on_cancel
        />
    }
}
