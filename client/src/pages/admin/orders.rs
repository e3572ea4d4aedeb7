//! All orders with inline status changes and confirmed deletion.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::badge::StatusBadge;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::list_view::ListView;
use crate::net::api;
use crate::net::types::{Order, OrderStatus};
use crate::state::auth::AuthState;
use crate::state::confirm::ConfirmState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money, order_badge_class};
use crate::util::remote;

#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingDelete {
    id: String,
    site: String,
}

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let orders = RwSignal::new(ListState::<Order>::default());
    let confirm = RwSignal::new(ConfirmState::<PendingDelete>::default());

    let reload = move || {
        remote::load_list(auth, toasts, orders, "load orders", |client| async move {
            api::fetch_orders(&client).await
        });
    };
    Effect::new(move || reload());

    let change_status = move |id: String, status: OrderStatus| {
        remote::mutate(
            auth,
            toasts,
            "update order status",
            "Order status updated.",
            move |client| async move { api::update_order_status(&client, &id, status).await },
            reload,
        );
    };

    let on_confirm = Callback::new(move |()| {
        let Some(pending) = confirm.try_update(ConfirmState::confirm).flatten() else {
            return;
        };
        remote::mutate(
            auth,
            toasts,
            "delete order",
            "Order deleted.",
            move |client| async move { api::delete_order(&client, &pending.id).await },
            reload,
        );
    });
    let on_cancel = Callback::new(move |()| confirm.update(ConfirmState::cancel));

    view! {
        <Title text="Orders | Admin"/>
        <h1>"Orders"</h1>
        <ListView list=orders empty="No orders yet.">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Buyer"</th>
                        <th>"Site"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Placed"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get().items
                        key=|order| (order.id.clone(), order.status.as_str())
                        children=move |order| {
                            let id = order.id.clone();
                            let pending = PendingDelete { id: order.id.clone(), site: order.site.clone() };
                            view! {
                                <tr>
                                    <td>
                                        <A href=format!("/admin/orders/{}", order.id)>{order.id.clone()}</A>
                                    </td>
                                    <td>{order.buyer_email.clone().unwrap_or_default()}</td>
                                    <td>{order.site.clone()}</td>
                                    <td>{format_money(order.amount)}</td>
                                    <td>
                                        <StatusBadge class=order_badge_class(order.status) label=order.status.label()/>
                                    </td>
                                    <td>{format_date(order.created_at.as_deref())}</td>
                                    <td class="table__actions">
                                        <select
                                            class="input input--compact"
                                            title="Change status"
                                            on:change=move |ev| {
                                                if let Some(status) = OrderStatus::parse(&event_target_value(&ev)) {
                                                    change_status(id.clone(), status);
                                                }
                                            }
                                        >
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
            title="Delete order?"
            message=Signal::derive(move || {
                confirm
                    .with(|c| c.pending().map(|p| format!("Order {} for {} will be removed permanently.", p.id, p.site)))
                    .unwrap_or_default()
            })
            on_confirm=on_confirm
            on_cancel=on_cancel
        />
    }
}
