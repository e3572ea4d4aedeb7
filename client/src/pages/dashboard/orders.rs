use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::badge::StatusBadge;
use crate::components::list_view::ListView;
use crate::net::api;
use crate::net::types::Order;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money, order_badge_class};
use crate::util::remote;

#[component]
pub fn MyOrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let orders = RwSignal::new(ListState::<Order>::default());

    Effect::new(move || {
        remote::load_list(auth, toasts, orders, "load my orders", |client| async move {
            api::fetch_my_orders(&client).await
        });
    });

    view! {
        <Title text="My orders | GuestPost Marketplace"/>
        <h1>"My orders"</h1>
        <ListView list=orders empty="You haven't placed any orders yet.">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Site"</th>
                        <th>"Target URL"</th>
                        <th>"Anchor text"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Placed"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get().items
                        key=|order| order.id.clone()
                        children=|order| {
                            view! {
                                <tr>
                                    <td>{order.site.clone()}</td>
                                    <td class="table__url">{order.target_url.clone().unwrap_or_default()}</td>
                                    <td>{order.anchor_text.clone().unwrap_or_default()}</td>
                                    <td>{format_money(order.amount)}</td>
                                    <td>
                                        <StatusBadge class=order_badge_class(order.status) label=order.status.label()/>
                                    </td>
                                    <td>{format_date(order.created_at.as_deref())}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </ListView>
    }
}
