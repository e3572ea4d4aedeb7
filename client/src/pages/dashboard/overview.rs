use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::badge::StatusBadge;
use crate::components::list_view::ListView;
use crate::components::stat_tile::StatTile;
use crate::net::api;
use crate::net::types::Order;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::stats::OrderStats;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money, order_badge_class};
use crate::util::remote;

const RECENT_ORDERS: usize = 5;

#[component]
pub fn DashboardOverviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let orders = RwSignal::new(ListState::<Order>::default());

    Effect::new(move || {
        remote::load_list(auth, toasts, orders, "load my orders", |client| async move {
            api::fetch_my_orders(&client).await
        });
    });

    let stats = Memo::new(move |_| orders.with(|o| OrderStats::from_orders(&o.items)));
    let balance = move || auth.with(|a| a.user.as_ref().map_or(0.0, |u| u.balance));
    let greeting = move || auth.with(|a| a.display_name()).map(|name| format!("Welcome back, {name}"));

    view! {
        <Title text="Dashboard | GuestPost Marketplace"/>
        <h1>{greeting}</h1>
        <div class="stat-grid">
            <StatTile label="Balance" value=Signal::derive(move || format_money(balance()))/>
            <StatTile label="Orders" value=Signal::derive(move || stats.get().total.to_string())/>
            <StatTile label="In progress" value=Signal::derive(move || stats.get().open().to_string())/>
            <StatTile label="Published" value=Signal::derive(move || stats.get().completed.to_string())/>
            <StatTile label="Total spent" value=Signal::derive(move || format_money(stats.get().spent))/>
        </div>
        <div class="section-header">
            <h2>"Recent orders"</h2>
            <A href="/dashboard/orders">"All orders"</A>
        </div>
        <ListView list=orders empty="No orders yet. Pick a site from the marketplace to get started.">
            <ul class="recent-list">
                {move || {
                    orders
                        .get()
                        .items
                        .into_iter()
                        .take(RECENT_ORDERS)
                        .map(|order| {
                            let placed = format_date(order.created_at.as_deref());
                            view! {
                                <li>
                                    <span>{order.site}</span>
                                    <span>{format_money(order.amount)}</span>
                                    <StatusBadge class=order_badge_class(order.status) label=order.status.label()/>
                                    <time>{placed}</time>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </ListView>
    }
}
