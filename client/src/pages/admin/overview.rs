//! Back-office landing page: counts and totals across every collection.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::stat_tile::StatTile;
use crate::net::api;
use crate::net::types::{FundRequest, Order, Payment, User};
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::stats::{OrderStats, UserStats, captured_revenue, pending_funds};
use crate::state::toast::ToastState;
use crate::util::format::format_money;
use crate::util::remote;

#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let orders = RwSignal::new(ListState::<Order>::default());
    let users = RwSignal::new(ListState::<User>::default());
    let payments = RwSignal::new(ListState::<Payment>::default());
    let funds = RwSignal::new(ListState::<FundRequest>::default());

    // Four independent reads; each settles on its own.
    Effect::new(move || {
        remote::load_list(auth, toasts, orders, "load orders", |client| async move {
            api::fetch_orders(&client).await
        });
        remote::load_list(auth, toasts, users, "load users", |client| async move {
            api::fetch_users(&client).await
        });
        remote::load_list(auth, toasts, payments, "load payments", |client| async move {
            api::fetch_payments(&client).await
        });
        remote::load_list(auth, toasts, funds, "load fund requests", |client| async move {
            api::fetch_fund_requests(&client).await
        });
    });

    let order_stats = Memo::new(move |_| orders.with(|o| OrderStats::from_orders(&o.items)));
    let user_stats = Memo::new(move |_| users.with(|u| UserStats::from_users(&u.items)));
    let revenue = Memo::new(move |_| payments.with(|p| captured_revenue(&p.items)));
    let pending = Memo::new(move |_| funds.with(|f| pending_funds(&f.items)));

    let count = |read: Memo<OrderStats>, pick: fn(&OrderStats) -> usize| {
        Signal::derive(move || read.with(pick).to_string())
    };

    view! {
        <Title text="Admin | GuestPost Marketplace"/>
        <h1>"Overview"</h1>
        <h2>"Orders"</h2>
        <div class="stat-grid">
            <StatTile label="Total" value=count(order_stats, |s| s.total)/>
            <StatTile label="Pending" value=count(order_stats, |s| s.pending)/>
            <StatTile label="Processing" value=count(order_stats, |s| s.processing)/>
            <StatTile label="Completed" value=count(order_stats, |s| s.completed)/>
            <StatTile label="Cancelled" value=count(order_stats, |s| s.cancelled)/>
        </div>
        <h2>"Money"</h2>
        <div class="stat-grid">
            <StatTile
                label="Captured revenue"
                value=Signal::derive(move || format_money(revenue.get()))
                hint="Succeeded payments"
            />
            <StatTile label="Pending fund requests" value=Signal::derive(move || pending.get().0.to_string())/>
            <StatTile label="Awaiting credit" value=Signal::derive(move || format_money(pending.get().1))/>
        </div>
        <h2>"Users"</h2>
        <div class="stat-grid">
            <StatTile label="Accounts" value=Signal::derive(move || user_stats.get().total.to_string())/>
            <StatTile label="Admins" value=Signal::derive(move || user_stats.get().admins.to_string())/>
            <StatTile label="Suspended" value=Signal::derive(move || user_stats.get().suspended.to_string())/>
        </div>
    }
}
