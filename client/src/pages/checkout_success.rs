//! Order confirmation after payment.
//!
//! Reads `?orderId=`, loads that order once, and renders it. A missing id or
//! a failed fetch sends the visitor home. There is no payment polling.

#[cfg(test)]
#[path = "checkout_success_test.rs"]
mod checkout_success_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::badge::StatusBadge;
use crate::components::layout::PublicLayout;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Order;
use crate::state::auth::AuthState;
use crate::state::session;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money, order_badge_class};
use crate::util::nav::query_value;

/// What the confirmation page does with the current query and fetch outcome.
#[derive(Clone, Debug, PartialEq)]
pub enum Confirmation {
    GoHome,
    Load(String),
    Show(Order),
}

/// First step: an order id to load, or home when `orderId` is missing or blank.
pub fn from_query(order_id: Option<String>) -> Confirmation {
    query_value(order_id).map_or(Confirmation::GoHome, Confirmation::Load)
}

/// Second step: show the fetched order, or home when the fetch failed.
pub fn from_fetch(result: Result<Order, ApiError>) -> Confirmation {
    result.map_or(Confirmation::GoHome, Confirmation::Show)
}

#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let order = RwSignal::new(None::<Order>);

    Effect::new(move || {
        let home = NavigateOptions { replace: true, ..NavigateOptions::default() };
        let Confirmation::Load(order_id) = from_query(query.read_untracked().get("orderId")) else {
            navigate("/", home);
            return;
        };
        let client = session::api_client(auth);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_order(&client, &order_id).await;
            if let Err(err) = &result {
                session::report_failure(auth, toasts, "load order", err);
            }
            match from_fetch(result) {
                Confirmation::Show(found) => order.set(Some(found)),
                Confirmation::GoHome | Confirmation::Load(_) => navigate("/", home),
            }
        });
    });

    view! {
        <Title text="Order confirmed | GuestPost Marketplace"/>
        <PublicLayout>
            {move || match order.get() {
                None => view! { <span class="spinner"></span> }.into_any(),
                Some(found) => view! {
                    <section class="auth-card auth-card--wide">
                        <h1>"Thank you for your order"</h1>
                        <p>"We'll start outreach right away. You can follow progress from your dashboard."</p>
                        <dl class="detail-list">
                            <dt>"Order"</dt>
                            <dd>{found.id.clone()}</dd>
                            <dt>"Site"</dt>
                            <dd>{found.site.clone()}</dd>
                            <dt>"Amount"</dt>
                            <dd>{format_money(found.amount)}</dd>
                            <dt>"Status"</dt>
                            <dd>
                                <StatusBadge class=order_badge_class(found.status) label=found.status.label()/>
                            </dd>
                            <dt>"Placed"</dt>
                            <dd>{format_date(found.created_at.as_deref())}</dd>
                        </dl>
                        <A href="/dashboard/orders" attr:class="btn btn--primary">
                            "View my orders"
                        </A>
                    </section>
                }
                .into_any(),
            }}
        </PublicLayout>
    }
}
