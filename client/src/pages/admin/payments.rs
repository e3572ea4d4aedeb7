use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::badge::StatusBadge;
use crate::components::list_view::ListView;
use crate::components::stat_tile::StatTile;
use crate::net::api;
use crate::net::types::Payment;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::stats::captured_revenue;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money, payment_badge_class};
use crate::util::remote;

#[component]
pub fn AdminPaymentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let payments = RwSignal::new(ListState::<Payment>::default());

    Effect::new(move || {
        remote::load_list(auth, toasts, payments, "load payments", |client| async move {
            api::fetch_payments(&client).await
        });
    });

    let revenue = Signal::derive(move || format_money(payments.with(|p| captured_revenue(&p.items))));

    view! {
        <Title text="Payments | Admin"/>
        <h1>"Payments"</h1>
        <div class="stat-grid">
            <StatTile label="Captured revenue" value=revenue hint="Succeeded payments"/>
        </div>
        <ListView list=payments empty="No payments recorded.">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Payment"</th>
                        <th>"Order"</th>
                        <th>"Buyer"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || payments.get().items
                        key=|payment| payment.id.clone()
                        children=|payment| {
                            view! {
                                <tr>
                                    <td>{payment.id.clone()}</td>
                                    <td>{payment.order_id.clone()}</td>
                                    <td>{payment.user_email.clone().unwrap_or_default()}</td>
                                    <td>{format_money(payment.amount)}</td>
                                    <td>
                                        <StatusBadge class=payment_badge_class(payment.status) label=payment.status.label()/>
                                    </td>
                                    <td>{format_date(payment.created_at.as_deref())}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </ListView>
    }
}
