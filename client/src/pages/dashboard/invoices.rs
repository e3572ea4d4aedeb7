use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::list_view::ListView;
use crate::net::api;
use crate::net::types::Invoice;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money};
use crate::util::remote;

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let invoices = RwSignal::new(ListState::<Invoice>::default());

    Effect::new(move || {
        remote::load_list(auth, toasts, invoices, "load invoices", |client| async move {
            api::fetch_invoices(&client).await
        });
    });

    view! {
        <Title text="Invoices | GuestPost Marketplace"/>
        <h1>"Invoices"</h1>
        <ListView list=invoices empty="No invoices yet.">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Invoice"</th>
                        <th>"Order"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Issued"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || invoices.get().items
                        key=|invoice| invoice.id.clone()
                        children=|invoice| {
                            let (class, label) =
                                if invoice.paid { ("badge badge--success", "Paid") } else { ("badge badge--warning", "Unpaid") };
                            view! {
                                <tr>
                                    <td>{invoice.number.clone()}</td>
                                    <td>{invoice.order_id.clone()}</td>
                                    <td>{format_money(invoice.amount)}</td>
                                    <td>
                                        <span class=class>{label}</span>
                                    </td>
                                    <td>{format_date(invoice.issued_at.as_deref())}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </ListView>
    }
}
