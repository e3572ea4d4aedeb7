//! Storefront card for a single publisher site.

use leptos::prelude::*;

use crate::net::types::SiteListing;
use crate::state::cart::CartState;
use crate::util::format::{format_money, truncate};

const DESCRIPTION_PREVIEW: usize = 160;

#[component]
pub fn SiteCard(site: SiteListing) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let site_id = site.id.clone();
    let in_cart = Memo::new(move |_| cart.with(|c| c.contains(&site_id)));

    let toggle = {
        let site = site.clone();
        move |_| {
            if in_cart.get_untracked() {
                cart.update(|c| c.remove(&site.id));
            } else {
                cart.update(|c| {
                    c.add(site.clone());
                });
            }
        }
    };

    let turnaround = site.turnaround_days.map(|days| format!("{days} day turnaround"));
    let description = site.description.as_deref().map(|d| truncate(d, DESCRIPTION_PREVIEW));

    view! {
        <article class="site-card">
            <header class="site-card__header">
                <h3 class="site-card__name">{site.name.clone()}</h3>
                <span class="site-card__category">{site.category.clone()}</span>
            </header>
            <a class="site-card__url" href=site.url.clone() target="_blank" rel="noopener noreferrer">
                {site.url.clone()}
            </a>
            {description.map(|d| view! { <p class="site-card__description">{d}</p> })}
            <dl class="site-card__metrics">
                <div>
                    <dt>"DA"</dt>
                    <dd>{site.domain_authority}</dd>
                </div>
                <div>
                    <dt>"Price"</dt>
                    <dd>{format_money(site.price)}</dd>
                </div>
            </dl>
            {turnaround.map(|t| view! { <p class="site-card__turnaround">{t}</p> })}
            <button
                class="btn"
                class:btn--primary=move || !in_cart.get()
                on:click=toggle
            >
                {move || if in_cart.get() { "Remove from cart" } else { "Add to cart" }}
            </button>
        </article>
    }
}
