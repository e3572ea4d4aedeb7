//! Storefront: publisher sites with client-side filters.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::layout::PublicLayout;
use crate::components::list_view::ListView;
use crate::components::site_card::SiteCard;
use crate::net::api;
use crate::net::types::SiteListing;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::listing::ListState;
use crate::state::storefront::{self, SiteFilter, SiteSort, parse_optional};
use crate::state::toast::ToastState;
use crate::util::format::format_money;
use crate::util::remote;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let sites = RwSignal::new(ListState::<SiteListing>::default());

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let min_authority = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let sort = RwSignal::new(SiteSort::default());

    Effect::new(move || {
        remote::load_list(auth, toasts, sites, "load sites", |client| async move {
            api::fetch_sites(&client).await
        });
    });

    let filter = Memo::new(move |_| SiteFilter {
        search: search.get(),
        category: Some(category.get()).filter(|c| !c.is_empty()),
        min_authority: parse_optional(&min_authority.get()),
        max_price: parse_optional(&max_price.get()),
        sort: sort.get(),
    });
    let visible = Memo::new(move |_| sites.with(|s| filter.with(|f| f.apply(&s.items))));
    let category_options = Memo::new(move |_| sites.with(|s| storefront::categories(&s.items)));

    let clear_filters = move |_| {
        search.set(String::new());
        category.set(String::new());
        min_authority.set(String::new());
        max_price.set(String::new());
        sort.set(SiteSort::default());
    };

    view! {
        <Title text="GuestPost Marketplace"/>
        <PublicLayout>
            <section class="hero">
                <h1>"Guest posts on sites that rank"</h1>
                <p>"Pick publishers by domain authority and price. Pay once, track every placement."</p>
            </section>

            <section class="filters">
                <input
                    class="input"
                    type="search"
                    placeholder="Search sites or niches"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select class="input" on:change=move |ev| category.set(event_target_value(&ev))>
                    <option value="" selected=move || category.get().is_empty()>
                        "All categories"
                    </option>
                    {move || {
                        category_options
                            .get()
                            .into_iter()
                            .map(|c| {
                                let value = c.clone();
                                let attr = c.clone();
                                view! {
                                    <option value=attr selected={move || category.get() == value}>
                                        {c}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <input
                    class="input"
                    type="number"
                    min="0"
                    max="100"
                    placeholder="Min DA"
                    prop:value=move || min_authority.get()
                    on:input=move |ev| min_authority.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="number"
                    min="0"
                    placeholder="Max price"
                    prop:value=move || max_price.get()
                    on:input=move |ev| max_price.set(event_target_value(&ev))
                />
                <select class="input" on:change=move |ev| sort.set(SiteSort::parse(&event_target_value(&ev)))>
                    {SiteSort::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option value=s.as_str() selected={move || sort.get() == s}>
                                    {s.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn btn--link" on:click=clear_filters>
                    "Clear"
                </button>
            </section>

            <Show when=move || !cart.with(CartState::is_empty)>
                <div class="cart-bar">
                    <span>
                        {move || cart.with(CartState::len)} " in cart · "
                        {move || format_money(cart.with(CartState::total))}
                    </span>
                    <A href="/checkout" attr:class="btn btn--primary">
                        "Checkout"
                    </A>
                </div>
            </Show>

            <ListView list=sites empty="No sites are listed yet.">
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=|| view! { <p class="list-state list-state--empty">"No sites match these filters."</p> }
                >
                    <div class="site-grid">
                        <For
                            each=move || visible.get()
                            key=|site| site.id.clone()
                            children=|site| view! { <SiteCard site=site/> }
                        />
                    </div>
                </Show>
            </ListView>
        </PublicLayout>
    }
}
