//! Cart review and payment-intent creation.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::layout::PublicLayout;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::cart::{CartItem, CartState};
use crate::state::session;
use crate::state::toast::ToastState;
use crate::util::format::format_money;
use crate::util::nav::{checkout_success_path, hard_redirect};
use crate::util::validate::MAX_ANCHOR_LEN;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let items = match cart.with_untracked(CartState::checkout_items) {
            Ok(items) => items,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let client = session::api_client(auth);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_payment_intent(&client, &items).await {
                Ok(intent) => {
                    cart.update(CartState::clear);
                    match intent.checkout_url {
                        Some(url) => hard_redirect(&url),
                        None => navigate(&checkout_success_path(&intent.order_id), NavigateOptions::default()),
                    }
                }
                Err(err) => {
                    session::report_failure(auth, toasts, "create payment intent", &err);
                    error.set(Some(err.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    let signed_in = move || auth.with(AuthState::is_authenticated);

    view! {
        <Title text="Checkout | GuestPost Marketplace"/>
        <PublicLayout>
            <h1>"Checkout"</h1>
            <Show
                when=move || !cart.with(CartState::is_empty)
                fallback=|| {
                    view! {
                        <section class="empty-page">
                            <p>"Your cart is empty."</p>
                            <A href="/" attr:class="btn btn--primary">
                                "Browse sites"
                            </A>
                        </section>
                    }
                }
            >
                <form class="checkout" on:submit=on_submit.clone()>
                    <For
                        each=move || cart.get().items
                        key=|item| item.site.id.clone()
                        children=move |item| view! { <CartLine item=item cart=cart/> }
                    />
                    <div class="checkout__summary">
                        <span>"Total"</span>
                        <strong>{move || format_money(cart.with(CartState::total))}</strong>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <p class="checkout__login">
                                    <A href="/login">"Log in"</A>
                                    " or "
                                    <A href="/register">"create an account"</A>
                                    " to place your order."
                                </p>
                            }
                        }
                    >
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating order..." } else { "Pay now" }}
                        </button>
                    </Show>
                </form>
            </Show>
        </PublicLayout>
    }
}

/// One editable cart row: target URL and anchor text for a site.
#[component]
fn CartLine(item: CartItem, cart: RwSignal<CartState>) -> impl IntoView {
    let site_id = StoredValue::new(item.site.id.clone());
    let field = move |pick: fn(&CartItem) -> String| {
        move || {
            cart.with(|c| {
                site_id.with_value(|id| c.items.iter().find(|i| &i.site.id == id).map(pick).unwrap_or_default())
            })
        }
    };

    view! {
        <fieldset class="cart-line">
            <legend>
                <span class="cart-line__name">{item.site.name.clone()}</span>
                <span class="cart-line__price">{format_money(item.site.price)}</span>
            </legend>
            <label class="form__field">
                "Target URL"
                <input
                    class="input"
                    type="url"
                    placeholder="https://yoursite.com/page"
                    prop:value=field(|i| i.target_url.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        site_id.with_value(|id| cart.update(|c| c.set_target_url(id, value)));
                    }
                />
            </label>
            <label class="form__field">
                "Anchor text"
                <input
                    class="input"
                    type="text"
                    maxlength=MAX_ANCHOR_LEN.to_string()
                    prop:value=field(|i| i.anchor_text.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        site_id.with_value(|id| cart.update(|c| c.set_anchor_text(id, value)));
                    }
                />
            </label>
            <button
                class="btn btn--link"
                type="button"
                on:click=move |_| site_id.with_value(|id| cart.update(|c| c.remove(id)))
            >
                "Remove"
            </button>
        </fieldset>
    }
}
