//! About, Terms, and Privacy. Plain copy, no data.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::layout::PublicLayout;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About | GuestPost Marketplace"/>
        <PublicLayout>
            <article class="prose">
                <h1>"About us"</h1>
                <p>
                    "We connect brands with independent publishers. Every site in the marketplace is "
                    "reviewed for real traffic and editorial standards before it is listed."
                </p>
                <h2>"How it works"</h2>
                <ol>
                    <li>"Browse publisher sites and filter by authority, price, and niche."</li>
                    <li>"Add placements to your cart with the target URL and anchor text."</li>
                    <li>"Pay once at checkout. We handle outreach and publication."</li>
                    <li>"Track every order from your dashboard until it goes live."</li>
                </ol>
                <p>
                    "Questions? " <A href="/contact">"Get in touch"</A> "."
                </p>
            </article>
        </PublicLayout>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Title text="Terms of Service | GuestPost Marketplace"/>
        <PublicLayout>
            <article class="prose">
                <h1>"Terms of Service"</h1>
                <h2>"Orders"</h2>
                <p>
                    "An order is accepted once payment succeeds. Publishers may decline content that "
                    "breaks their editorial guidelines; declined orders are refunded to your balance."
                </p>
                <h2>"Account balance"</h2>
                <p>
                    "Funds added to your balance are reviewed before they are credited and can be used "
                    "for any future order."
                </p>
                <h2>"Content"</h2>
                <p>
                    "You are responsible for the links and anchor text you submit. We may refuse "
                    "placements that point to unlawful or harmful content."
                </p>
            </article>
        </PublicLayout>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text="Privacy Policy | GuestPost Marketplace"/>
        <PublicLayout>
            <article class="prose">
                <h1>"Privacy Policy"</h1>
                <p>
                    "We store your name, email address, and order history to run your account. "
                    "Payments are processed by our payment provider; card details never reach our servers."
                </p>
                <p>
                    "Your session token is kept in your browser's local storage and removed when you "
                    "log out."
                </p>
                <p>"We do not sell personal data. Contact us to request a copy or deletion of your data."</p>
            </article>
        </PublicLayout>
    }
}
