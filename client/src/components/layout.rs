//! Page chrome: storefront header and footer, dashboard and admin shells.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use super::guard::{AdminGuard, RequireAuth};
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::session;

const DASHBOARD_LINKS: [(&str, &str); 5] = [
    ("/dashboard", "Overview"),
    ("/dashboard/orders", "Orders"),
    ("/dashboard/funds", "Add funds"),
    ("/dashboard/invoices", "Invoices"),
    ("/dashboard/settings", "Settings"),
];

const ADMIN_LINKS: [(&str, &str); 6] = [
    ("/admin", "Overview"),
    ("/admin/orders", "Orders"),
    ("/admin/users", "Users"),
    ("/admin/payments", "Payments"),
    ("/admin/fund-requests", "Fund requests"),
    ("/admin/blog", "Blog"),
];

fn sign_out(auth: RwSignal<AuthState>) {
    leptos::task::spawn_local(session::logout(auth));
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    let account = move || {
        let state = auth.get();
        if state.loading {
            return ().into_any();
        }
        if state.is_authenticated() {
            let (href, label) = if state.is_admin() { ("/admin", "Admin") } else { ("/dashboard", "Dashboard") };
            view! {
                <A href=href>{label}</A>
                <button class="btn btn--link" on:click=move |_| sign_out(auth)>
                    "Log out"
                </button>
            }
            .into_any()
        } else {
            view! {
                <A href="/login">"Log in"</A>
                <A href="/register" attr:class="btn btn--primary">
                    "Sign up"
                </A>
            }
            .into_any()
        }
    };

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                "GuestPost"
            </A>
            <nav class="site-header__nav">
                <A href="/">"Marketplace"</A>
                <A href="/blog">"Blog"</A>
                <A href="/about">"About"</A>
                <A href="/contact">"Contact"</A>
            </nav>
            <div class="site-header__account">
                <A href="/checkout" attr:class="site-header__cart">
                    "Cart "
                    <span class="site-header__cart-count">{move || cart.with(CartState::len)}</span>
                </A>
                {account}
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav>
                <A href="/about">"About"</A>
                <A href="/terms">"Terms"</A>
                <A href="/privacy">"Privacy"</A>
                <A href="/contact">"Contact"</A>
            </nav>
            <p>"Guest posts on vetted publisher sites."</p>
        </footer>
    }
}

/// Storefront chrome around a public page.
#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="page">{children()}</main>
        <SiteFooter/>
    }
}

fn side_nav(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <nav class="side-nav">
            {links
                .iter()
                .map(|(href, label)| view! { <A href=*href exact=true>{*label}</A> })
                .collect::<Vec<_>>()}
        </nav>
    }
}

/// Parent route for `/dashboard/*`. Requires any signed-in user.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <SiteHeader/>
        <RequireAuth>
            <div class="shell">
                {side_nav(&DASHBOARD_LINKS)}
                <main class="shell__main">
                    <Outlet/>
                </main>
            </div>
        </RequireAuth>
    }
}

/// Parent route for `/admin/*` (except the admin login page).
#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <AdminGuard>
            <div class="shell shell--admin">
                <aside class="shell__aside">
                    <A href="/" attr:class="site-header__brand">
                        "GuestPost Admin"
                    </A>
                    {side_nav(&ADMIN_LINKS)}
                    <div class="shell__account">
                        <span>{move || auth.with(|a| a.display_name())}</span>
                        <button class="btn btn--link" on:click=move |_| sign_out(auth)>
                            "Log out"
                        </button>
                    </div>
                </aside>
                <main class="shell__main">
                    <Outlet/>
                </main>
            </div>
        </AdminGuard>
    }
}
