//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::{AdminLayout, DashboardLayout};
use crate::components::toast::ToastHost;
use crate::pages::admin::{
    blog::AdminBlogPage, fund_requests::AdminFundRequestsPage, login::AdminLoginPage, order_detail::AdminOrderDetailPage,
    orders::AdminOrdersPage, overview::AdminOverviewPage, payments::AdminPaymentsPage, users::AdminUsersPage,
};
use crate::pages::dashboard::{
    funds::FundsPage, invoices::InvoicesPage, orders::MyOrdersPage, overview::DashboardOverviewPage,
    settings::SettingsPage,
};
use crate::pages::{
    blog::{BlogIndexPage, BlogPostPage},
    checkout::CheckoutPage,
    checkout_success::CheckoutSuccessPage,
    contact::ContactPage,
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    password_reset::{ForgotPasswordPage, ResetPasswordPage},
    register::RegisterPage,
    static_pages::{AboutPage, PrivacyPage, TermsPage},
    verify_email::{ResendVerificationPage, VerifyEmailPage},
};
use crate::state::cart::CartState;
use crate::state::session;
use crate::state::toast::ToastState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, cart, and toast contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(session::start());
    let cart = RwSignal::new(CartState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(cart);
    provide_context(toasts);

    // Browser only: restore the persisted session, then keep it fresh.
    Effect::new(move || {
        leptos::task::spawn_local(session::restore(auth));
        session::spawn_refresh_loop(auth);
    });

    // The first run loads the saved cart; later runs persist edits.
    let cart_loaded = StoredValue::new(false);
    Effect::new(move || {
        let snapshot = cart.get();
        if cart_loaded.get_value() {
            storage::save_json(storage::CART_KEY, &snapshot);
        } else {
            cart_loaded.set_value(true);
            if let Some(saved) = storage::load_json::<CartState>(storage::CART_KEY) {
                cart.set(saved);
            }
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/guestpost.css"/>
        <Title text="GuestPost Marketplace"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("blog") view=BlogIndexPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("terms") view=TermsPage/>
                <Route path=StaticSegment("privacy") view=PrivacyPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("resend-verification") view=ResendVerificationPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("checkout") view=CheckoutPage/>
                <Route path=(StaticSegment("checkout"), StaticSegment("success")) view=CheckoutSuccessPage/>

                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardOverviewPage/>
                    <Route path=StaticSegment("orders") view=MyOrdersPage/>
                    <Route path=StaticSegment("funds") view=FundsPage/>
                    <Route path=StaticSegment("invoices") view=InvoicesPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>

                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminOverviewPage/>
                    <Route path=StaticSegment("orders") view=AdminOrdersPage/>
                    <Route path=(StaticSegment("orders"), ParamSegment("id")) view=AdminOrderDetailPage/>
                    <Route path=StaticSegment("users") view=AdminUsersPage/>
                    <Route path=StaticSegment("payments") view=AdminPaymentsPage/>
                    <Route path=StaticSegment("fund-requests") view=AdminFundRequestsPage/>
                    <Route path=StaticSegment("blog") view=AdminBlogPage/>
                </ParentRoute>
            </Routes>
        </Router>

        <ToastHost/>
    }
}
