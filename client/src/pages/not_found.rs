use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::PublicLayout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PublicLayout>
            <section class="empty-page">
                <h1>"Page not found"</h1>
                <p>"The page you were looking for does not exist or has moved."</p>
                <A href="/" attr:class="btn btn--primary">
                    "Back to the marketplace"
                </A>
            </section>
        </PublicLayout>
    }
}
