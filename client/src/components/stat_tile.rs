//! Summary tile used on both overview pages.

use leptos::prelude::*;

#[component]
pub fn StatTile(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__label">{label}</span>
            <strong class="stat-tile__value">{move || value.get()}</strong>
            {hint.map(|h| view! { <span class="stat-tile__hint">{h}</span> })}
        </div>
    }
}
