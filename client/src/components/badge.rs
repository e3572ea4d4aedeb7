use leptos::prelude::*;

/// Status pill. `class` comes from the `util::format::*_badge_class` helpers.
#[component]
pub fn StatusBadge(class: &'static str, label: &'static str) -> impl IntoView {
    view! { <span class=class>{label}</span> }
}
