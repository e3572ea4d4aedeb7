//! Shared rendering for list pages: loading, failure, empty, and ready.

use leptos::prelude::*;

use crate::state::listing::{ListState, ListStatus};

/// Chooses what a list page shows from its [`ListState`]. `children` renders
/// the table and only runs once rows are present.
#[component]
pub fn ListView<T>(list: RwSignal<ListState<T>>, empty: &'static str, children: ChildrenFn) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let status = Memo::new(move |_| list.with(ListState::status));

    move || match status.get() {
        ListStatus::Loading => view! {
            <div class="list-state list-state--loading" aria-busy="true">
                <span class="spinner"></span>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        ListStatus::Failed(message) => view! {
            <div class="list-state list-state--error" role="alert">
                <p class="list-state__title">"Could not load this list."</p>
                <p class="list-state__detail">{message}</p>
            </div>
        }
        .into_any(),
        ListStatus::Empty => view! {
            <div class="list-state list-state--empty">
                <p>{empty}</p>
            </div>
        }
        .into_any(),
        ListStatus::Ready => children().into_any(),
    }
}
