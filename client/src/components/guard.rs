//! Route guards for the buyer dashboard and the admin back office.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::guard::{self, Access, GuardState};

/// Renders `children` only once the session satisfies `access`.
///
/// While the session is still being restored a placeholder is shown. When the
/// check fails the visitor is sent to the matching login route and nothing
/// else renders. There is no retry and no timeout; the guard follows the
/// auth context's `loading` flag.
#[component]
pub fn RequireAccess(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let state = Memo::new(move |_| auth.with(|a| guard::evaluate(a, access)));

    Effect::new(move || {
        if state.get() == GuardState::Unauthorized {
            navigate(access.login_route(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match state.get() {
        GuardState::Checking => view! {
            <div class="guard-checking" aria-busy="true">
                <span class="spinner"></span>
                <p>"Checking your session..."</p>
            </div>
        }
        .into_any(),
        GuardState::Authorized => children().into_any(),
        GuardState::Unauthorized => ().into_any(),
    }
}

/// Admin-only content.
#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    RequireAccess(RequireAccessProps::builder().access(Access::Admin).children(children).build())
}

/// Any signed-in visitor.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    RequireAccess(RequireAccessProps::builder().access(Access::SignedIn).children(children).build())
}
