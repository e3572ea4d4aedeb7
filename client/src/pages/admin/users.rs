//! User management: suspend, activate, promote, delete.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::badge::StatusBadge;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::list_view::ListView;
use crate::net::api;
use crate::net::types::{AccountStatus, User};
use crate::state::auth::AuthState;
use crate::state::confirm::ConfirmState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format::{account_badge_class, format_date, format_money};
use crate::util::remote;

/// Actions that go through the confirmation dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    MakeAdmin { id: String, email: String },
    Delete { id: String, email: String },
}

impl UserAction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::MakeAdmin { .. } => "Grant admin access?",
            Self::Delete { .. } => "Delete user?",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MakeAdmin { email, .. } => format!("{email} will get full access to the back office."),
            Self::Delete { email, .. } => format!("{email} and their account data will be removed permanently."),
        }
    }
}

/// Which row actions apply to `user`. Admins cannot act on their own account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowActions {
    pub make_admin: bool,
    pub suspend: bool,
    pub activate: bool,
    pub delete: bool,
}

pub fn row_actions(user: &User, current_user_id: Option<&str>) -> RowActions {
    let is_self = current_user_id == Some(user.id.as_str());
    let active = user.status == AccountStatus::Active;
    RowActions {
        make_admin: !is_self && !user.is_admin(),
        suspend: !is_self && active,
        activate: !is_self && !active,
        delete: !is_self,
    }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let users = RwSignal::new(ListState::<User>::default());
    let confirm = RwSignal::new(ConfirmState::<UserAction>::default());

    let reload = move || {
        remote::load_list(auth, toasts, users, "load users", |client| async move {
            api::fetch_users(&client).await
        });
    };
    Effect::new(move || reload());

    let set_status = move |id: String, suspend: bool| {
        if suspend {
            remote::mutate(
                auth,
                toasts,
                "suspend user",
                "User suspended.",
                move |client| async move { api::suspend_user(&client, &id).await },
                reload,
            );
        } else {
            remote::mutate(
                auth,
                toasts,
                "activate user",
                "User activated.",
                move |client| async move { api::activate_user(&client, &id).await },
                reload,
            );
        }
    };

    let on_confirm = Callback::new(move |()| match confirm.try_update(ConfirmState::confirm).flatten() {
        Some(UserAction::MakeAdmin { id, .. }) => remote::mutate(
            auth,
            toasts,
            "make admin",
            "Admin access granted.",
            move |client| async move { api::make_admin(&client, &id).await },
            reload,
        ),
        Some(UserAction::Delete { id, .. }) => remote::mutate(
            auth,
            toasts,
            "delete user",
            "User deleted.",
            move |client| async move { api::delete_user(&client, &id).await },
            reload,
        ),
        None => {}
    });
    let on_cancel = Callback::new(move |()| confirm.update(ConfirmState::cancel));

    view! {
        <Title text="Users | Admin"/>
        <h1>"Users"</h1>
        <ListView list=users empty="No users yet.">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Balance"</th>
                        <th>"Joined"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get().items
                        key=|user| (user.id.clone(), user.role.label(), user.status.label())
                        children=move |user| {
                            let actions = auth.with_untracked(|a| row_actions(&user, a.user.as_ref().map(|u| u.id.as_str())));
                            let id = StoredValue::new(user.id.clone());
                            let email = user.email.clone();
                            let promote = UserAction::MakeAdmin { id: user.id.clone(), email: email.clone() };
                            let remove = UserAction::Delete { id: user.id.clone(), email };
                            view! {
                                <tr>
                                    <td>{user.name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.role.label()}</td>
                                    <td>
                                        <StatusBadge class=account_badge_class(user.status) label=user.status.label()/>
                                    </td>
                                    <td>{format_money(user.balance)}</td>
                                    <td>{format_date(user.created_at.as_deref())}</td>
                                    <td class="table__actions">
                                        {actions
                                            .suspend
                                            .then(|| {
                                                view! {
                                                    <button class="btn btn--small" on:click=move |_| set_status(id.get_value(), true)>
                                                        "Suspend"
                                                    </button>
                                                }
                                            })}
                                        {actions
                                            .activate
                                            .then(|| {
                                                view! {
                                                    <button class="btn btn--small" on:click=move |_| set_status(id.get_value(), false)>
                                                        "Activate"
                                                    </button>
                                                }
                                            })}
                                        {actions
                                            .make_admin
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| confirm.update(|c| c.request(promote.clone()))
                                                    >
                                                        "Make admin"
                                                    </button>
                                                }
                                            })}
                                        {actions
                                            .delete
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--danger btn--small"
                                                        on:click=move |_| confirm.update(|c| c.request(remove.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </ListView>
        <ConfirmDialog
            open=Signal::derive(move || confirm.with(ConfirmState::is_open))
            title="Please confirm"
            message=Signal::derive(move || {
                confirm.with(|c| c.pending().map(|a| format!("{} {}", a.title(), a.message()))).unwrap_or_default()
            })
            confirm_label="Confirm"
            on_confirm=on_confirm
            on_cancel=on_cancel
        />
    }
}
