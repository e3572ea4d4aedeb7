//! Blog authoring: one form for create and edit, list with delete.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::list_view::ListView;
use crate::net::api;
use crate::net::types::BlogPost;
use crate::state::auth::AuthState;
use crate::state::confirm::ConfirmState;
use crate::state::listing::ListState;
use crate::state::toast::ToastState;
use crate::util::format::format_date;
use crate::util::remote;
use crate::util::validate::{slugify, validate_blog_draft};

#[derive(Clone, Copy)]
struct Draft {
    editing: RwSignal<Option<String>>,
    title: RwSignal<String>,
    slug: RwSignal<String>,
    excerpt: RwSignal<String>,
    content: RwSignal<String>,
    published: RwSignal<bool>,
}

impl Draft {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            slug: RwSignal::new(String::new()),
            excerpt: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            published: RwSignal::new(false),
        }
    }

    fn load(self, post: &BlogPost) {
        self.editing.set(Some(post.id.clone()));
        self.title.set(post.title.clone());
        self.slug.set(post.slug.clone());
        self.excerpt.set(post.excerpt.clone().unwrap_or_default());
        self.content.set(post.content.clone());
        self.published.set(post.published);
    }

    fn reset(self) {
        self.editing.set(None);
        self.title.set(String::new());
        self.slug.set(String::new());
        self.excerpt.set(String::new());
        self.content.set(String::new());
        self.published.set(false);
    }
}

#[component]
pub fn AdminBlogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let posts = RwSignal::new(ListState::<BlogPost>::default());
    let confirm = RwSignal::new(ConfirmState::<BlogPost>::default());
    let draft = Draft::new();
    let error = RwSignal::new(None::<String>);

    let reload = move || {
        remote::load_list(auth, toasts, posts, "load blog posts", |client| async move {
            api::fetch_blog_posts(&client).await
        });
    };
    Effect::new(move || reload());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let post = match validate_blog_draft(
            &draft.title.get_untracked(),
            &draft.slug.get_untracked(),
            &draft.content.get_untracked(),
            &draft.excerpt.get_untracked(),
            draft.published.get_untracked(),
        ) {
            Ok(post) => post,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        let on_saved = move || {
            draft.reset();
            reload();
        };
        match draft.editing.get_untracked() {
            Some(id) => remote::mutate(
                auth,
                toasts,
                "update blog post",
                "Post updated.",
                move |client| async move { api::update_blog_post(&client, &id, &post).await },
                on_saved,
            ),
            None => remote::mutate(
                auth,
                toasts,
                "create blog post",
                "Post created.",
                move |client| async move { api::create_blog_post(&client, &post).await },
                on_saved,
            ),
        }
    };

    let on_confirm = Callback::new(move |()| {
        let Some(post) = confirm.try_update(ConfirmState::confirm).flatten() else {
            return;
        };
        if draft.editing.get_untracked().as_deref() == Some(post.id.as_str()) {
            draft.reset();
        }
        remote::mutate(
            auth,
            toasts,
            "delete blog post",
            "Post deleted.",
            move |client| async move { api::delete_blog_post(&client, &post.id).await },
            reload,
        );
    });
    let on_cancel = Callback::new(move |()| confirm.update(ConfirmState::cancel));

    view! {
        <Title text="Blog | Admin"/>
        <h1>"Blog"</h1>
        <section class="card">
            <h2>{move || if draft.editing.get().is_some() { "Edit post" } else { "New post" }}</h2>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Title"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || draft.title.get()
                        on:input=move |ev| draft.title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Slug"
                    <input
                        class="input"
                        type="text"
                        placeholder=move || slugify(&draft.title.get())
                        prop:value=move || draft.slug.get()
                        on:input=move |ev| draft.slug.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Excerpt"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || draft.excerpt.get()
                        on:input=move |ev| draft.excerpt.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Content (Markdown)"
                    <textarea
                        class="input input--code"
                        rows="14"
                        prop:value=move || draft.content.get()
                        on:input=move |ev| draft.content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.published.get()
                        on:change=move |ev| draft.published.set(event_target_checked(&ev))
                    />
                    "Published"
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="form__actions">
                    <Show when=move || draft.editing.get().is_some()>
                        <button class="btn" type="button" on:click=move |_| draft.reset()>
                            "Cancel edit"
                        </button>
                    </Show>
                    <button class="btn btn--primary" type="submit">
                        {move || if draft.editing.get().is_some() { "Save changes" } else { "Create post" }}
                    </button>
                </div>
            </form>
        </section>

        <ListView list=posts empty="No posts yet.">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Slug"</th>
                        <th>"State"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || posts.get().items
                        key=|post| (post.id.clone(), post.title.clone(), post.slug.clone(), post.published)
                        children=move |post| {
                            let (class, label) =
                                if post.published { ("badge badge--success", "Published") } else { ("badge badge--muted", "Draft") };
                            let for_edit = post.clone();
                            let for_delete = post.clone();
                            view! {
                                <tr>
                                    <td>{post.title.clone()}</td>
                                    <td>
                                        <a href=format!("/blog/{}", post.slug)>{post.slug.clone()}</a>
                                    </td>
                                    <td>
                                        <span class=class>{label}</span>
                                    </td>
                                    <td>{format_date(post.created_at.as_deref())}</td>
                                    <td class="table__actions">
                                        <button class="btn btn--small" on:click=move |_| draft.load(&for_edit)>
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--danger btn--small"
                                            on:click=move |_| confirm.update(|c| c.request(for_delete.clone()))
                                        >
                                            "Delete"
                                        </button>
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
            title="Delete post?"
            message=Signal::derive(move || {
                confirm.with(|c| c.pending().map(|p| format!("\"{}\" will be removed permanently.", p.title))).unwrap_or_default()
            })
            on_confirm=on_confirm
            on_cancel=on_cancel
        />
    }
}
