//! Public blog index and post pages.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::layout::PublicLayout;
use crate::components::list_view::ListView;
use crate::net::api;
use crate::net::types::BlogPost;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;
use crate::state::session;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, truncate};
use crate::util::markdown::render_markdown;
use crate::util::remote;

const EXCERPT_LEN: usize = 220;

/// Published posts only, newest first. Dates are ISO-8601 so they sort as text.
pub fn published_posts(posts: &[BlogPost]) -> Vec<BlogPost> {
    let mut out: Vec<BlogPost> = posts.iter().filter(|p| p.published).cloned().collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

/// The post's excerpt, or the start of its body.
pub fn summary(post: &BlogPost) -> String {
    match post.excerpt.as_deref().map(str::trim) {
        Some(excerpt) if !excerpt.is_empty() => excerpt.to_owned(),
        _ => truncate(post.content.trim(), EXCERPT_LEN),
    }
}

#[component]
pub fn BlogIndexPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let posts = RwSignal::new(ListState::<BlogPost>::default());

    Effect::new(move || {
        remote::load_list(auth, toasts, posts, "load blog posts", |client| async move {
            api::fetch_blog_posts(&client).await.map(|all| published_posts(&all))
        });
    });

    view! {
        <Title text="Blog | GuestPost Marketplace"/>
        <PublicLayout>
            <h1>"Blog"</h1>
            <ListView list=posts empty="No posts yet. Check back soon.">
                <div class="post-list">
                    <For
                        each=move || posts.get().items
                        key=|post| post.id.clone()
                        children=|post| {
                            let href = format!("/blog/{}", post.slug);
                            let date = format_date(post.created_at.as_deref());
                            let blurb = summary(&post);
                            view! {
                                <article class="post-card">
                                    <h2>
                                        <A href=href>{post.title}</A>
                                    </h2>
                                    <time class="post-card__date">{date}</time>
                                    <p>{blurb}</p>
                                </article>
                            }
                        }
                    />
                </div>
            </ListView>
        </PublicLayout>
    }
}

#[derive(Clone, Debug, PartialEq)]
enum PostView {
    Loading,
    Missing(String),
    Ready(BlogPost),
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let post = RwSignal::new(PostView::Loading);

    Effect::new(move || {
        let Some(slug) = params.read().get("slug") else {
            post.set(PostView::Missing("No post was requested.".to_owned()));
            return;
        };
        post.set(PostView::Loading);
        let client = session::api_client(auth);
        leptos::task::spawn_local(async move {
            match api::fetch_blog_post(&client, &slug).await {
                Ok(found) => post.set(PostView::Ready(found)),
                Err(err) => {
                    session::report_failure(auth, toasts, "load blog post", &err);
                    post.set(PostView::Missing(err.user_message()));
                }
            }
        });
    });

    view! {
        <PublicLayout>
            {move || match post.get() {
                PostView::Loading => view! { <span class="spinner"></span> }.into_any(),
                PostView::Missing(message) => view! {
                    <section class="empty-page">
                        <h1>"Post not found"</h1>
                        <p>{message}</p>
                        <A href="/blog">"All posts"</A>
                    </section>
                }
                .into_any(),
                PostView::Ready(found) => view! {
                    <Title text=format!("{} | GuestPost Marketplace", found.title)/>
                    <article class="prose">
                        <h1>{found.title.clone()}</h1>
                        <time class="post-card__date">{format_date(found.created_at.as_deref())}</time>
                        <div class="prose__body" inner_html=render_markdown(&found.content)></div>
                        <A href="/blog">"← All posts"</A>
                    </article>
                }
                .into_any(),
            }}
        </PublicLayout>
    }
}
