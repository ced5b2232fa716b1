//! Single blog post with rendered body, tags, related posts and comments.
//!
//! Opening the page fetches the post from the server, which counts a view,
//! and stores the returned copy so the counter on screen is current.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_section::CommentSection;
use crate::components::user_avatar::{AvatarSize, UserAvatar};
use crate::net::types::BlogPost;
use crate::state::store::{Action, AppStore, use_store};
use crate::util::catalog::related_posts;
use crate::util::format::{long_date, markdown_html, reading_minutes};

const RELATED_LIMIT: usize = 3;

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let post_id = move || params.read().get("id").unwrap_or_default();

    Effect::new(move || {
        let id = post_id();
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_post(&id).await {
                Ok(post) => store.dispatch(Action::UpdateBlogPost(post)),
                Err(e) => log::warn!("post {id} refresh failed: {e}"),
            }
        });
    });

    let post = move || store.with(|s| s.blog_posts.iter().find(|p| p.id == post_id() && p.is_published).cloned());

    move || match post() {
        Some(post) => post_view(store, post).into_any(),
        None => view! {
            <div class="page page--centered">
                <h1>"Post Not Found"</h1>
                <p class="muted">"The blog post you're looking for doesn't exist."</p>
                <a class="btn btn--primary" href="/blog">"Back to Blog"</a>
            </div>
        }
        .into_any(),
    }
}

fn post_view(store: AppStore, post: BlogPost) -> impl IntoView {
    let related = store.with(|s| related_posts(&s.blog_posts, &post, RELATED_LIMIT).into_iter().cloned().collect::<Vec<_>>());
    let body = markdown_html(&post.content);
    let minutes = reading_minutes(&post.content);
    let liked = StoredValue::new(post.clone());

    let on_like = move |_| {
        let mut next = liked.get_value();
        next.likes += 1;
        liked.set_value(next.clone());
        store.dispatch(Action::UpdateBlogPost(next));
    };

    view! {
        <div class="page blog-post">
            <a class="btn btn--ghost" href="/blog">"← Back to Blog"</a>
            <article class="blog-post__article">
                <div class="blog-post__meta">
                    <span class="badge badge--secondary">{post.category.clone()}</span>
                    <span class="muted">{long_date(post.published_at)}</span>
                </div>
                <h1>{post.title.clone()}</h1>
                <p class="lead muted">{post.excerpt.clone()}</p>
                <div class="blog-post__byline">
                    <UserAvatar name=post.author.clone() size=AvatarSize::Md/>
                    <div>
                        <p class="blog-post__author">{post.author.clone()}</p>
                        <p class="muted">"Author"</p>
                    </div>
                    <span class="muted">{format!("👁 {}", post.views)}</span>
                    <span class="muted">{format!("♥ {}", post.likes)}</span>
                    <span class="muted">{format!("{minutes} min read")}</span>
                </div>
                <img class="blog-post__image" src=post.thumbnail.clone() alt=post.title.clone()/>
                <div class="blog-post__content prose" inner_html=body></div>

                {(!post.tags.is_empty()).then(|| view! {
                    <h3>"Tags"</h3>
                    <div class="blog-post__tags">
                        {post.tags.iter().map(|t| view! { <span class="badge badge--outline">{format!("#{t}")}</span> }).collect_view()}
                    </div>
                })}

                <div class="blog-post__actions">
                    <button class="btn btn--outline" on:click=on_like>{format!("♥ Like ({})", post.likes)}</button>
                </div>
            </article>

            <aside class="blog-post__aside">
                <div class="card">
                    <div class="card__content">
                        <h3>{post.author.clone()}</h3>
                        <p class="muted">"Writes about " {post.category.clone()} " for the LearnHub community."</p>
                    </div>
                </div>
                {(!related.is_empty()).then(|| view! {
                    <div class="card">
                        <div class="card__header"><h3 class="card__title">"Related Posts"</h3></div>
                        <div class="card__content">
                            {related
                                .into_iter()
                                .map(|r| view! {
                                    <a class="related" href=format!("/blog/{}", r.id)>
                                        <h4>{r.title}</h4>
                                        <p class="muted">{long_date(r.published_at)}</p>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                })}
            </aside>

            <CommentSection post_id=post.id.clone()/>
        </div>
    }
}
