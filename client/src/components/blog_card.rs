//! Listing card for a blog post, in regular and featured layouts.

use leptos::prelude::*;

use crate::components::user_avatar::{AvatarSize, UserAvatar};
use crate::net::types::BlogPost;
use crate::util::format::long_date;

#[component]
pub fn BlogCard(post: BlogPost, #[prop(optional)] featured: bool) -> impl IntoView {
    let href = format!("/blog/{}", post.id);
    let date = long_date(post.published_at);
    view! {
        <article class="card blog-card" class:blog-card--featured=featured>
            <img class="blog-card__thumb" src=post.thumbnail.clone() alt=post.title.clone()/>
            <div class="card__content blog-card__body">
                <div class="blog-card__meta">
                    <span class="badge badge--secondary">{post.category.clone()}</span>
                    <span class="muted">{date}</span>
                </div>
                {if featured {
                    view! { <h2 class="blog-card__title">{post.title.clone()}</h2> }.into_any()
                } else {
                    view! { <h3 class="blog-card__title">{post.title.clone()}</h3> }.into_any()
                }}
                <p class="muted blog-card__excerpt">{post.excerpt.clone()}</p>
                <div class="blog-card__counts muted">
                    <span title="Views">"👁 " {post.views}</span>
                    <span title="Likes">"♥ " {post.likes}</span>
                </div>
                <div class="blog-card__footer">
                    <span class="blog-card__author">
                        <UserAvatar name=post.author.clone() size=AvatarSize::Sm/>
                        {post.author.clone()}
                    </span>
                    <a class=if featured { "btn btn--primary" } else { "btn btn--ghost" } href=href>"Read More →"</a>
                </div>
            </div>
        </article>
    }
}
