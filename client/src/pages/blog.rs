//! Blog listing: featured post, search, category filter and sort.

use leptos::prelude::*;

use crate::components::blog_card::BlogCard;
use crate::state::store::use_store;
use crate::util::catalog::{PostFilters, PostSort, featured_post, post_categories};

const ALL_CATEGORIES: &str = "All";

#[component]
pub fn BlogPage() -> impl IntoView {
    let store = use_store();
    let filters = RwSignal::new(PostFilters::default());

    let visible = move || filters.with(|f| store.with(|s| f.apply(&s.blog_posts).into_iter().cloned().collect::<Vec<_>>()));
    let featured = move || store.with(|s| featured_post(&s.blog_posts).cloned());
    let categories = move || store.with(|s| post_categories(&s.blog_posts));
    let selected_category = move || filters.with(|f| f.category.clone().unwrap_or_else(|| ALL_CATEGORIES.to_owned()));

    view! {
        <div class="page blog">
            <header class="page__header">
                <h1>"Blog"</h1>
                <p class="muted">"Insights, tutorials, and stories from our community of learners and educators."</p>
            </header>

            {move || featured().map(|post| view! {
                <section class="section">
                    <h2>"Featured Post"</h2>
                    <BlogCard post featured=true/>
                </section>
            })}

            <div class="blog__controls">
                <input
                    class="input"
                    type="search"
                    placeholder="Search posts..."
                    prop:value=move || filters.with(|f| f.search.clone())
                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="input"
                    aria-label="Category"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.category = (value != ALL_CATEGORIES).then_some(value));
                    }
                >
                    <option value=ALL_CATEGORIES selected=move || selected_category() == ALL_CATEGORIES>"All Categories"</option>
                    {move || {
                        categories()
                            .into_iter()
                            .map(|c| {
                                let value = c.clone();
                                view! { <option value=value.clone() selected=move || selected_category() == value>{c}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <select
                    class="input"
                    aria-label="Sort by"
                    on:change=move |ev| filters.update(|f| f.sort = PostSort::parse(&event_target_value(&ev)))
                >
                    {PostSort::ALL
                        .map(|sort| view! {
                            <option value=sort.as_str() selected=move || filters.with(|f| f.sort == sort)>{sort.label()}</option>
                        })
                        .collect_view()}
                </select>
            </div>

            <p class="muted">
                {move || {
                    let n = visible().len();
                    format!("{n} post{} found", if n == 1 { "" } else { "s" })
                }}
            </p>

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="muted blog__empty">"No posts found matching your criteria"</p> }
            >
                <div class="post-grid">
                    {move || visible().into_iter().map(|post| view! { <BlogCard post/> }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
