//! Blog post management.

use crudview::{BadgeTone, CellDisplay, ColumnSchema, RowActions, TableConfig};
use leptos::prelude::*;

use super::{AdminHeader, AdminLayout, Navigator};
use crate::components::data_table::DataTable;
use crate::net::types::BlogPost;
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::{AppStore, use_store};
use crate::util::format::locale_date;

fn post_table(store: AppStore, nav: Navigator) -> TableConfig<BlogPost> {
    let columns = vec![
        ColumnSchema::new("thumbnail", "Image")
            .render(|p: &BlogPost| CellDisplay::Image { src: p.thumbnail.clone(), alt: p.title.clone() }),
        ColumnSchema::new("title", "Title").sortable(),
        ColumnSchema::new("author", "Author").sortable(),
        ColumnSchema::new("category", "Category")
            .sortable()
            .render(|p: &BlogPost| CellDisplay::badge(p.category.clone(), BadgeTone::Secondary)),
        ColumnSchema::new("isPublished", "Status").sortable().render(|p: &BlogPost| {
            if p.is_published {
                CellDisplay::badge("Published", BadgeTone::Default)
            } else {
                CellDisplay::badge("Draft", BadgeTone::Secondary)
            }
        }),
        ColumnSchema::new("views", "Views").sortable(),
        ColumnSchema::new("likes", "Likes").sortable(),
        ColumnSchema::new("publishedAt", "Published")
            .sortable()
            .render(|p: &BlogPost| CellDisplay::text(locale_date(p.published_at))),
    ];
    let actions = RowActions::default()
        .on_view(move |p: &BlogPost| nav.go(&format!("/blog/{}", p.id)))
        .on_edit(move |p: &BlogPost| nav.go(&format!("/admin/blog/{}/edit", p.id)))
        .on_delete(move |p: &BlogPost| delete_post(store, p));
    TableConfig::new(columns).actions(actions).paginate(10)
}

fn delete_post(store: AppStore, post: &BlogPost) {
    if !crate::util::dialog::confirm(&format!("Are you sure you want to delete \"{}\"?", post.title)) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let id = post.id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_post(&id).await {
                Ok(()) => store.dispatch(Action::DeleteBlogPost(id)),
                Err(e) => {
                    log::warn!("delete post {id} failed: {e}");
                    crate::util::dialog::alert("Failed to delete post. Please try again.");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = store;
}

#[component]
pub fn AdminBlogPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <AdminBlog/>
        </AdminLayout>
    }
}

#[component]
fn AdminBlog() -> impl IntoView {
    let store = use_store();
    let nav = Navigator::new();
    let rows = Signal::derive(move || store.with(|s| s.blog_posts.clone()));

    view! {
        <div class="admin-page">
            <AdminHeader title="Blog Management" subtitle="Create and manage blog posts">
                <a class="btn btn--primary" href="/admin/blog/new">"+ New Post"</a>
            </AdminHeader>
            <DataTable config=post_table(store, nav) rows title="All Blog Posts"/>
        </div>
    }
}
