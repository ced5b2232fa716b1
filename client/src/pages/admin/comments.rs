//! Comment moderation.

use crudview::{CellDisplay, ColumnSchema, RowActions, TableConfig};
use leptos::prelude::*;

use super::{AdminHeader, AdminLayout, Navigator};
use crate::components::data_table::DataTable;
use crate::net::types::Comment;
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::{AppStore, use_store};
use crate::util::format::{locale_date, truncate};

const CONTENT_PREVIEW: usize = 80;

fn comment_table(store: AppStore, nav: Navigator) -> TableConfig<Comment> {
    let columns = vec![
        ColumnSchema::new("userName", "Author")
            .sortable()
            .render(|c: &Comment| CellDisplay::Avatar { name: c.user_name.clone(), src: c.user_avatar.clone() }),
        ColumnSchema::new("content", "Comment").render(|c: &Comment| CellDisplay::text(truncate(&c.content, CONTENT_PREVIEW))),
        ColumnSchema::new("postId", "Post").sortable().render(move |c: &Comment| {
            let title = store.with(|s| s.blog_posts.iter().find(|p| p.id == c.post_id).map(|p| p.title.clone()));
            CellDisplay::text(title.unwrap_or_else(|| "Unknown Post".to_owned()))
        }),
        ColumnSchema::new("createdAt", "Posted")
            .sortable()
            .render(|c: &Comment| CellDisplay::text(locale_date(c.created_at))),
    ];
    let actions = RowActions::default()
        .on_view(move |c: &Comment| nav.go(&format!("/blog/{}", c.post_id)))
        .on_delete(move |c: &Comment| delete_comment(store, c));
    TableConfig::new(columns).actions(actions).paginate(10)
}

fn delete_comment(store: AppStore, comment: &Comment) {
    if !crate::util::dialog::confirm("Are you sure you want to delete this comment?") {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let id = comment.id.clone();
        let post_id = comment.post_id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_comment(&post_id, &id).await {
                Ok(()) => store.dispatch(Action::DeleteComment(id)),
                Err(e) => {
                    crate::util::dialog::alert("Failed to delete comment. Please try again.");
                    store.fail(e);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = store;
}

#[component]
pub fn AdminCommentsPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <AdminComments/>
        </AdminLayout>
    }
}

#[component]
fn AdminComments() -> impl IntoView {
    let store = use_store();
    let nav = Navigator::new();
    let rows = Signal::derive(move || store.with(|s| s.comments.clone()));

    view! {
        <div class="admin-page">
            <AdminHeader title="Comment Management" subtitle="Moderate and manage blog comments"/>
            <DataTable config=comment_table(store, nav) rows title="All Comments"/>
        </div>
    }
}
