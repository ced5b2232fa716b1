//! Create or edit a blog post.

use crudview::FormData;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::{AdminHeader, AdminLayout};
use crate::components::dynamic_form::DynamicForm;
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::use_store;
use crate::util::forms::{post_draft, post_form, post_values};

#[component]
pub fn PostEditorPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <PostEditor/>
        </AdminLayout>
    }
}

/// Waits for the initial load so an edit route can find its record.
#[component]
fn PostEditor() -> impl IntoView {
    let store = use_store();
    move || {
        if store.with(|s| s.loading) {
            view! { <p class="muted">"Loading..."</p> }.into_any()
        } else {
            view! { <PostForm/> }.into_any()
        }
    }
}

#[component]
fn PostForm() -> impl IntoView {
    let store = use_store();
    let nav = super::Navigator::new();
    let busy = RwSignal::new(false);
    let id = use_params_map().read_untracked().get("id");

    let existing = id
        .as_deref()
        .and_then(|id| store.get_untracked().blog_posts.into_iter().find(|p| p.id == id));
    if id.is_some() && existing.is_none() {
        return view! {
            <div class="admin-page">
                <AdminHeader title="Post Not Found"/>
                <a class="btn btn--outline" href="/admin/blog">"Back to Blog"</a>
            </div>
        }
        .into_any();
    }

    let mut schema = post_form();
    if existing.is_some() {
        schema.title = "Edit Post".to_owned();
        schema.submit_text = "Save Changes".to_owned();
    }
    let initial = existing.as_ref().map(post_values).unwrap_or_default();

    let on_submit = Callback::new(move |data: FormData| {
        if store.current_user().is_none() {
            return;
        }
        let draft = post_draft(&data);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let id = id.clone();
            leptos::task::spawn_local(async move {
                let saved = match &id {
                    Some(id) => crate::net::api::update_post(id, &draft).await,
                    None => crate::net::api::create_post(&draft).await,
                };
                match saved {
                    Ok(post) => {
                        log::info!("saved post {}", post.id);
                        store.dispatch(if id.is_some() { Action::UpdateBlogPost(post) } else { Action::AddBlogPost(post) });
                        nav.go("/admin/blog");
                    }
                    Err(e) => {
                        crate::util::dialog::alert("Failed to save post. Please try again.");
                        store.fail(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, &id, nav);
    });

    view! {
        <div class="admin-page admin-page--narrow">
            <a class="btn btn--ghost btn--sm" href="/admin/blog">"← Back to Blog"</a>
            <DynamicForm schema initial on_submit loading=busy/>
        </div>
    }
    .into_any()
}
