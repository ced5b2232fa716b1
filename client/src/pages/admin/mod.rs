//! Admin console: layout shell plus one page per managed collection.
//!
//! ARCHITECTURE
//! ============
//! Every admin route renders inside `AdminLayout`, which gates on the admin
//! role and adds the sidebar. Table pages are thin: a `TableConfig` built
//! from column renderers and row handlers, fed to `DataTable` with a signal
//! over the matching store collection.

pub mod blog;
pub mod comments;
pub mod course_editor;
pub mod courses;
pub mod enrollments;
pub mod overview;
pub mod post_editor;
pub mod users;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin_sidebar::AdminSidebar;
use crate::components::require_role::RequireRole;
use crate::net::types::Role;

#[component]
pub fn AdminLayout(children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    view! {
        <RequireRole role=Role::Admin>
            <div class="admin">
                <AdminSidebar/>
                <main class="admin__content">{children.with_value(|c| c())}</main>
            </div>
        </RequireRole>
    }
}

/// Router navigation that row handlers and save callbacks can capture.
///
/// The mounted `AppStore` survives the route change, so a dispatch made just
/// before `go` is what the next page renders.
#[derive(Clone, Copy)]
pub(crate) struct Navigator(StoredValue<Box<dyn Fn(&str)>, LocalStorage>);

impl Navigator {
    /// Must be created inside the `Router`.
    pub(crate) fn new() -> Self {
        let navigate = use_navigate();
        Self(StoredValue::new_local(Box::new(move |path: &str| navigate(path, NavigateOptions::default()))))
    }

    pub(crate) fn go(self, path: &str) {
        self.0.with_value(|navigate| navigate(path));
    }
}

/// Page heading with an optional subtitle and trailing actions.
#[component]
pub(crate) fn AdminHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="admin__header">
            <div>
                <h1>{title}</h1>
                {subtitle.map(|s| view! { <p class="muted">{s}</p> })}
            </div>
            <div class="admin__header-actions">{children.map(|c| c())}</div>
        </div>
    }
}
