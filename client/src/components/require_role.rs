//! Wrapper that renders its children only for permitted users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::store::use_store;
use crate::util::auth::{Access, access_for, install_unauth_redirect};

/// Signed-out visitors are sent to `/login`; signed-in users without the
/// required role see "Access Denied".
#[component]
pub fn RequireRole(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();
    install_unauth_redirect(store, move |path, opts| navigate(path, opts));

    let access = move || store.with(|s| access_for(s.user.as_ref(), s.loading, role));

    move || match access() {
        Access::Granted => children().into_any(),
        Access::Denied => view! {
            <div class="page page--centered">
                <h1 class="text-danger">"Access Denied"</h1>
                <p class="muted">"You don't have permission to access this page."</p>
            </div>
        }
        .into_any(),
        Access::Pending | Access::SignedOut => view! {
            <div class="page page--centered">
                <p class="muted">{move || if store.with(|s| s.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
            </div>
        }
        .into_any(),
    }
}
