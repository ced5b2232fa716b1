//! Top navigation bar.

use leptos::prelude::*;

use crate::components::role_badge::RoleBadge;
use crate::components::user_avatar::{AvatarSize, UserAvatar};
use crate::net::types::Role;
use crate::state::store::use_store;
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_store();
    let ui = expect_context::<RwSignal<UiState>>();
    let is_admin = move || store.with(|s| s.user.as_ref().is_some_and(|u| u.role == Role::Admin));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            store.dispatch(Action::SetUser(None));
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/");
            }
        });
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"LearnHub"</a>
            <nav class="navbar__links">
                <a href="/courses">"Courses"</a>
                <a href="/blog">"Blog"</a>
                <Show when=move || store.with(|s| s.user.is_some())>
                    <a href="/dashboard">"Dashboard"</a>
                </Show>
                <Show when=is_admin>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
            <span class="navbar__spacer"></span>
            <button
                class="btn btn--ghost navbar__theme"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get_untracked().theme);
                    ui.update(|u| u.theme = next);
                }
            >
                {move || ui.get().theme.toggle_icon()}
            </button>
            {move || match store.current_user() {
                Some(user) => view! {
                    <div class="navbar__user">
                        <a class="navbar__profile" href="/profile">
                            <UserAvatar name=user.name.clone() src=user.avatar.clone().unwrap_or_default() size=AvatarSize::Sm/>
                            <span>{user.name.clone()}</span>
                        </a>
                        <RoleBadge role=user.role/>
                        <button class="btn btn--outline btn--sm" on:click=on_logout>"Log out"</button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="navbar__user">
                        <a class="btn btn--ghost btn--sm" href="/login">"Sign In"</a>
                        <a class="btn btn--primary btn--sm" href="/register">"Sign Up"</a>
                    </div>
                }
                .into_any(),
            }}
        </header>
    }
}
