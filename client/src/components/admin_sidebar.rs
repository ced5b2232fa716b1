//! Navigation rail for admin pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

pub const ADMIN_LINKS: [(&str, &str); 6] = [
    ("Overview", "/admin"),
    ("Courses", "/admin/courses"),
    ("Blog Posts", "/admin/blog"),
    ("Users", "/admin/users"),
    ("Enrollments", "/admin/enrollments"),
    ("Comments", "/admin/comments"),
];

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    view! {
        <nav class="admin-sidebar" class:admin-sidebar--collapsed=move || ui.get().sidebar_collapsed>
            <div class="admin-sidebar__brand">
                <a href="/">"Admin Panel"</a>
                <button
                    class="btn btn--ghost btn--sm"
                    title="Collapse sidebar"
                    on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
                >
                    {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
                </button>
            </div>
            <ul class="admin-sidebar__links">
                {ADMIN_LINKS
                    .map(|(title, href)| {
                        let active = move || pathname.get() == href;
                        view! {
                            <li>
                                <a
                                    class="admin-sidebar__link"
                                    class:admin-sidebar__link--active=active
                                    href=href
                                    title=title
                                >
                                    {title}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
