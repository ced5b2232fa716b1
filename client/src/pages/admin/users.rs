//! User accounts: role changes and removal.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crudview::{CellDisplay, ColumnSchema, RowActions, TableConfig};
use leptos::prelude::*;

use super::{AdminHeader, AdminLayout};
use crate::components::data_table::DataTable;
use crate::components::role_badge::role_badge;
use crate::net::types::{Role, User};
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::{AppStore, use_store};
use crate::util::format::locale_date;

/// Admins are demoted to student; everyone else is promoted to admin.
pub(crate) fn toggled_role(role: Role) -> Role {
    if role == Role::Admin { Role::Student } else { Role::Admin }
}

fn user_table(store: AppStore) -> TableConfig<User> {
    let columns = vec![
        ColumnSchema::new("name", "Name")
            .sortable()
            .render(|u: &User| CellDisplay::Avatar { name: u.name.clone(), src: u.avatar.clone() }),
        ColumnSchema::new("email", "Email").sortable(),
        ColumnSchema::new("role", "Role").sortable().render(|u: &User| {
            let (label, tone) = role_badge(u.role);
            CellDisplay::badge(label, tone)
        }),
        ColumnSchema::new("enrollments", "Enrollments").render(move |u: &User| {
            let count = store.with(|s| s.enrollments.iter().filter(|e| e.user_id == u.id).count());
            CellDisplay::text(count.to_string())
        }),
        ColumnSchema::new("createdAt", "Joined")
            .sortable()
            .render(|u: &User| CellDisplay::text(locale_date(u.created_at))),
    ];
    let actions = RowActions::default()
        .on_edit(move |u: &User| change_role(store, u))
        .on_delete(move |u: &User| delete_user(store, u));
    TableConfig::new(columns).actions(actions).paginate(10)
}

fn change_role(store: AppStore, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let id = user.id.clone();
        let role = toggled_role(user.role);
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user_role(&id, role).await {
                Ok(updated) => {
                    log::info!("user {id} is now {}", updated.role.as_str());
                    store.dispatch(Action::UpdateUser(updated));
                }
                Err(e) => {
                    crate::util::dialog::alert("Failed to update user role. Please try again.");
                    store.fail(e);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (store, user);
}

fn delete_user(store: AppStore, user: &User) {
    if !crate::util::dialog::confirm(&format!("Are you sure you want to delete {}?", user.name)) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let id = user.id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&id).await {
                Ok(()) => store.dispatch(Action::DeleteUser(id)),
                Err(e) => {
                    crate::util::dialog::alert("Failed to delete user. Please try again.");
                    store.fail(e);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = store;
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <AdminUsers/>
        </AdminLayout>
    }
}

#[component]
fn AdminUsers() -> impl IntoView {
    let store = use_store();
    let rows = Signal::derive(move || store.with(|s| s.users.clone()));

    view! {
        <div class="admin-page">
            <AdminHeader title="User Management" subtitle="Manage user accounts and permissions"/>
            <p class="muted admin-page__hint">"Edit toggles a user between admin and student."</p>
            <DataTable config=user_table(store) rows title="All Users"/>
        </div>
    }
}
