//! Badge naming a user's role.

use crudview::BadgeTone;
use leptos::prelude::*;

use crate::net::types::Role;

/// Label and tone shown for a role.
pub fn role_badge(role: Role) -> (&'static str, BadgeTone) {
    match role {
        Role::Admin => ("Admin", BadgeTone::Default),
        Role::Instructor => ("Instructor", BadgeTone::Secondary),
        Role::Student => ("Student", BadgeTone::Success),
    }
}

#[component]
pub fn RoleBadge(role: Role) -> impl IntoView {
    let (label, tone) = role_badge(role);
    view! { <span class=tone.css_class()>{label}</span> }
}
