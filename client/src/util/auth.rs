//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated pages and the nav bar decide what to show from the signed-in user
//! and the store's loading flag. The decision is a pure function so every
//! page applies the same rule.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{Role, User};
use crate::state::store::AppStore;

/// Outcome of checking a page's role requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session restore still in flight.
    Pending,
    SignedOut,
    Denied,
    Granted,
}

/// Decide access for `user`. A required role must match exactly.
#[must_use]
pub fn access_for(user: Option<&User>, loading: bool, required: Option<Role>) -> Access {
    match user {
        None if loading => Access::Pending,
        None => Access::SignedOut,
        Some(user) => match required {
            Some(role) if user.role != role => Access::Denied,
            _ => Access::Granted,
        },
    }
}

/// Whether `user` may moderate a record owned by `owner_id`.
#[must_use]
pub fn can_moderate(user: Option<&User>, owner_id: &str) -> bool {
    user.is_some_and(|u| u.role == Role::Admin || u.id == owner_id)
}

/// Redirect to `/login` whenever loading has settled and no user is present.
pub fn install_unauth_redirect<F>(store: AppStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let access = store.with(|s| access_for(s.user.as_ref(), s.loading, None));
        if access == Access::SignedOut {
            navigate("/login", NavigateOptions::default());
        }
    });
}
