//! Dismissible banner for the store's last error.

use leptos::prelude::*;

use crate::state::store::{Action, use_store};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_store();
    let message = move || store.with(|s| s.error.clone());
    view! {
        <Show when=move || message().is_some()>
            <div class="error-banner" role="alert">
                <span>{move || message().unwrap_or_default()}</span>
                <button class="btn btn--ghost btn--sm" on:click=move |_| store.dispatch(Action::SetError(None))>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
