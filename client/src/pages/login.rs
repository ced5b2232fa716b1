//! Email and password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crudview::FormData;
use leptos::prelude::*;

use crate::components::dynamic_form::DynamicForm;
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::use_store;
use crate::util::forms::login_form;

/// Where to land after signing in. A full navigation reloads the store
/// from the new session.
#[cfg(any(test, feature = "hydrate"))]
fn landing_path(role: crate::net::types::Role) -> &'static str {
    match role {
        crate::net::types::Role::Admin => "/admin",
        _ => "/dashboard",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_store();
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |data: FormData| {
        busy.set(true);
        message.set(None);
        let email = data.text("email").trim().to_lowercase();
        let password = data.text("password");
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email, &password).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.email);
                    let path = landing_path(user.role);
                    store.dispatch(Action::SetUser(Some(user)));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(path);
                    }
                }
                Err(e) => {
                    message.set(Some(e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (store, email, password);
        }
    });

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="muted">"Sign in to your account to continue"</p>
                {move || message.get().map(|m| view! { <p class="auth-card__error" role="alert">{m}</p> })}
                <DynamicForm schema=login_form() on_submit loading=busy bare=true/>
                <p class="auth-card__switch">
                    <span class="muted">"Don't have an account? "</span>
                    <a href="/register">"Sign up"</a>
                </p>
                <div class="auth-card__demo muted">
                    <p>"Demo accounts:"</p>
                    <p>"Admin: john@example.com"</p>
                    <p>"Student: alice@example.com"</p>
                    <p>"Password: password123"</p>
                </div>
            </div>
        </div>
    }
}
