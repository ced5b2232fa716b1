//! Account registration.

use crudview::FormData;
use leptos::prelude::*;

use crate::components::dynamic_form::DynamicForm;
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::use_store;
use crate::util::forms::{register_form, register_request};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = use_store();
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |data: FormData| {
        let request = register_request(&data);
        busy.set(true);
        message.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(user) => {
                    store.dispatch(Action::SetUser(Some(user)));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
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
            let _ = (store, request);
        }
    });

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>"Create an Account"</h1>
                <p class="muted">"Join LearnHub and start learning today"</p>
                {move || message.get().map(|m| view! { <p class="auth-card__error" role="alert">{m}</p> })}
                <DynamicForm schema=register_form() on_submit loading=busy bare=true/>
                <p class="auth-card__switch">
                    <span class="muted">"Already have an account? "</span>
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
