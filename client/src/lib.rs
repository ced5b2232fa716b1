//! # client
//!
//! Leptos + WASM frontend for LearnHub, a course catalog and blog with an
//! admin console.
//!
//! This crate contains pages, components, the application store, REST
//! helpers and wire types. Generic form and table mechanics come from the
//! `crudview` crate; the components here only render them.

#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
