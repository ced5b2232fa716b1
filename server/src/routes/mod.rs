//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST API and stitches it together with Leptos SSR
//! rendering under a single Axum router. When no Leptos configuration is
//! available the server runs API-only and unknown paths answer with a JSON
//! 404.

pub mod auth;
pub mod blog;
pub mod comments;
pub mod courses;
pub mod enrollments;
pub mod error;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use error::ApiError;

/// REST endpoints under `/api` plus the health probe.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/profile", get(auth::profile).put(auth::update_profile))
        .route("/api/users", get(users::list_users))
        .route("/api/users/{id}", put(users::update_user).delete(users::delete_user))
        .route("/api/courses", get(courses::list_courses).post(courses::create_course))
        .route(
            "/api/courses/{id}",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route("/api/courses/{id}/enroll", post(courses::enroll))
        .route("/api/enrollments", get(enrollments::list_enrollments))
        .route(
            "/api/enrollments/{id}",
            put(enrollments::update_enrollment).delete(enrollments::delete_enrollment),
        )
        .route("/api/blog", get(blog::list_posts).post(blog::create_post))
        .route(
            "/api/blog/{id}",
            get(blog::get_post).put(blog::update_post).delete(blog::delete_post),
        )
        .route("/api/comments", get(comments::list_all))
        .route(
            "/api/blog/{id}/comments",
            get(comments::list_for_post).post(comments::create_comment),
        )
        .route(
            "/api/blog/{id}/comments/{cid}",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR for every client page.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS bundles.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// The full application router, falling back to API-only when SSR cannot be
/// configured.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos disabled, serving API only");
            api_routes(state).fallback(not_found)
        }
    };
    router.layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found")
}
