//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules and persistence so route handlers stay
//! focused on extraction, authorization plumbing and status mapping. Each
//! fallible service has its own `thiserror` enum; `routes::error` maps them
//! onto HTTP responses.

pub mod auth;
pub mod blog;
pub mod comment;
pub mod course;
pub mod enrollment;
pub mod seed;
pub mod session;
pub mod user;
pub mod validate;
