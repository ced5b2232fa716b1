//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. All
//! durable data lives in Postgres, so the state is just the pool plus the
//! settings handlers need per request.

use sqlx::PgPool;

/// Clone is required by Axum; the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, cookie_secure: bool) -> Self {
        Self { pool, cookie_secure }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
