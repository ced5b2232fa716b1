//! Postgres pool for the LearnHub API.
//!
//! The schema lives in `migrations/` and is applied on every start, before
//! the seed step and before the listener binds.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Connect and bring the schema up to date.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    tracing::info!(max_connections, "database ready");

    Ok(pool)
}
