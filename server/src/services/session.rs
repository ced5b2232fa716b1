//! Login sessions.
//!
//! A session row maps an opaque token to a user until `expires_at`. The
//! token travels as the `session_token` cookie or as a bearer header; both
//! resolve through `lookup`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt::Write;

use rand::Rng;
use sqlx::PgPool;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::services::user::{USER_COLUMNS, User, user_from_row};

/// How long a session (and its cookie) stays valid.
pub const SESSION_LIFETIME: Duration = Duration::days(30);

const TOKEN_BYTES: usize = 32;

/// Random token, hex encoded.
#[must_use]
pub fn new_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    bytes.iter().fold(String::with_capacity(TOKEN_BYTES * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

#[must_use]
pub fn expires_at(issued: OffsetDateTime) -> OffsetDateTime {
    issued + SESSION_LIFETIME
}

/// Open a session for `user_id` and return its token.
///
/// The user's already-expired sessions are dropped in the same round trip
/// so the table does not grow with every login.
pub async fn open(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = new_token();
    let now = OffsetDateTime::now_utc();
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM sessions WHERE user_id = $1 AND expires_at <= $2")
        .bind(user_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO sessions (token, user_id, created_at, expires_at) VALUES ($1, $2, $3, $4)")
        .bind(&token)
        .bind(user_id)
        .bind(now)
        .bind(expires_at(now))
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(token)
}

/// User behind a live token. Unknown and expired tokens both yield `None`.
pub async fn lookup(pool: &PgPool, token: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {USER_COLUMNS}
           FROM users
          WHERE id = (SELECT user_id FROM sessions WHERE token = $1 AND expires_at > now())"
    ))
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(user_from_row))
}

/// End a session. Closing an unknown token is not an error.
pub async fn close(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1").bind(token).execute(pool).await?;
    Ok(())
}
