//! User accounts: lookup, profile edits and admin management.
//!
//! Password hashes never leave this module except through
//! `find_credentials`, which only the login flow calls.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::validate::{Checks, FieldError, char_len};

pub(crate) const USER_COLUMNS: &str = "id, email, name, role, avatar, bio, created_at";

const BIO_MAX: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    Instructor,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Instructor => "instructor",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "student" => Some(Self::Student),
            "instructor" => Some(Self::Instructor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Admins manage everything; others only what they own.
    #[must_use]
    pub fn can_manage(&self, owner_id: Uuid) -> bool {
        self.is_admin() || self.id == owner_id
    }

    /// Admins and instructors publish courses and posts.
    #[must_use]
    pub fn can_author(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Instructor)
    }
}

pub(crate) fn user_from_row(row: &PgRow) -> User {
    let role: String = row.get("role");
    User {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        role: Role::parse(&role).unwrap_or(Role::Student),
        avatar: row.get("avatar"),
        bio: row.get("bio"),
        created_at: row.get("created_at"),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("cannot delete your own account")]
    SelfDelete,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The editable profile fields, replaced together. A missing or blank
/// `bio`/`avatar` clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Blank strings clear optional fields.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// # Errors
///
/// Returns field errors for a short name or an overlong bio.
pub fn validate_profile(update: &ProfileUpdate) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::new();
    checks
        .check(char_len(update.name.trim()) >= 2, "name", "Name must be at least 2 characters")
        .check(
            update.bio.as_deref().is_none_or(|bio| char_len(bio) <= BIO_MAX),
            "bio",
            "Bio must be at most 500 characters",
        );
    checks.finish()
}

// =============================================================================
// QUERIES
// =============================================================================

/// Every account, oldest first.
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, UserError> {
    let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at, name"))
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(user_from_row).collect())
}

/// The account and its password hash for a normalized email.
pub async fn find_credentials(pool: &PgPool, email: &str) -> Result<Option<(User, String)>, sqlx::Error> {
    let row = sqlx::query(&format!("SELECT {USER_COLUMNS}, password_hash FROM users WHERE email = $1"))
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| (user_from_row(&r), r.get("password_hash"))))
}

/// Replace the profile fields.
pub async fn update_profile(pool: &PgPool, id: Uuid, update: ProfileUpdate) -> Result<User, UserError> {
    validate_profile(&update).map_err(UserError::Validation)?;
    let name = update.name.trim().to_owned();
    let bio = blank_to_none(update.bio);
    let avatar = blank_to_none(update.avatar);

    let row = sqlx::query(&format!(
        "UPDATE users SET name = $2, bio = $3, avatar = $4 WHERE id = $1 RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(&name)
    .bind(&bio)
    .bind(&avatar)
    .fetch_optional(pool)
    .await?
    .ok_or(UserError::NotFound(id))?;

    let user = user_from_row(&row);
    // Comments carry a copy of the author's display fields.
    sqlx::query("UPDATE comments SET user_name = $2, user_avatar = $3 WHERE user_id = $1")
        .bind(id)
        .bind(&user.name)
        .bind(&user.avatar)
        .execute(pool)
        .await?;
    Ok(user)
}

pub async fn update_role(pool: &PgPool, id: Uuid, role: Role) -> Result<User, UserError> {
    let row = sqlx::query(&format!("UPDATE users SET role = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"))
        .bind(id)
        .bind(role.as_str())
        .fetch_optional(pool)
        .await?
        .ok_or(UserError::NotFound(id))?;
    Ok(user_from_row(&row))
}

/// Remove an account. Sessions, enrollments and comments cascade.
pub async fn delete_user(pool: &PgPool, actor: &User, id: Uuid) -> Result<(), UserError> {
    if actor.id == id {
        return Err(UserError::SelfDelete);
    }
    let result = sqlx::query("DELETE FROM users WHERE id = $1").bind(id).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(UserError::NotFound(id));
    }
    tracing::info!(%id, by = %actor.id, "user deleted");
    Ok(())
}
