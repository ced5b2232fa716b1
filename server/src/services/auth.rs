//! Registration and password login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::Deserialize;
use sqlx::PgPool;

use crate::services::user::{self, Role, USER_COLUMNS, User, user_from_row};
use crate::services::validate::{Checks, FieldError, char_len, is_email};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("User with this email already exists")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to student. Admin cannot be self-assigned.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check a registration and resolve its role.
///
/// # Errors
///
/// Returns every failed field.
pub fn validate_registration(reg: &Registration) -> Result<Role, Vec<FieldError>> {
    let role = match reg.role.as_deref().map(str::trim) {
        None | Some("") => Some(Role::Student),
        Some(raw) => Role::parse(raw).filter(|r| *r != Role::Admin),
    };
    let mut checks = Checks::new();
    checks
        .check(char_len(reg.name.trim()) >= 2, "name", "Name must be at least 2 characters")
        .check(is_email(&normalize_email(&reg.email)), "email", "Invalid email address")
        .check(char_len(&reg.password) >= 6, "password", "Password must be at least 6 characters")
        .check(role.is_some(), "role", "Role must be student or instructor");
    checks.finish()?;
    Ok(role.unwrap_or(Role::Student))
}

/// # Errors
///
/// Fails only if the hasher rejects its parameters.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Constant-time check of `password` against a stored PHC string. A
/// malformed hash never verifies.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .is_ok_and(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

/// Create an account.
pub async fn register(pool: &PgPool, reg: Registration) -> Result<User, AuthError> {
    let role = validate_registration(&reg).map_err(AuthError::Validation)?;
    let email = normalize_email(&reg.email);
    if user::find_credentials(pool, &email).await?.is_some() {
        return Err(AuthError::EmailTaken);
    }
    let password_hash = hash_password(&reg.password)?;

    let row = sqlx::query(&format!(
        "INSERT INTO users (email, name, password_hash, role, avatar, bio)
         VALUES ($1, $2, $3, $4, NULL, '')
         RETURNING {USER_COLUMNS}"
    ))
    .bind(&email)
    .bind(reg.name.trim())
    .bind(&password_hash)
    .bind(role.as_str())
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::EmailTaken,
        _ => AuthError::Database(e),
    })?;

    let user = user_from_row(&row);
    tracing::info!(user_id = %user.id, role = user.role.as_str(), "user registered");
    Ok(user)
}

/// Check credentials. Unknown email and wrong password look the same.
pub async fn login(pool: &PgPool, creds: &Credentials) -> Result<User, AuthError> {
    let email = normalize_email(&creds.email);
    let mut checks = Checks::new();
    checks
        .check(is_email(&email), "email", "Invalid email address")
        .check(!creds.password.is_empty(), "password", "Password is required");
    checks.finish().map_err(AuthError::Validation)?;

    let Some((user, stored)) = user::find_credentials(pool, &email).await? else {
        return Err(AuthError::InvalidCredentials);
    };
    if !verify_password(&creds.password, &stored) {
        tracing::info!(%email, "login rejected");
        return Err(AuthError::InvalidCredentials);
    }
    Ok(user)
}
