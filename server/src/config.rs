//! Process configuration from the environment.
//!
//! `.env` is loaded by `main` before `Config::from_env` runs, so every value
//! here can come from either source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL required")]
    MissingDatabaseUrl,
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Parse a boolean env var. Unset or unrecognized values yield `None`.
pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
    /// Insert the demo accounts and content into an empty database.
    pub seed_demo_data: bool,
}

impl Config {
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` is missing or `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            database_url,
            port,
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|raw| parse_pool_size(&raw))
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
            seed_demo_data: env_bool("SEED_DEMO_DATA").unwrap_or(true),
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))
}

/// Pool sizes below one are ignored.
fn parse_pool_size(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}
