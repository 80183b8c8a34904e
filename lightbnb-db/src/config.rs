//! Database configuration - connection string and pool limits
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LIGHTBNB_DB_MAX_CONNECTIONS`: pool size (default: 5)
//! - `LIGHTBNB_DB_ACQUIRE_TIMEOUT_SECS`: wait for a free connection (default: 30)

use std::time::Duration;

use crate::error::{DbError, Result};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a pooled connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// PostgreSQL connection string (e.g., postgres://localhost/lightbnb)
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    /// Create config with explicit URL and default pool limits
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), but an explicit URL wins over `DATABASE_URL`.
    pub fn from_env_with_url(database_url: Option<String>) -> Result<Self> {
        Self::from_lookup(|key| match (key, &database_url) {
            ("DATABASE_URL", Some(url)) => Some(url.clone()),
            _ => std::env::var(key).ok(),
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| DbError::config("DATABASE_URL is not set"))?;

        let mut config = Self::new(database_url);

        if let Some(raw) = lookup("LIGHTBNB_DB_MAX_CONNECTIONS") {
            config.max_connections = match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(DbError::config(format!(
                        "LIGHTBNB_DB_MAX_CONNECTIONS must be a positive integer, got '{}'",
                        raw
                    )))
                }
            };
        }

        if let Some(raw) = lookup("LIGHTBNB_DB_ACQUIRE_TIMEOUT_SECS") {
            config.acquire_timeout = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(DbError::config(format!(
                        "LIGHTBNB_DB_ACQUIRE_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                        raw
                    )))
                }
            };
        }

        Ok(config)
    }

    /// Override the pool size
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}
