//! Structured error types for lightbnb-db.
//!
//! Database failures are propagated unchanged so callers can tell
//! "no rows" (`Ok(None)` / empty `Vec`) apart from "query failed".
//! Binary crates (lightbnb-cli) wrap these with `anyhow` context.

use thiserror::Error;

use crate::models::ValidationError;

/// Main error type for data-access operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Caller input failed validation before any query ran
    #[error("invalid criteria: {0}")]
    InvalidCriteria(#[from] ValidationError),

    /// The database rejected or failed to run a query
    #[error("query execution failed: {0}")]
    QueryExecutionFailed(#[from] sqlx::Error),

    /// Configuration is missing or malformed
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for lightbnb-db operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True when the failure came from caller input rather than the database.
    pub fn is_invalid_criteria(&self) -> bool {
        matches!(self, Self::InvalidCriteria(_))
    }
}
