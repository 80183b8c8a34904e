//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;

/// Create a PostgreSQL connection pool with default limits
/// (5 connections, 30s acquire timeout).
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/lightbnb").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(&DbConfig::new(database_url)).await
}

/// Create a PostgreSQL connection pool sized and timed by `config`.
pub async fn create_pool_with_options(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect(&config.database_url).await
}

fn pool_options(config: &DbConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn options_follow_config() {
        let config = DbConfig {
            acquire_timeout: Duration::from_secs(7),
            ..DbConfig::new("postgres://localhost/lightbnb").with_max_connections(3)
        };
        let options = pool_options(&config);

        assert_eq!(options.get_max_connections(), 3);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(7));
    }

    #[test]
    fn default_options_match_config_defaults() {
        let options = pool_options(&DbConfig::new("postgres://localhost/lightbnb"));

        assert_eq!(
            options.get_max_connections(),
            crate::config::DEFAULT_MAX_CONNECTIONS
        );
        assert_eq!(
            options.get_acquire_timeout(),
            crate::config::DEFAULT_ACQUIRE_TIMEOUT
        );
    }

    // Run with: DATABASE_URL=postgres://... cargo test -p lightbnb-db -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn exhausted_pool_times_out_after_configured_wait() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let config = DbConfig {
            acquire_timeout: Duration::from_millis(200),
            ..DbConfig::new(url).with_max_connections(1)
        };
        let pool = create_pool_with_options(&config)
            .await
            .expect("pool creation failed");

        let _held = pool.acquire().await.expect("first connection");
        let started = std::time::Instant::now();
        let err = pool.acquire().await.unwrap_err();

        assert!(matches!(err, sqlx::Error::PoolTimedOut), "got {err:?}");
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
