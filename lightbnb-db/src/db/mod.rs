//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One explicitly constructed pool, passed to repositories by reference
//! - Every statement is parameter-bound
//! - "No rows" is `Ok(None)` / empty `Vec`; failures are `Err`

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;

use sqlx::PgPool;
use tracing::info;

use crate::config::DbConfig;
use crate::error::Result;

/// Handle owning the connection pool for the life of the process.
///
/// Open once at startup with [`Database::connect`], hand out repositories,
/// and [`Database::close`] at shutdown.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open the pool described by `config`.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = create_pool_with_options(config).await?;
        info!(
            max_connections = config.max_connections,
            "database pool opened"
        );
        Ok(Self { pool })
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(&self.pool)
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(&self.pool)
    }

    /// Close every pooled connection, waiting for checked-out ones to return.
    pub async fn close(self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}
