//! lightbnb-db: PostgreSQL data access for the LightBnB rental app
//!
//! Looks up and creates users, lists a guest's reservations, and runs
//! filtered property searches through a parameterized query builder.
//! Results are plain serde-serializable records for an HTTP layer or
//! the `lightbnb` CLI to emit.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;

pub use config::DbConfig;
pub use db::Database;
pub use error::{DbError, Result};
pub use models::{Limit, SearchCriteria};
pub use query::{build_property_search, QueryPlan, SqlParam};
