//! Domain inputs with validation at construction
//!
//! Caller input is checked before any query is built or executed.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod criteria;
pub mod limit;
pub mod property;
pub mod user;

pub use validation::ValidationError;
pub use criteria::SearchCriteria;
pub use limit::{Limit, DEFAULT_LIMIT};
pub use property::NewProperty;
pub use user::{Email, NewUser};
