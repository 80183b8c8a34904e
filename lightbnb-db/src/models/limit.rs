//! Result-size limit for list queries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Default number of rows returned by list queries
pub const DEFAULT_LIMIT: u32 = 10;

/// Positive bound on the number of rows a query returns.
///
/// Always bound as the final query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Limit(u32);

impl Limit {
    /// Create a limit, rejecting zero.
    pub fn new(n: u32) -> Result<Self, ValidationError> {
        if n == 0 {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1.0,
                max: u32::MAX as f64,
            });
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Value as bound to a Postgres `LIMIT` (int8).
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl TryFrom<u32> for Limit {
    type Error = ValidationError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Limit> for u32 {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}

impl FromStr for Limit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s.trim().parse().map_err(|_| ValidationError::InvalidFormat {
            field: "limit",
            reason: "must be a positive integer",
        })?;
        Self::new(n)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ten() {
        assert_eq!(Limit::default().get(), 10);
    }

    #[test]
    fn rejects_zero() {
        assert!(Limit::new(0).is_err());
        assert_eq!(Limit::new(1).unwrap().get(), 1);
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("25".parse::<Limit>().unwrap().get(), 25);
        assert!("0".parse::<Limit>().is_err());
        assert!("-3".parse::<Limit>().is_err());
        assert!("ten".parse::<Limit>().is_err());
    }

    #[test]
    fn deserializes_with_validation() {
        let limit: Limit = serde_json::from_str("5").unwrap();
        assert_eq!(limit.get(), 5);
        assert!(serde_json::from_str::<Limit>("0").is_err());
    }
}
