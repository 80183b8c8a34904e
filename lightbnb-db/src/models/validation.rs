//! Validation error types

use std::fmt;

/// Validation error for inputs and search criteria
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric value outside its allowed bounds
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// Lower bound is greater than the upper bound
    InvertedRange {
        lower: &'static str,
        upper: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange { field, min, max } if max.is_infinite() => {
                write!(f, "{} must be at least {}", field, min)
            }
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::InvertedRange { lower, upper } => {
                write!(f, "{} cannot be greater than {}", lower, upper)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject empty (after trim) and over-long text fields.
pub(crate) fn require_text(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Reject non-positive identifiers.
pub(crate) fn require_id(value: i32, field: &'static str) -> Result<(), ValidationError> {
    if value < 1 {
        return Err(ValidationError::OutOfRange {
            field,
            min: 1.0,
            max: f64::INFINITY,
        });
    }
    Ok(())
}
