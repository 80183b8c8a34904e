//! Property search criteria
//!
//! Every field is independently optional. An absent field means no filter
//! on that dimension. Prices are per night in whole currency units; the
//! database stores `cost_per_night` in cents.

use serde::{Deserialize, Deserializer, Serialize};

use super::validation::require_id;
use super::ValidationError;

/// Highest rating a review can carry
pub const MAX_RATING: f64 = 5.0;

/// Optional filters narrowing a property search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub owner_id: Option<i32>,

    /// Partial match against the property's city
    #[serde(deserialize_with = "blank_as_none")]
    pub city: Option<String>,

    #[serde(alias = "minimum_price_per_night")]
    pub min_price_per_night: Option<f64>,

    #[serde(alias = "maximum_price_per_night")]
    pub max_price_per_night: Option<f64>,

    #[serde(alias = "minimum_rating")]
    pub min_rating: Option<f64>,
}

impl SearchCriteria {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.owner_id.is_none()
            && self.city.is_none()
            && self.min_price_per_night.is_none()
            && self.max_price_per_night.is_none()
            && self.min_rating.is_none()
    }

    /// Check caller-supplied values before they reach the query builder.
    ///
    /// # Rules
    /// - `owner_id` is positive
    /// - prices are finite and non-negative, with min <= max
    /// - `min_rating` is within 0..=5
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(owner_id) = self.owner_id {
            require_id(owner_id, "owner_id")?;
        }

        if let Some(min) = self.min_price_per_night {
            non_negative(min, "min_price_per_night")?;
        }
        if let Some(max) = self.max_price_per_night {
            non_negative(max, "max_price_per_night")?;
        }
        if let (Some(min), Some(max)) = (self.min_price_per_night, self.max_price_per_night) {
            if min > max {
                return Err(ValidationError::InvertedRange {
                    lower: "min_price_per_night",
                    upper: "max_price_per_night",
                });
            }
        }

        if let Some(rating) = self.min_rating {
            if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
                return Err(ValidationError::OutOfRange {
                    field: "min_rating",
                    min: 0.0,
                    max: MAX_RATING,
                });
            }
        }

        Ok(())
    }
}

fn non_negative(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            min: 0.0,
            max: f64::INFINITY,
        });
    }
    Ok(())
}

/// Search forms submit empty strings for untouched inputs.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
