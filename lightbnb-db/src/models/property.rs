//! Property input validation

use serde::{Deserialize, Serialize};

use super::validation::{require_id, require_text};
use super::ValidationError;

const MAX_TEXT_LEN: usize = 255;

/// Input for listing a new property.
///
/// `cost_per_night` is in cents, matching the `properties` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl NewProperty {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_id(self.owner_id, "owner_id")?;
        require_text(&self.title, "title", MAX_TEXT_LEN)?;
        require_text(&self.country, "country", MAX_TEXT_LEN)?;
        require_text(&self.street, "street", MAX_TEXT_LEN)?;
        require_text(&self.city, "city", MAX_TEXT_LEN)?;
        require_text(&self.province, "province", MAX_TEXT_LEN)?;
        require_text(&self.post_code, "post_code", MAX_TEXT_LEN)?;

        for (field, value) in [
            ("cost_per_night", self.cost_per_night),
            ("parking_spaces", self.parking_spaces),
            ("number_of_bathrooms", self.number_of_bathrooms),
            ("number_of_bedrooms", self.number_of_bedrooms),
        ] {
            if value < 0 {
                return Err(ValidationError::OutOfRange {
                    field,
                    min: 0.0,
                    max: f64::INFINITY,
                });
            }
        }

        Ok(())
    }
}
