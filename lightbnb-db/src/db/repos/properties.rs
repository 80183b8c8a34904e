//! Property repository
//!
//! Handles property search and listing with:
//! - Filtered search built by [`build_property_search`]
//! - Parameter-bound inserts (no values spliced into SQL)

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::models::{Limit, NewProperty, SearchCriteria};
use crate::query::build_property_search;

/// Property record from database.
///
/// `cost_per_night` is in cents.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Property with its average review rating, as returned by search
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties matching `criteria`, cheapest first.
    ///
    /// Criteria are validated before the query is built; invalid input
    /// never reaches the database.
    #[instrument(skip_all, fields(limit = %limit))]
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        limit: Limit,
    ) -> Result<Vec<PropertyListing>> {
        criteria.validate()?;

        let plan = build_property_search(criteria, limit);
        debug!(
            filters = plan.predicates().len(),
            params = plan.params().len(),
            "running property search"
        );

        let listings = plan
            .bind(sqlx::query_as::<_, PropertyListing>(plan.sql()))
            .fetch_all(self.pool)
            .await?;

        info!(count = listings.len(), "property search complete");
        Ok(listings)
    }

    /// Add a property listing, returning the stored record.
    #[instrument(skip_all, fields(owner_id = property.owner_id))]
    pub async fn add(&self, property: NewProperty) -> Result<Property> {
        property.validate()?;

        let created: Property = sqlx::query_as(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code, active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(property.active)
        .fetch_one(self.pool)
        .await?;

        info!(property_id = created.id, "property created");
        Ok(created)
    }
}
