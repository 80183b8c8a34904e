//! Reservation repository

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use super::properties::Property;
use crate::error::Result;
use crate::models::Limit;

/// Reservation record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Reservation {
    #[sqlx(rename = "reservation_id")]
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
}

/// A guest's reservation together with the reserved property
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GuestReservation {
    #[sqlx(flatten)]
    pub reservation: Reservation,
    #[sqlx(flatten)]
    pub property: Property,
}

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's reservations with property details, earliest first.
    #[instrument(skip_all, fields(guest_id = guest_id, limit = %limit))]
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> Result<Vec<GuestReservation>> {
        let rows: Vec<GuestReservation> = sqlx::query_as(
            r#"
            SELECT
                r.id AS reservation_id,
                r.start_date,
                r.end_date,
                r.property_id,
                r.guest_id,
                p.*
            FROM reservations r
            JOIN properties p ON p.id = r.property_id
            WHERE r.guest_id = $1
            ORDER BY r.start_date, r.id
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        debug!(count = rows.len(), "guest reservations loaded");
        Ok(rows)
    }
}
