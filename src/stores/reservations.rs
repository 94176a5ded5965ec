//! Typed stores over the rental schema

use serde_json::json;
use sqlx::FromRow;

use crate::errors::StayhausError;
use crate::executor::{DbPool, PlanExecutor};
use crate::models::GuestReservation;
use crate::query_builder::{QueryPlan, DEFAULT_RESULT_LIMIT};

pub(crate) const GUEST_RESERVATIONS_SQL: &str = "SELECT reservations.id, \
     reservations.start_date, reservations.end_date, \
     reservations.property_id, reservations.guest_id, \
     properties.title, properties.cost_per_night, \
     properties.thumbnail_photo_url, properties.cover_photo_url, \
     properties.city \
     FROM reservations \
     JOIN properties ON properties.id = reservations.property_id \
     WHERE guest_id = $1 \
     ORDER BY start_date \
     LIMIT $2";

/// Reservation listing for a guest
#[derive(Clone)]
pub struct ReservationStore {
    db_pool: DbPool,
}

impl ReservationStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    /// All reservations made by a guest, earliest start date first;
    /// `limit` defaults to 10
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<GuestReservation>, StayhausError> {
        let plan = QueryPlan::new(
            GUEST_RESERVATIONS_SQL,
            vec![json!(guest_id), json!(limit.unwrap_or(DEFAULT_RESULT_LIMIT))],
        );

        let rows = self
            .db_pool
            .fetch_rows(&plan)
            .await
            .map_err(|e| StayhausError::query_execution("reservations", "list_for_guest", e))?;

        rows.iter()
            .map(GuestReservation::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StayhausError::query_execution("reservations", "list_for_guest", e))
    }
}
