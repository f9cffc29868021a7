//! Reservation history queries

use super::core::{execution_failed, PgStore};
use crate::errors::StoreError;
use crate::models::ReservationListing;
use crate::traits::ReservationStore;
use async_trait::async_trait;

// reservations.id is aliased so it cannot shadow properties.id in the row
const GET_ALL_RESERVATIONS_SQL: &str = "SELECT reservations.id AS reservation_id,
       reservations.start_date,
       reservations.end_date,
       reservations.guest_id,
       properties.*,
       AVG(property_reviews.rating)::float8 AS average_rating
FROM reservations
JOIN properties ON reservations.property_id = properties.id
LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
WHERE reservations.guest_id = $1
  AND reservations.end_date < now()::date
GROUP BY properties.id, reservations.id
ORDER BY reservations.start_date
LIMIT $2";

#[async_trait]
impl ReservationStore for PgStore {
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<ReservationListing>, StoreError> {
        let limit = self.resolve_limit(limit)?;

        sqlx::query_as::<_, ReservationListing>(GET_ALL_RESERVATIONS_SQL)
            .bind(guest_id)
            .bind(limit)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| execution_failed("get_all_reservations", GET_ALL_RESERVATIONS_SQL, e))
    }
}
