//! Reservation repository implementation.

use sqlx::PgPool;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::reservation::GuestReservation;

/// Repository for reservation queries.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's past reservations with the reserved property and its
    /// review average, most recent trips grouped per reservation.
    pub async fn find_for_guest(
        &self,
        guest_id: i64,
        limit: i64,
    ) -> AppResult<Vec<GuestReservation>> {
        sqlx::query_as::<_, GuestReservation>(
            "SELECT reservations.id, reservations.property_id, reservations.start_date, \
             reservations.end_date, properties.title, properties.city, \
             properties.cost_per_night, AVG(property_reviews.rating)::float8 AS average_rating \
             FROM reservations \
             JOIN properties ON reservations.property_id = properties.id \
             JOIN property_reviews ON property_reviews.property_id = properties.id \
             WHERE reservations.guest_id = $1 AND reservations.end_date < NOW()::date \
             GROUP BY properties.id, reservations.id \
             ORDER BY reservations.start_date \
             LIMIT $2",
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list guest reservations", e)
        })
    }
}
