//! Reservation entity models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reservation of a property by a guest.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: i64,
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Checkout date.
    pub end_date: NaiveDate,
    /// The reserved property.
    pub property_id: i64,
    /// The guest who made the reservation.
    pub guest_id: i64,
}

/// A past reservation joined with the property it was for, as shown on a
/// guest's trip history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestReservation {
    /// Unique reservation identifier.
    pub id: i64,
    /// The reserved property.
    pub property_id: i64,
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Checkout date.
    pub end_date: NaiveDate,
    /// Title of the reserved property.
    pub title: String,
    /// City of the reserved property.
    pub city: String,
    /// Nightly cost in cents at the time of the query.
    pub cost_per_night: i64,
    /// Average review rating of the reserved property.
    pub average_rating: f64,
}
