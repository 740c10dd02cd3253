//! Property entity models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A rental property listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    /// Unique property identifier.
    pub id: i64,
    /// The user who owns this listing.
    pub owner_id: i64,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// URL of the thumbnail photo.
    pub thumbnail_photo_url: String,
    /// URL of the cover photo.
    pub cover_photo_url: String,
    /// Nightly cost in cents.
    pub cost_per_night: i64,
    /// Number of parking spaces.
    pub parking_spaces: i32,
    /// Number of bathrooms.
    pub number_of_bathrooms: i32,
    /// Number of bedrooms.
    pub number_of_bedrooms: i32,
    /// Country of the property address.
    pub country: String,
    /// Street of the property address.
    pub street: String,
    /// City of the property address.
    pub city: String,
    /// Province or state of the property address.
    pub province: String,
    /// Postal code of the property address.
    pub post_code: String,
    /// Whether the listing is currently active.
    pub active: bool,
}

/// A property row as returned by the search query: every property column
/// plus the review average computed by the aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    /// Unique property identifier.
    pub id: i64,
    /// The user who owns this listing.
    pub owner_id: i64,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// URL of the thumbnail photo.
    pub thumbnail_photo_url: String,
    /// URL of the cover photo.
    pub cover_photo_url: String,
    /// Nightly cost in cents.
    pub cost_per_night: i64,
    /// Number of parking spaces.
    pub parking_spaces: i32,
    /// Number of bathrooms.
    pub number_of_bathrooms: i32,
    /// Number of bedrooms.
    pub number_of_bedrooms: i32,
    /// Country of the property address.
    pub country: String,
    /// Street of the property address.
    pub street: String,
    /// City of the property address.
    pub city: String,
    /// Province or state of the property address.
    pub province: String,
    /// Postal code of the property address.
    pub post_code: String,
    /// Whether the listing is currently active.
    pub active: bool,
    /// Average review rating for the property.
    pub average_rating: f64,
}

/// Data required to create a new property listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProperty {
    /// The user who owns this listing.
    pub owner_id: i64,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// URL of the thumbnail photo.
    pub thumbnail_photo_url: String,
    /// URL of the cover photo.
    pub cover_photo_url: String,
    /// Nightly cost in cents.
    pub cost_per_night: i64,
    /// Number of parking spaces.
    pub parking_spaces: i32,
    /// Number of bathrooms.
    pub number_of_bathrooms: i32,
    /// Number of bedrooms.
    pub number_of_bedrooms: i32,
    /// Country of the property address.
    pub country: String,
    /// Street of the property address.
    pub street: String,
    /// City of the property address.
    pub city: String,
    /// Province or state of the property address.
    pub province: String,
    /// Postal code of the property address.
    pub post_code: String,
}
