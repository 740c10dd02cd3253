//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered StayHub user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// The user's display name.
    pub name: String,
    /// The user's email address (unique).
    pub email: String,
    /// The hashed password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// The user's display name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The pre-hashed password. Hashing happens upstream of the data layer.
    pub password_hash: String,
}
