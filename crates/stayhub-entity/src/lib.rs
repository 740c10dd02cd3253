//! # stayhub-entity
//!
//! Domain entity models for StayHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod property;
pub mod reservation;
pub mod search;
pub mod user;

pub use property::{CreateProperty, Property, PropertyListing};
pub use reservation::{GuestReservation, Reservation};
pub use search::{PropertySearch, ScalarValue, SearchFilters};
pub use user::{CreateUser, User};
