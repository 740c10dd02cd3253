//! # stayhub-database
//!
//! PostgreSQL database connection management, dynamic query composition,
//! and concrete repository implementations for all StayHub entities.

pub mod connection;
pub mod migration;
pub mod query;
pub mod repositories;

pub use connection::DatabasePool;
