//! # stayhub-core
//!
//! Core crate for the StayHub data-access layer. Contains configuration
//! schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other StayHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
