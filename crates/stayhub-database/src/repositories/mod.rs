//! Repository implementations for all StayHub entities.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::PropertyRepository;
pub use reservation::ReservationRepository;
pub use user::UserRepository;
