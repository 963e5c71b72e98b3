//! Traits for database operations
//!
//! This module contains the traits that define the interface of the rental
//! store, one per area of the schema.

pub mod property;
pub mod reservation;
pub mod user;

// Re-export all public items for convenience
pub use property::PropertyStore;
pub use reservation::ReservationStore;
pub use user::UserStore;
