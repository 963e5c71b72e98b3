//! PostgreSQL store
//!
//! [`PgRentalStore`] implements every store trait over a shared `PgPool`.

pub mod binding;
pub mod core;
pub mod properties;
pub mod reservations;
pub mod users;

pub use self::core::PgRentalStore;
