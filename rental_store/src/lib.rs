//! Rental Store - data-access layer for the LightBnB rental application
//!
//! This crate provides the row models, the parameterized query builder used by
//! the property search, and the PostgreSQL store that executes them.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod models;
pub mod pg_store;
pub mod prelude;
pub mod query_builder;
pub mod traits;

pub use errors::{QueryError, StoreError};
pub use models::{NewProperty, NewUser, Property, PropertyListing, ReservationSummary, User};
pub use pg_store::PgRentalStore;
pub use query_builder::{
    FilterKey, FilterOptions, ParameterizedQuery, PropertySearchQuery, QueryParams, SearchFilter,
};
pub use traits::*;

pub use config::DEFAULT_LIMIT;

use sqlx::PgPool;

pub type DbPool = PgPool;
