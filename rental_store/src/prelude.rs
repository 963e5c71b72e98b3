//! Convenience re-exports for common rental-store usage

// Store traits
pub use crate::traits::{PropertyStore, ReservationStore, UserStore};

// Error types
pub use crate::errors::{QueryError, StoreError};

// PostgreSQL store
pub use crate::pg_store::PgRentalStore;

// Row models
pub use crate::models::{NewProperty, NewUser, Property, PropertyListing, ReservationSummary, User};

// Query building
pub use crate::query_builder::{FilterOptions, ParameterizedQuery, PropertySearchQuery, SearchFilter};

pub use crate::DEFAULT_LIMIT;

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
