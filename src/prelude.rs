//! Convenience re-exports for common LightBnB usage
//!
//! # Example
//!
//! ```rust
//! use lightbnb::prelude::*;
//!
//! let query = PropertySearchQuery::new(FilterOptions::new().city("Vancouver")).build();
//! assert_eq!(query.params.len(), 2);
//! ```

// Core LightBnB components
pub use crate::core::LightBnb;
pub use crate::errors::LightBnbError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, ListingConfig};

// Re-export commonly used rental-store types
pub use rental_store::prelude::*;

// Common external dependencies
pub use async_trait;
pub use sqlx;
pub use tokio;
