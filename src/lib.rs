//! # LightBnB
//!
//! PostgreSQL data-access layer for the LightBnB property rental application:
//! user accounts, guest reservations and a filtered property search.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lightbnb::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let lightbnb = LightBnb::new(DatabaseConfig::default()).await?;
//!     lightbnb.health_check().await?;
//!
//!     let listings = lightbnb
//!         .search_properties_json(&json!({
//!             "city": "Vancouver",
//!             "minimum_price_per_night": 50,
//!             "minimum_rating": 4,
//!         }))
//!         .await?;
//!
//!     for listing in listings {
//!         println!("{}: {:?}", listing.property.title, listing.average_rating);
//!     }
//!
//!     let user = lightbnb.store().get_user_with_email("tristanjacobs@gmail.com").await?;
//!     println!("Found user: {:?}", user.map(|u| u.name));
//!
//!     Ok(())
//! }
//! ```

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

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::LightBnb;
pub use errors::LightBnbError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, ListingConfig};

// Re-export internal crates used by the public API
pub use rental_store;

// Re-export external dependencies used in public API
pub use sqlx;
pub use async_trait;
