//! Core LightBnB functionality
//!
//! This module contains the main LightBnb struct, which owns the connection
//! pool and hands out the rental store.

use sqlx::PgPool;
use std::time::Duration;

use crate::errors::LightBnbError;
use config::{AppConfig, DatabaseConfig, ListingConfig};
use rental_store::prelude::*;

/// Main LightBnB coordinator that manages the database connection and store
pub struct LightBnb {
    pool: PgPool,
    store: PgRentalStore,
    listing: ListingConfig,
}

impl LightBnb {
    /// Create new LightBnb with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, LightBnbError> {
        Self::connect(&config, ListingConfig::default()).await
    }

    /// Create new LightBnb from a loaded application config
    pub async fn from_config(config: &AppConfig) -> Result<Self, LightBnbError> {
        Self::connect(&config.database, config.listing.clone()).await
    }

    /// Load configuration from the environment and connect
    pub async fn from_env() -> Result<Self, LightBnbError> {
        let config = AppConfig::load()?;
        Self::from_config(&config).await
    }

    async fn connect(config: &DatabaseConfig, listing: ListingConfig) -> Result<Self, LightBnbError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        crate::debug_log!(
            "Connecting to {}:{}/{} as {}",
            config.host,
            config.port,
            config.database,
            config.username
        );
        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self::with_pool(pool, listing))
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: PgPool, listing: ListingConfig) -> Self {
        let store = PgRentalStore::new(pool.clone());
        Self {
            pool,
            store,
            listing,
        }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the rental store
    pub fn store(&self) -> &PgRentalStore {
        &self.store
    }

    pub fn listing(&self) -> &ListingConfig {
        &self.listing
    }

    /// Search properties using the configured default limit
    pub async fn search_properties(
        &self,
        options: FilterOptions,
    ) -> Result<Vec<PropertyListing>, LightBnbError> {
        let query = PropertySearchQuery::new(options).limit(self.listing.default_limit);
        Ok(self.store.search_properties(query).await?)
    }

    /// Search properties from a raw JSON options object
    pub async fn search_properties_json(
        &self,
        options: &serde_json::Value,
    ) -> Result<Vec<PropertyListing>, LightBnbError> {
        let options = FilterOptions::from_json(options).map_err(StoreError::from)?;
        self.search_properties(options).await
    }

    /// Past reservations of a guest using the configured default limit
    pub async fn guest_reservations(
        &self,
        guest_id: i32,
    ) -> Result<Vec<ReservationSummary>, LightBnbError> {
        Ok(self
            .store
            .get_all_reservations(guest_id, self.listing.default_limit)
            .await?)
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), LightBnbError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
