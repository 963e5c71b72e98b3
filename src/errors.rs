//! Error types for the LightBnB crate
//!
//! This module contains all error types that can be returned by LightBnB operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightBnbError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] rental_store::StoreError),
}
