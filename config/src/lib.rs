//! # Configuration Management for LightBnB
//!
//! This crate provides the configuration structures shared by the LightBnB
//! data-access crates: database connection settings and listing defaults.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{DatabaseConfig, ListingConfig};
//!
//! let db_config = DatabaseConfig::new(
//!     "localhost".to_string(), 5432, "lightbnb".to_string(),
//!     "labber".to_string(), "labber".to_string(),
//!     1, 10, 30, 600, 3600,
//! );
//!
//! let listing_config = ListingConfig::new(10);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [database]
//! host = "localhost"
//! port = 5432
//! database = "lightbnb"
//! username = "labber"
//! password = "labber"
//! min_connections = 1
//! max_connections = 10
//! connection_timeout_seconds = 30
//! idle_timeout_seconds = 600
//! max_lifetime_seconds = 3600
//!
//! [listing]
//! default_limit = 10
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from LIGHTBNB_CONFIG or ./lightbnb.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./lightbnb.toml";
const CONFIG_PATH_VAR: &str = "LIGHTBNB_CONFIG";

/// Number of rows returned by listing queries when the caller gives no limit
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub min_connections: u32,
    pub max_connections: u32,
    pub connection_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
    pub max_lifetime_seconds: u64,
}

/// Defaults applied to listing queries (property search, reservations)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub default_limit: i64,
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment or the default path
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine, a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified as {} (environment or .env) or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        let db = &self.database;
        let checks = [
            (db.host.is_empty(), "database.host is empty"),
            (db.port == 0, "database.port is 0"),
            (db.database.is_empty(), "database.database is empty"),
            (db.username.is_empty(), "database.username is empty"),
            (db.min_connections == 0, "database.min_connections is 0"),
            (db.max_connections == 0, "database.max_connections is 0"),
            (
                db.min_connections > db.max_connections,
                "database.min_connections exceeds max_connections",
            ),
            (
                db.connection_timeout_seconds == 0,
                "database.connection_timeout_seconds is 0",
            ),
            (
                self.listing.default_limit <= 0,
                "listing.default_limit must be positive",
            ),
        ];

        match checks.iter().find(|(failed, _)| *failed) {
            Some((_, problem)) => Err(ConfigError::Invalid(problem.to_string())),
            None => Ok(()),
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        host: String,
        port: u16,
        database: String,
        username: String,
        password: String,
        min_connections: u32,
        max_connections: u32,
        connection_timeout_seconds: u64,
        idle_timeout_seconds: u64,
        max_lifetime_seconds: u64,
    ) -> Self {
        Self {
            host,
            port,
            database,
            username,
            password,
            min_connections,
            max_connections,
            connection_timeout_seconds,
            idle_timeout_seconds,
            max_lifetime_seconds,
        }
    }

    /// Build connection string
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }
}

/// Local development database used by the LightBnB bootcamp setup
impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(
            "localhost".to_string(),
            5432,
            "lightbnb".to_string(),
            "labber".to_string(),
            "labber".to_string(),
            1,
            10,
            30,
            600,
            3600,
        )
    }
}

impl ListingConfig {
    /// Create a new listing configuration
    pub fn new(default_limit: i64) -> Self {
        Self { default_limit }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}
