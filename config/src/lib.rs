//! # Configuration Management for LightBnB
//!
//! This crate provides the configuration structures shared by the LightBnB data
//! access layer: database connection settings and query defaults.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{DatabaseConfig, QueryConfig};
//!
//! let db_config = DatabaseConfig::new(
//!     "localhost".to_string(), 5432, "lightbnb".to_string(),
//!     "vagrant".to_string(), "123".to_string(),
//!     1, 5, 30, 600, 3600,
//! );
//!
//! let query_config = QueryConfig::new(10);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [database]
//! host = "localhost"
//! port = 5432
//! database = "lightbnb"
//! username = "vagrant"
//! password = "123"
//! min_connections = 1
//! max_connections = 5
//! connection_timeout_seconds = 30
//! idle_timeout_seconds = 600
//! max_lifetime_seconds = 3600
//!
//! [query]
//! default_limit = 10
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from lightbnb.toml (or the path in LIGHTBNB_CONFIG)
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

/// Row limit applied to listing queries when the caller does not pass one
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
    pub query: QueryConfig,
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

/// Defaults applied to listing queries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryConfig {
    #[serde(default = "default_limit")]
    pub default_limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine, a malformed one is not
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.query.validate()
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

    /// Validate host, credentials and pool bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Invalid(
                "Database host cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid(
                "Database port cannot be zero".to_string(),
            ));
        }
        if self.database.is_empty() {
            return Err(ConfigError::Invalid(
                "Database name cannot be empty".to_string(),
            ));
        }
        if self.username.is_empty() {
            return Err(ConfigError::Invalid(
                "Database username cannot be empty".to_string(),
            ));
        }
        if self.min_connections == 0 {
            return Err(ConfigError::Invalid(
                "Database min_connections must be greater than 0".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "Database max_connections must be greater than 0".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::Invalid(
                "Database min_connections cannot be greater than max_connections".to_string(),
            ));
        }
        if self.connection_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "Database connection_timeout_seconds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl QueryConfig {
    /// Create a new query configuration
    pub fn new(default_limit: i64) -> Self {
        Self { default_limit }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit <= 0 {
            return Err(ConfigError::Invalid(
                "Query default_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
        [database]
        host = "localhost"
        port = 5432
        database = "lightbnb"
        username = "vagrant"
        password = "123"
        min_connections = 1
        max_connections = 5
        connection_timeout_seconds = 30
        idle_timeout_seconds = 600
        max_lifetime_seconds = 3600

        [query]
        default_limit = 25
    "#;

    fn database_section() -> String {
        FULL_CONFIG
            .split("[query]")
            .next()
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_toml_str(FULL_CONFIG).unwrap();

        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.query.default_limit, 25);
    }

    #[test]
    fn test_query_section_is_optional() {
        let config = AppConfig::from_toml_str(&database_section()).unwrap();
        assert_eq!(config.query, QueryConfig::default());
        assert_eq!(config.query.default_limit, 10);
    }

    #[test]
    fn test_database_config_validates_on_its_own() {
        let config = AppConfig::from_toml_str(FULL_CONFIG).unwrap();
        assert!(config.database.validate().is_ok());

        let mut inverted = config.database.clone();
        inverted.min_connections = 10;
        inverted.max_connections = 2;
        assert!(matches!(inverted.validate(), Err(ConfigError::Invalid(_))));

        let mut no_pool = config.database;
        no_pool.max_connections = 0;
        assert!(matches!(no_pool.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_inverted_pool_bounds() {
        let toml = FULL_CONFIG.replace("min_connections = 1", "min_connections = 9");
        let err = AppConfig::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("min_connections")));
    }

    #[test]
    fn test_rejects_empty_host() {
        let toml = FULL_CONFIG.replace("host = \"localhost\"", "host = \"\"");
        let err = AppConfig::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("host")));
    }

    #[test]
    fn test_rejects_non_positive_default_limit() {
        let toml = FULL_CONFIG.replace("default_limit = 25", "default_limit = 0");
        let err = AppConfig::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("default_limit")));
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml_str("[database\nhost = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("./definitely-not-here/lightbnb.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
