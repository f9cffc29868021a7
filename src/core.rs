//! Core LightBnB functionality
//!
//! This module contains the main LightBnB struct: it owns the connection pool
//! and hands out stores that share it.

use rental_store::PgStore;
use sqlx::PgPool;
use sqlx::postgres::PgConnectOptions;
use std::time::Duration;

use crate::errors::LightBnbError;
use config::{AppConfig, DatabaseConfig, QueryConfig};

/// Main LightBnB coordinator that manages the database connection
pub struct LightBnb {
    pool: PgPool,
    query_config: QueryConfig,
}

impl LightBnb {
    /// Create new LightBnB with database connection and default query settings
    pub async fn new(config: DatabaseConfig) -> Result<Self, LightBnbError> {
        config.validate()?;
        let pool = Self::connect(&config).await?;
        Ok(Self::with_pool(pool, QueryConfig::default()))
    }

    /// Create from a complete application configuration
    pub async fn from_config(config: AppConfig) -> Result<Self, LightBnbError> {
        config.validate()?;
        let pool = Self::connect(&config.database).await?;
        Ok(Self::with_pool(pool, config.query))
    }

    /// Load configuration from the environment / `lightbnb.toml` and connect
    pub async fn from_env() -> Result<Self, LightBnbError> {
        Self::from_config(AppConfig::load()?).await
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: PgPool, query_config: QueryConfig) -> Self {
        Self { pool, query_config }
    }

    /// Connection options built field by field, so credentials need no URL escaping
    pub(crate) fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.username)
            .password(&config.password)
    }

    async fn connect(config: &DatabaseConfig) -> Result<PgPool, LightBnbError> {
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
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "connecting to database"
        );

        Ok(pool_options.connect_with(Self::connect_options(config)).await?)
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn query_config(&self) -> &QueryConfig {
        &self.query_config
    }

    /// Store sharing this coordinator's pool
    pub fn store(&self) -> PgStore {
        PgStore::with_config(self.pool.clone(), &self.query_config)
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), LightBnbError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_config(password: &str) -> DatabaseConfig {
        DatabaseConfig::new(
            "db.internal".to_string(),
            6543,
            "lightbnb".to_string(),
            "vagrant".to_string(),
            password.to_string(),
            1,
            5,
            30,
            600,
            3600,
        )
    }

    #[test]
    fn test_connect_options_keep_credentials_verbatim() {
        let options = LightBnb::connect_options(&database_config("p@ss/w:rd"));

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "vagrant");
        assert_eq!(options.get_database(), Some("lightbnb"));
    }

    #[tokio::test]
    async fn test_new_rejects_inverted_pool_bounds_before_connecting() {
        let mut config = database_config("123");
        config.min_connections = 8;
        config.max_connections = 2;

        let result = LightBnb::new(config).await;
        assert!(matches!(result, Err(LightBnbError::Config(_))));
    }

    #[tokio::test]
    async fn test_new_rejects_zero_pool_size() {
        let mut config = database_config("123");
        config.max_connections = 0;

        let result = LightBnb::new(config).await;
        assert!(matches!(result, Err(LightBnbError::Config(_))));
    }
}
