//! Error types for the LightBnB crate
//!
//! This module contains all error types that can be returned by LightBnB coordinator operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightBnbError {
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store error: {0}")]
    Store(#[from] rental_store::StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
