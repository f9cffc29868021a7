//! Convenience re-exports for common LightBnB usage
//!
//! # Example
//!
//! ```rust
//! use lightbnb::prelude::*;
//!
//! let search = PropertySearch::new().city("Vancouver");
//! assert_eq!(search.city.as_deref(), Some("Vancouver"));
//! ```

// Core LightBnB components
pub use crate::core::LightBnb;
pub use crate::errors::LightBnbError;
pub use crate::migration;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, QueryConfig, DEFAULT_LIMIT};

// Stores, models and query building
pub use rental_store::prelude::*;

// Common external dependencies
pub use anyhow;
pub use chrono::NaiveDate;
pub use serde;
pub use serde_json;
pub use sqlx;
pub use tokio;
