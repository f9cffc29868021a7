//! # LightBnB
//!
//! PostgreSQL data access for the LightBnB vacation-rental application:
//! users, property listings with review ratings, and reservation history.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lightbnb::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "lightbnb".to_string(),
//!         "vagrant".to_string(), "123".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let lightbnb = LightBnb::new(config).await?;
//!     lightbnb.migrate(false).await?;
//!
//!     let store = lightbnb.store();
//!     let search = PropertySearch::new()
//!         .city("Vancouver")
//!         .price_range(100.0, 200.0)
//!         .minimum_rating(4.0);
//!
//!     for listing in store.get_all_properties(&search, None).await? {
//!         println!("{} ({:.1})", listing.property.title, listing.average_rating);
//!     }
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

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;

pub use crate::core::LightBnb;
pub use errors::LightBnbError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, QueryConfig};

// Re-export the store crate and external dependencies used in the public API
pub use rental_store;
pub use sqlx;
pub use async_trait;
