//! Convenience re-exports for common rental-store usage

// Store traits
pub use crate::traits::{PropertyStore, ReservationStore, UserStore};

// Error types
pub use crate::errors::StoreError;

// Store implementation
pub use crate::pg_store::PgStore;

// Row models
pub use crate::models::{NewProperty, NewUser, Property, PropertyListing, ReservationListing, User};

// Query building
pub use crate::query_builder::{BuiltQuery, QueryBuilder, QueryFilter, SortOrder};
pub use crate::search::PropertySearch;

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
