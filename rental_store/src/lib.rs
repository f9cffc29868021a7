//! Rental Store - data access layer for LightBnB
//!
//! This crate provides the row models, the parameterized property search,
//! store traits and their PostgreSQL implementation.

pub mod errors;
pub mod models;
pub mod pg_store;
pub mod prelude;
pub mod query_builder;
pub mod search;
pub mod traits;

pub use errors::StoreError;
pub use models::{NewProperty, NewUser, Property, PropertyListing, ReservationListing, User};
pub use pg_store::PgStore;
pub use query_builder::{BuiltQuery, QueryBuilder, QueryFilter, QueryOperator, SortOrder};
pub use search::PropertySearch;
pub use traits::{PropertyStore, ReservationStore, UserStore};

use sqlx::PgPool;

pub type DbPool = PgPool;
