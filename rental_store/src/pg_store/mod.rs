//! PostgreSQL store implementations

pub mod core;
pub mod properties;
pub mod reservations;
pub mod users;

mod binding;

pub use self::core::PgStore;
