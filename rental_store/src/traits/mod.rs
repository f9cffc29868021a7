//! Traits for database operations
//!
//! This module contains the traits that define the LightBnB data access interface.

pub mod core;

pub use self::core::{PropertyStore, ReservationStore, UserStore};
