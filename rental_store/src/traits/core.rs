//! Trait definitions
//!
//! `limit` arguments take `None` to mean the store's configured default.

use crate::models::{NewProperty, NewUser, Property, PropertyListing, ReservationListing, User};
use crate::search::PropertySearch;
use crate::StoreError;
use async_trait::async_trait;

/// User accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by email, compared in lower case
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError>;

    /// Register a user and return the stored row
    async fn add_user(&self, user: NewUser) -> Result<User, StoreError>;
}

/// Rental listings
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// List reviewed properties matching `options`, cheapest first
    async fn get_all_properties(
        &self,
        options: &PropertySearch,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, StoreError>;

    async fn add_property(&self, property: NewProperty) -> Result<Property, StoreError>;
}

/// Guest reservations
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Completed reservations of a guest, earliest first
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<ReservationListing>, StoreError>;
}
