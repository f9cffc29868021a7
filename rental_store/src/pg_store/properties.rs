//! Property listing queries

use super::binding::bind_json_param;
use super::core::{execution_failed, PgStore};
use crate::errors::StoreError;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::search::PropertySearch;
use crate::traits::PropertyStore;
use async_trait::async_trait;

const ADD_PROPERTY_SQL: &str = "INSERT INTO properties (
    owner_id, title, description, thumbnail_photo_url, cover_photo_url,
    cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
    country, street, city, province, post_code
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
RETURNING *";

/// Price and rating filters must be finite; NaN and infinity cannot be bound meaningfully
fn validate_search(options: &PropertySearch) -> Result<(), StoreError> {
    let numeric_filters = [
        ("minimum_price_per_night", options.minimum_price_per_night),
        ("maximum_price_per_night", options.maximum_price_per_night),
        ("minimum_rating", options.minimum_rating),
    ];

    for (name, value) in numeric_filters {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(StoreError::validation(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl PropertyStore for PgStore {
    async fn get_all_properties(
        &self,
        options: &PropertySearch,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, StoreError> {
        validate_search(options)?;
        let limit = self.resolve_limit(limit)?;
        let built = options.build(limit);

        tracing::debug!(sql = %built.sql, params = ?built.params, "get_all_properties");

        let mut sqlx_query = sqlx::query_as::<_, PropertyListing>(&built.sql);
        for param in built.params {
            sqlx_query = bind_json_param!(sqlx_query, param);
        }

        sqlx_query
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| execution_failed("get_all_properties", &built.sql, e))
    }

    async fn add_property(&self, property: NewProperty) -> Result<Property, StoreError> {
        if property.title.trim().is_empty() {
            return Err(StoreError::validation("title cannot be empty"));
        }
        if property.cost_per_night < 0 {
            return Err(StoreError::validation("cost_per_night cannot be negative"));
        }

        let created = sqlx::query_as::<_, Property>(ADD_PROPERTY_SQL)
            .bind(property.owner_id)
            .bind(property.title)
            .bind(property.description)
            .bind(property.thumbnail_photo_url)
            .bind(property.cover_photo_url)
            .bind(property.cost_per_night)
            .bind(property.parking_spaces)
            .bind(property.number_of_bathrooms)
            .bind(property.number_of_bedrooms)
            .bind(property.country)
            .bind(property.street)
            .bind(property.city)
            .bind(property.province)
            .bind(property.post_code)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| execution_failed("add_property", ADD_PROPERTY_SQL, e))?;

        tracing::debug!(property_id = created.id, "property added");
        Ok(created)
    }
}
