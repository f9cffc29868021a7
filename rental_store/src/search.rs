//! Property search
//!
//! Turns a sparse set of listing filters into one parameterized statement.
//! Filters are applied in a fixed order (city, owner, minimum price, maximum
//! price) so the generated text is stable for a given set of options.

use crate::query_builder::{BuiltQuery, GroupBy, QueryBuilder, QueryFilter, SortOrder};
use serde::{Deserialize, Serialize};
use serde_json::json;

const PROPERTY_SEARCH_PREAMBLE: &str = "
    SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating
    FROM properties
    JOIN property_reviews ON properties.id = property_reviews.property_id
";

const AVERAGE_RATING: &str = "AVG(property_reviews.rating)";

/// Optional filters for listing properties
///
/// Prices are in whole currency units and converted to the minor units
/// stored in `properties.cost_per_night`. Each price bound applies on its
/// own; supplying both gives a closed range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearch {
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn price_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum_price_per_night = Some(minimum);
        self.maximum_price_per_night = Some(maximum);
        self
    }

    pub fn minimum_price(mut self, minimum: f64) -> Self {
        self.minimum_price_per_night = Some(minimum);
        self
    }

    pub fn maximum_price(mut self, maximum: f64) -> Self {
        self.maximum_price_per_night = Some(maximum);
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// City filter with blank input treated as absent
    fn city_filter(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    /// Build the listing statement; the row limit is always the last parameter
    pub fn build(&self, limit: i64) -> BuiltQuery {
        let mut builder = QueryBuilder::select(PROPERTY_SEARCH_PREAMBLE);

        if let Some(city) = self.city_filter() {
            builder = builder.filter(QueryFilter::contains("properties.city", city));
        }

        if let Some(owner_id) = self.owner_id {
            builder = builder.filter(QueryFilter::eq("properties.owner_id", json!(owner_id)));
        }

        if let Some(minimum) = self.minimum_price_per_night {
            builder = builder.filter(QueryFilter::gte(
                "properties.cost_per_night",
                json!(to_minor_units(minimum)),
            ));
        }

        if let Some(maximum) = self.maximum_price_per_night {
            builder = builder.filter(QueryFilter::lte(
                "properties.cost_per_night",
                json!(to_minor_units(maximum)),
            ));
        }

        let mut group_by = GroupBy::single("properties.id");
        if let Some(rating) = self.minimum_rating {
            group_by = group_by.having(QueryFilter::gte(AVERAGE_RATING, json!(rating)));
        }

        builder
            .group_by(group_by)
            .order_by("properties.cost_per_night", SortOrder::Asc)
            .limit(limit)
            .build()
    }
}

/// Whole currency units to cents, rounded to the nearest cent
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
