//! Database schema setup
//!
//! Creates the LightBnB tables and indexes if they do not exist yet.
//! Statements run in dependency order: users, properties, reservations,
//! property_reviews.

use crate::core::LightBnb;
use crate::errors::LightBnbError;

pub const CREATE_USERS_SQL: &str = "CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL
)";

pub const CREATE_PROPERTIES_SQL: &str = "CREATE TABLE IF NOT EXISTS properties (
    id SERIAL PRIMARY KEY NOT NULL,
    owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    title VARCHAR(255) NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    thumbnail_photo_url VARCHAR(255) NOT NULL,
    cover_photo_url VARCHAR(255) NOT NULL,
    cost_per_night INTEGER NOT NULL DEFAULT 0,
    parking_spaces INTEGER NOT NULL DEFAULT 0,
    number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
    number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
    country VARCHAR(255) NOT NULL,
    street VARCHAR(255) NOT NULL,
    city VARCHAR(255) NOT NULL,
    province VARCHAR(255) NOT NULL,
    post_code VARCHAR(255) NOT NULL,
    active BOOLEAN NOT NULL DEFAULT TRUE
)";

pub const CREATE_RESERVATIONS_SQL: &str = "CREATE TABLE IF NOT EXISTS reservations (
    id SERIAL PRIMARY KEY NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
)";

pub const CREATE_PROPERTY_REVIEWS_SQL: &str = "CREATE TABLE IF NOT EXISTS property_reviews (
    id SERIAL PRIMARY KEY NOT NULL,
    guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    reservation_id INTEGER NOT NULL REFERENCES reservations(id) ON DELETE CASCADE,
    rating SMALLINT NOT NULL DEFAULT 0,
    message TEXT
)";

/// Tables in creation order
pub const SCHEMA: [&str; 4] = [
    CREATE_USERS_SQL,
    CREATE_PROPERTIES_SQL,
    CREATE_RESERVATIONS_SQL,
    CREATE_PROPERTY_REVIEWS_SQL,
];

/// Indexes backing the listing and reservation lookups
pub const INDEXES: [&str; 4] = [
    "CREATE INDEX IF NOT EXISTS idx_properties_city ON properties (city)",
    "CREATE INDEX IF NOT EXISTS idx_properties_owner_id ON properties (owner_id)",
    "CREATE INDEX IF NOT EXISTS idx_reservations_guest_id ON reservations (guest_id)",
    "CREATE INDEX IF NOT EXISTS idx_property_reviews_property_id ON property_reviews (property_id)",
];

/// Tables in drop order
pub const TABLES_REVERSED: [&str; 4] = ["property_reviews", "reservations", "properties", "users"];

impl LightBnb {
    /// Create the schema if it does not exist
    /// If recreate is true, drops existing tables first
    pub async fn migrate(&self, recreate: bool) -> Result<(), LightBnbError> {
        if recreate {
            for table in TABLES_REVERSED {
                crate::debug_log!(table, "dropping table");
                sqlx::query(&format!("DROP TABLE IF EXISTS {} CASCADE", table))
                    .execute(self.pool())
                    .await?;
            }
        }

        for create_table_sql in SCHEMA {
            crate::trace_log!("Creating table with SQL: {}", create_table_sql);
            sqlx::query(create_table_sql).execute(self.pool()).await?;
        }

        for index_sql in INDEXES {
            crate::trace_log!("Creating index with SQL: {}", index_sql);
            sqlx::query(index_sql).execute(self.pool()).await?;
        }

        tracing::info!("lightbnb schema ready");
        Ok(())
    }
}
