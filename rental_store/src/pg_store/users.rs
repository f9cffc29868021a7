//! User account queries

use super::core::{execution_failed, PgStore};
use crate::errors::StoreError;
use crate::models::{NewUser, User};
use crate::traits::UserStore;
use async_trait::async_trait;

const GET_USER_WITH_EMAIL_SQL: &str = "SELECT * FROM users WHERE email = $1";
const GET_USER_WITH_ID_SQL: &str = "SELECT * FROM users WHERE id = $1";
const ADD_USER_SQL: &str = "INSERT INTO users (name, email, password)
VALUES ($1, $2, $3)
RETURNING *";

/// Emails are stored and compared in lower case
fn normalize_email(email: &str) -> Result<String, StoreError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(StoreError::validation("email cannot be empty"));
    }
    Ok(email.to_lowercase())
}

#[async_trait]
impl UserStore for PgStore {
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let email = normalize_email(email)?;

        sqlx::query_as::<_, User>(GET_USER_WITH_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| execution_failed("get_user_with_email", GET_USER_WITH_EMAIL_SQL, e))
    }

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(GET_USER_WITH_ID_SQL)
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| execution_failed("get_user_with_id", GET_USER_WITH_ID_SQL, e))
    }

    async fn add_user(&self, user: NewUser) -> Result<User, StoreError> {
        if user.name.trim().is_empty() {
            return Err(StoreError::validation("name cannot be empty"));
        }
        let email = normalize_email(&user.email)?;

        let created = sqlx::query_as::<_, User>(ADD_USER_SQL)
            .bind(user.name)
            .bind(email)
            .bind(user.password)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| execution_failed("add_user", ADD_USER_SQL, e))?;

        tracing::debug!(user_id = created.id, "user added");
        Ok(created)
    }
}
