use thiserror::Error;

/// Errors returned by the LightBnB stores
///
/// Execution failures are always surfaced as [`StoreError::QueryExecution`];
/// an empty result is only ever returned when the query succeeded and matched nothing.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Query execution failed in {operation}: {source}")]
    QueryExecution {
        operation: &'static str,
        sql: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl StoreError {
    pub fn query_execution(operation: &'static str, sql: &str, source: sqlx::Error) -> Self {
        Self::QueryExecution {
            operation,
            sql: sql.to_string(),
            source,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True when the database rejected or failed to run the statement
    pub fn is_query_execution(&self) -> bool {
        matches!(self, Self::QueryExecution { .. })
    }
}
