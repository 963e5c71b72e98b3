use thiserror::Error;

/// Errors raised while turning caller input into a query
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Database error in {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// Wrap a failed statement, logging it on the way out
    pub fn database_operation(operation: &'static str, source: sqlx::Error) -> Self {
        tracing::error!(operation, error = %source, "Query error");
        StoreError::Database { operation, source }
    }
}
