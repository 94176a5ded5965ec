//! Error types for the Stayhaus crate
//!
//! This module contains all error types that can be returned by Stayhaus
//! operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StayhausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("{table}.{operation} failed: {source}")]
    QueryExecution {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StayhausError {
    /// Attach table/operation context to a failed query
    pub fn query_execution(
        table: &'static str,
        operation: &'static str,
        source: sqlx::Error,
    ) -> Self {
        Self::QueryExecution {
            table,
            operation,
            source,
        }
    }
}
