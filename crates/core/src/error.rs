// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jql-core operations.

use thiserror::Error;

/// All possible errors that can occur in jql-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("query cannot be empty\n  hint: try something like: status = \"open\"")]
    EmptyQuery,

    #[error("unknown operator '{found}' after field '{field}'\n  hint: valid operators are: =, !=, >, <, >=, <=, IN, IS, IS NOT, CONTAINS")]
    UnknownOperator { field: String, found: String },

    #[error("expected value after operator {operator}")]
    MissingValue { operator: String },

    #[error("expected parentheses for IN operator on field '{field}'\n  hint: write {field} IN (\"a\", \"b\")")]
    MalformedIn { field: String },

    #[error("invalid literal '{value}' for {operator}\n  hint: {operator} accepts NULL, TRUE or FALSE")]
    InvalidLiteral { operator: String, value: String },

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("query execution failed: {0}")]
    Execution(#[source] rusqlite::Error),

    #[error("query exceeded timeout of {timeout_ms}ms")]
    QueryTimeout { timeout_ms: u64 },

    #[error("issue not found: {0}")]
    IssueNotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the error was caused by the query text rather than
    /// by the storage layer.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyQuery
                | Error::UnknownOperator { .. }
                | Error::MissingValue { .. }
                | Error::MalformedIn { .. }
                | Error::InvalidLiteral { .. }
                | Error::InvalidQuery(_)
        )
    }
}

/// A specialized Result type for jql-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
