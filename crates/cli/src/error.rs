// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the jqlrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'jql init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("invalid timestamp: {reason}\n  hint: use RFC 3339 (2024-03-01T12:00:00Z) or a date (2024-03-01)")]
    InvalidTimestamp { reason: String },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error(transparent)]
    Query(#[from] jql_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Exit status for errors caused by the user's query.
pub const EXIT_CLIENT_ERROR: i32 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

impl Error {
    /// Returns true if the query text itself was at fault.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Query(e) => e.is_client_error(),
            _ => false,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_client_error() {
            EXIT_CLIENT_ERROR
        } else {
            EXIT_FAILURE
        }
    }
}

/// A specialized Result type for jqlrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
