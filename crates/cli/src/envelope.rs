// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON envelopes printed by `query -o json` and `explain -o json`.

use serde::Serialize;

use crate::error::Error;

/// Successful query result.
#[derive(Debug, Serialize)]
pub struct Success<'a, T: Serialize> {
    pub status: &'static str,
    pub results: usize,
    pub data: &'a [T],
}

impl<'a, T: Serialize> Success<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Success {
            status: "success",
            results: data.len(),
            data,
        }
    }
}

/// Failed command. `status` is `fail` for client errors and `error` otherwise.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Failure {
    pub status: &'static str,
    pub message: String,
}

impl From<&Error> for Failure {
    fn from(err: &Error) -> Self {
        Failure {
            status: if err.is_client_error() { "fail" } else { "error" },
            message: err.to_string(),
        }
    }
}

/// Print a failure envelope to stdout.
pub fn print_failure(err: &Error) {
    match serde_json::to_string_pretty(&Failure::from(err)) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "failed to serialize error envelope"),
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
