// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    empty = { Error::EmptyQuery, "empty" },
    issue_not_found = { Error::IssueNotFound(42), "42" },
    missing_value = { Error::MissingValue { operator: "=".into() }, "after operator =" },
    malformed_in = { Error::MalformedIn { field: "status".into() }, "IN operator on field 'status'" },
    timeout = { Error::QueryTimeout { timeout_ms: 250 }, "250ms" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn unknown_operator_names_field_and_token() {
    let err = Error::UnknownOperator {
        field: "status".into(),
        found: "\"open\"".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("status"));
    assert!(msg.contains("\"open\""));
    assert!(msg.contains("hint"));
}

#[parameterized(
    empty = { Error::EmptyQuery, true },
    unknown_operator = { Error::UnknownOperator { field: "a".into(), found: "~".into() }, true },
    missing_value = { Error::MissingValue { operator: "=".into() }, true },
    malformed_in = { Error::MalformedIn { field: "a".into() }, true },
    invalid_literal = { Error::InvalidLiteral { operator: "IS".into(), value: "x".into() }, true },
    invalid_query = { Error::InvalidQuery("x".into()), true },
    timeout = { Error::QueryTimeout { timeout_ms: 1 }, false },
    not_found = { Error::IssueNotFound(1), false },
    corrupted = { Error::CorruptedData("x".into()), false },
)]
fn client_error_classification(err: Error, expected: bool) {
    assert_eq!(err.is_client_error(), expected);
}

#[test]
fn execution_error_is_server_side() {
    let err = Error::Execution(rusqlite::Error::InvalidQuery);
    assert!(!err.is_client_error());
    assert!(err.to_string().starts_with("query execution failed"));
}

#[test]
fn error_from_rusqlite() {
    let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, Error::Database(_)));
}
