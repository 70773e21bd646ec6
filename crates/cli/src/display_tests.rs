// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Utc;

#[test]
fn issue_line_without_assignee() {
    let mut issue = Issue::new("Fix login", Utc::now());
    issue.id = 7;
    assert_eq!(format_issue_line(&issue), "#7 [open] [medium] Fix login");
}

#[test]
fn issue_line_with_assignee() {
    let mut issue = Issue::new("Fix login", Utc::now());
    issue.id = 7;
    issue.assignee = "bob".to_string();
    issue.priority = "high".to_string();
    assert_eq!(
        format_issue_line(&issue),
        "#7 [open] [high] Fix login (@bob)"
    );
}

#[test]
fn params_are_quoted() {
    assert_eq!(
        format_param(&ParamValue::Scalar("open".to_string())),
        "\"open\""
    );
    assert_eq!(
        format_param(&ParamValue::List(vec!["a".to_string(), "b".to_string()])),
        "(\"a\", \"b\")"
    );
}

#[test]
fn filter_lists_clause_order_and_params() {
    let (_, filter) =
        jql_core::prepare(r#"status = "open" AND priority IN (high, low) ORDER BY id DESC"#)
            .unwrap();
    assert_eq!(
        format_filter(&filter),
        "where:    issue.status = :value0 AND issue.priority IN (:...values1)\n\
         order by: issue.id DESC\n  \
         :value0 = \"open\"\n  \
         :values1 = (\"high\", \"low\")"
    );
}

#[test]
fn empty_filter_has_no_where_clause() {
    assert_eq!(format_filter(&SqlFilter::default()), "where:    (none)");
}
