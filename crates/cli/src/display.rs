// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use jql_core::jql::ParamValue;
use jql_core::{Issue, SqlFilter};

/// Format an issue as a single line: `#id [status] [priority] title (@assignee)`.
pub fn format_issue_line(issue: &Issue) -> String {
    let mut line = format!(
        "#{} [{}] [{}] {}",
        issue.id, issue.status, issue.priority, issue.title
    );
    if !issue.assignee.is_empty() {
        line.push_str(&format!(" (@{})", issue.assignee));
    }
    line
}

/// Format a bound value the way it would be written in a query.
pub fn format_param(value: &ParamValue) -> String {
    match value {
        ParamValue::Scalar(v) => format!("{v:?}"),
        ParamValue::List(items) => {
            let quoted: Vec<String> = items.iter().map(|v| format!("{v:?}")).collect();
            format!("({})", quoted.join(", "))
        }
    }
}

/// Format a compiled filter as indented `where`, `order by` and parameter lines.
pub fn format_filter(filter: &SqlFilter) -> String {
    let mut lines = vec![format!(
        "where:    {}",
        filter.where_clause().unwrap_or("(none)")
    )];
    if !filter.order_by().is_empty() {
        lines.push(format!("order by: {}", filter.order_by().join(", ")));
    }
    for (name, value) in filter.params() {
        lines.push(format!("  :{name} = {}", format_param(value)));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
