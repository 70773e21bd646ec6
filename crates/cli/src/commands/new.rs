// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, NaiveDate, Utc};
use jql_core::{Database, Issue};

use super::open_db;
use crate::error::{Error, Result};

pub fn run(
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    assignee: Option<String>,
    resolved: Option<String>,
) -> Result<()> {
    let (db, _config) = open_db()?;
    let id = run_impl(&db, title, description, status, priority, assignee, resolved)?;
    println!("Created issue #{id}");
    Ok(())
}

pub(crate) fn run_impl(
    db: &Database,
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    assignee: Option<String>,
    resolved: Option<String>,
) -> Result<i64> {
    if status.trim().is_empty() {
        return Err(Error::FieldEmpty { field: "status" });
    }
    if priority.trim().is_empty() {
        return Err(Error::FieldEmpty { field: "priority" });
    }

    let mut issue = Issue::new(title.trim(), Utc::now());
    issue.description = description.unwrap_or_default();
    issue.status = status;
    issue.priority = priority;
    issue.assignee = assignee.unwrap_or_default();
    issue.resolved = resolved.as_deref().map(parse_timestamp).transpose()?;

    let id = db.create_issue(&issue)?;
    tracing::info!(id, "created issue");
    Ok(id)
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidTimestamp {
            reason: format!("'{value}' is not a date or RFC 3339 timestamp"),
        })
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
