// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The issue entity.
//!
//! Status, priority and assignee are free-form text so that queries compare
//! exactly what was stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status given to new issues when none is specified.
pub const DEFAULT_STATUS: &str = "open";

/// Priority given to new issues when none is specified.
pub const DEFAULT_PRIORITY: &str = "medium";

/// A tracked work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Row id, assigned by the database on insert.
    pub id: i64,
    /// Short description of the work.
    pub title: String,
    /// Longer description providing context.
    pub description: String,
    /// Workflow state (e.g., open, in progress, closed).
    pub status: String,
    /// Person this issue is assigned to; empty when unassigned.
    pub assignee: String,
    /// Priority (e.g., high, medium, low).
    pub priority: String,
    /// When the issue was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<DateTime<Utc>>,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Creates an unsaved issue with default status and priority.
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Issue {
            id: 0,
            title: title.into(),
            description: String::new(),
            status: DEFAULT_STATUS.to_string(),
            assignee: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            resolved: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns true if the issue has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
