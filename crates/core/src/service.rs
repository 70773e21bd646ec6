// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query string in, issues out.

use std::time::Duration;

use tracing::{debug, error, info};

use crate::db::Database;
use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::jql::{self, Query, SqlFilter};

/// Parse, validate and compile a query without executing it.
///
/// Blank queries are rejected with [`Error::EmptyQuery`].
pub fn prepare(query: &str) -> Result<(Query, SqlFilter)> {
    if query.trim().is_empty() {
        return Err(Error::EmptyQuery);
    }
    info!(query, "compiling query");

    let parsed = jql::parse(query)?;
    jql::validate(&parsed)?;
    let filter = jql::compile(&parsed)?;

    debug!(
        where_clause = filter.where_clause().unwrap_or(""),
        params = ?filter.params(),
        order_by = ?filter.order_by(),
        "compiled query"
    );
    Ok((parsed, filter))
}

/// Runs JQL queries against a [`Database`].
pub struct IssueService<'a> {
    db: &'a Database,
    timeout: Option<Duration>,
}

impl<'a> IssueService<'a> {
    pub fn new(db: &'a Database) -> Self {
        IssueService { db, timeout: None }
    }

    /// Interrupt queries that run longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Compile a query into the filter [`Self::find_issues_by_jql`] would run.
    pub fn prepare(&self, query: &str) -> Result<SqlFilter> {
        prepare(query).map(|(_, filter)| filter)
    }

    /// Find all issues matching a query.
    pub fn find_issues_by_jql(&self, query: &str) -> Result<Vec<Issue>> {
        let filter = self.prepare(query)?;
        match self.db.find_issues(&filter, self.timeout) {
            Ok(issues) => {
                info!(results = issues.len(), "query complete");
                Ok(issues)
            }
            Err(e) => {
                error!(query, error = %e, "query failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
