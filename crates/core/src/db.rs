// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for issue storage.
//!
//! The [`Database`] struct stores issues and executes compiled
//! [`SqlFilter`]s against them.

use chrono::{DateTime, Utc};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection, ErrorCode, InterruptHandle, OptionalExtension, Row};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::jql::{ParamValue, SqlFilter, ENTITY_ALIAS};

/// SQL schema for the issue database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS issues (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT 'open',
    assignee TEXT NOT NULL DEFAULT '',
    priority TEXT NOT NULL DEFAULT 'medium',
    resolved TEXT,                -- RFC 3339, NULL while unresolved
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_issues_status ON issues(status);
CREATE INDEX IF NOT EXISTS idx_issues_priority ON issues(priority);
CREATE INDEX IF NOT EXISTS idx_issues_assignee ON issues(assignee);
"#;

/// Columns selected for every issue read, in [`issue_from_row`] order.
const ISSUE_COLUMNS: [&str; 9] = [
    "id",
    "title",
    "description",
    "status",
    "assignee",
    "priority",
    "resolved",
    "created_at",
    "updated_at",
];

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Parse an optional RFC3339 timestamp from the database.
fn parse_timestamp_opt(
    value: Option<String>,
    column: &str,
) -> std::result::Result<Option<DateTime<Utc>>, rusqlite::Error> {
    value.map(|s| parse_timestamp(&s, column)).transpose()
}

fn issue_from_row(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    let resolved: Option<String> = row.get(6)?;
    let created_str: String = row.get(7)?;
    let updated_str: String = row.get(8)?;

    Ok(Issue {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: row.get(3)?,
        assignee: row.get(4)?,
        priority: row.get(5)?,
        resolved: parse_timestamp_opt(resolved, "resolved")?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
    })
}

/// Unwrap a [`Error::CorruptedData`] carried through rusqlite's row mapping.
fn unwrap_corruption(err: rusqlite::Error) -> std::result::Result<Error, rusqlite::Error> {
    match err {
        rusqlite::Error::FromSqlConversionFailure(col, ty, source) => {
            match source.downcast::<Error>() {
                Ok(inner) => Ok(*inner),
                Err(source) => Err(rusqlite::Error::FromSqlConversionFailure(col, ty, source)),
            }
        }
        other => Err(other),
    }
}

fn storage_error(err: rusqlite::Error) -> Error {
    unwrap_corruption(err).unwrap_or_else(Error::Database)
}

fn execution_error(err: rusqlite::Error) -> Error {
    unwrap_corruption(err).unwrap_or_else(Error::Execution)
}

fn is_interrupt(err: &rusqlite::Error) -> bool {
    err.sqlite_error_code() == Some(ErrorCode::OperationInterrupted)
}

/// Run schema creation on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Render the SELECT statement for a filter.
///
/// List placeholders `(:...name)` are expanded to one placeholder per
/// element. Returns the SQL and the bindings keyed by full placeholder name.
pub fn render_select(filter: &SqlFilter) -> (String, Vec<(String, String)>) {
    let mut where_clause = filter.where_clause().map(str::to_string);
    let mut bindings = Vec::with_capacity(filter.params().len());

    for (name, value) in filter.params() {
        match value {
            ParamValue::Scalar(v) => bindings.push((format!(":{name}"), v.clone())),
            ParamValue::List(items) => {
                let names: Vec<String> =
                    (0..items.len()).map(|i| format!(":{name}_{i}")).collect();
                if let Some(clause) = where_clause.as_mut() {
                    let expanded = format!("({})", names.join(", "));
                    *clause = clause.replace(&format!("(:...{name})"), &expanded);
                }
                bindings.extend(names.into_iter().zip(items.iter().cloned()));
            }
        }
    }

    let columns = ISSUE_COLUMNS
        .iter()
        .map(|c| format!("{ENTITY_ALIAS}.{c}"))
        .collect::<Vec<_>>()
        .join(", ");
    let mut sql = format!("SELECT {columns} FROM issues AS {ENTITY_ALIAS}");
    if let Some(clause) = where_clause {
        sql.push_str(" WHERE ");
        sql.push_str(&clause);
    }
    if !filter.order_by().is_empty() {
        sql.push_str(" ORDER BY ");
        sql.push_str(&filter.order_by().join(", "));
    }
    (sql, bindings)
}

/// Interrupts a connection if it is not stopped before the deadline.
struct Watchdog {
    done: Sender<()>,
    thread: JoinHandle<bool>,
}

impl Watchdog {
    fn start(handle: InterruptHandle, timeout: Duration) -> Self {
        let (done, rx) = mpsc::channel::<()>();
        let thread = std::thread::spawn(move || match rx.recv_timeout(timeout) {
            Err(RecvTimeoutError::Timeout) => {
                handle.interrupt();
                true
            }
            _ => false,
        });
        Watchdog { done, thread }
    }

    /// Stop the watchdog; returns true if it fired.
    fn finish(self) -> bool {
        drop(self.done);
        self.thread.join().unwrap_or(false)
    }
}

/// SQLite database connection with issue operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Insert an issue, ignoring its `id`. Returns the assigned id.
    pub fn create_issue(&self, issue: &Issue) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO issues (title, description, status, assignee, priority,
             resolved, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                issue.title,
                issue.description,
                issue.status,
                issue.assignee,
                issue.priority,
                issue.resolved.map(|dt| dt.to_rfc3339()),
                issue.created_at.to_rfc3339(),
                issue.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get an issue by ID.
    pub fn get_issue(&self, id: i64) -> Result<Issue> {
        let issue = self
            .conn
            .query_row(
                &format!("SELECT {} FROM issues WHERE id = ?1", ISSUE_COLUMNS.join(", ")),
                params![id],
                issue_from_row,
            )
            .optional()
            .map_err(storage_error)?;

        issue.ok_or(Error::IssueNotFound(id))
    }

    /// Count all stored issues.
    pub fn count_issues(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM issues", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Execute a compiled filter and return the matching issues.
    ///
    /// With a timeout, the running statement is interrupted once it elapses
    /// and the call fails with [`Error::QueryTimeout`].
    pub fn find_issues(
        &self,
        filter: &SqlFilter,
        timeout: Option<Duration>,
    ) -> Result<Vec<Issue>> {
        let (sql, bindings) = render_select(filter);
        let watchdog = timeout.map(|t| Watchdog::start(self.conn.get_interrupt_handle(), t));

        let result = self.select_issues(&sql, &bindings);

        let fired = watchdog.map(Watchdog::finish).unwrap_or(false);
        match result {
            Err(err) if fired && is_interrupt(&err) => Err(Error::QueryTimeout {
                timeout_ms: timeout
                    .map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX))
                    .unwrap_or_default(),
            }),
            Err(err) => Err(execution_error(err)),
            Ok(issues) => Ok(issues),
        }
    }

    fn select_issues(
        &self,
        sql: &str,
        bindings: &[(String, String)],
    ) -> std::result::Result<Vec<Issue>, rusqlite::Error> {
        let named: Vec<(&str, &dyn ToSql)> = bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
            .collect();

        let mut stmt = self.conn.prepare(sql)?;
        let issues = stmt
            .query_map(named.as_slice(), issue_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(issues)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
