// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod explain;
pub mod init;
pub mod new;
pub mod query;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::Result;
use jql_core::Database;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    tracing::debug!(path = %db_path.display(), "opening database");
    let db = Database::open(&db_path)?;
    Ok((db, config))
}
