// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use jql_core::Database;

use crate::config::{get_db_path, init_work_dir, write_gitignore, Config};
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let work_dir = run_impl(&target_path)?;
    println!("Initialized issue database at {}", work_dir.display());
    Ok(())
}

/// Create `.jql/` with a default config, the database and a `.gitignore`.
pub(crate) fn run_impl(target_path: &Path) -> Result<PathBuf> {
    let work_dir = init_work_dir(target_path)?;
    let config = Config::load(&work_dir)?;
    Database::open(&get_db_path(&work_dir, &config))?;
    write_gitignore(&work_dir)?;
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
