// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jqlrs - command-line front end for the jql issue query language.
//!
//! This crate provides the `jql` CLI: project setup, issue creation, and
//! running or explaining queries against a local SQLite database.
//!
//! # Main Components
//!
//! - [`Cli`] - Command-line definition
//! - [`Config`] - Project configuration (database location, query timeout)
//! - [`Error`] - Error types and their exit codes
//!
//! # Initialization
//!
//! ```rust,ignore
//! use jqlrs::{find_work_dir, get_db_path, init_work_dir, Config};
//!
//! let work_dir = init_work_dir(Path::new("."))?;
//!
//! // Later, find and open an existing project
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = jql_core::Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod envelope;
pub mod env;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::New {
            title,
            description,
            status,
            priority,
            assignee,
            resolved,
        } => commands::new::run(title, description, status, priority, assignee, resolved),
        Command::Query { jql, output } => commands::query::run(&jql, output),
        Command::Explain { jql, output } => commands::explain::run(&jql, output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "jql", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
