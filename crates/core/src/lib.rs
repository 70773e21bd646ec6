// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jql-core: issue storage and the JQL query pipeline
//!
//! This crate provides the query language (tokenizer, parser, validator and
//! SQL compiler), the SQLite issue store that executes compiled filters, and
//! the [`IssueService`] used by the jql CLI.

pub mod db;
pub mod error;
pub mod issue;
pub mod jql;
pub mod service;

pub use db::Database;
pub use error::{Error, Result};
pub use issue::Issue;
pub use jql::{compile, parse, validate, Query, SqlFilter};
pub use service::{prepare, IssueService};
