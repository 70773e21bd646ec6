// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use jql_core::{Database, IssueService};

use super::open_db;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_issue_line;
use crate::envelope::{self, Success};
use crate::error::Result;

pub fn run(jql: &str, output: OutputFormat) -> Result<()> {
    let result = open_db().and_then(|(db, config)| {
        let stdout = std::io::stdout();
        run_impl(&db, &config, jql, output, &mut stdout.lock())
    });

    if let (Err(e), OutputFormat::Json) = (&result, output) {
        envelope::print_failure(e);
    }
    result
}

pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    jql: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut service = IssueService::new(db);
    if let Some(timeout) = config.query_timeout() {
        service = service.with_timeout(timeout);
    }
    let issues = service.find_issues_by_jql(jql)?;

    match output {
        OutputFormat::Text => {
            for issue in &issues {
                writeln!(out, "{}", format_issue_line(issue))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &Success::new(&issues))?;
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
