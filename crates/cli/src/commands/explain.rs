// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use jql_core::db::render_select;
use jql_core::{Query, SqlFilter};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::display::format_filter;
use crate::envelope;
use crate::error::Result;

#[derive(Serialize)]
struct ExplainJson<'a> {
    query: &'a Query,
    filter: &'a SqlFilter,
    sql: String,
}

pub fn run(jql: &str, output: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let result = run_impl(jql, output, &mut stdout.lock());

    if let (Err(e), OutputFormat::Json) = (&result, output) {
        envelope::print_failure(e);
    }
    result
}

/// Print the parsed query, the compiled filter and the final SELECT.
pub(crate) fn run_impl(jql: &str, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let (query, filter) = jql_core::prepare(jql)?;
    let (sql, _) = render_select(&filter);

    match output {
        OutputFormat::Text => {
            writeln!(out, "{}", format_filter(&filter))?;
            writeln!(out, "sql:      {sql}")?;
        }
        OutputFormat::Json => {
            let explain = ExplainJson {
                query: &query,
                filter: &filter,
                sql,
            };
            serde_json::to_writer_pretty(&mut *out, &explain)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
