// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(QUICKSTART)
}

/// Query language reference shown after `jql query --help`.
pub fn query_syntax() -> String {
    colors::examples(QUERY_SYNTAX)
}

const QUICKSTART: &str = "\
Get started:
  jql init                              Create .jql/ and the database
  jql new \"Fix login\" -p high           Add an issue
  jql query 'status = \"open\"'           Find open issues
  jql explain 'priority IN (high, low)'  Show the compiled SQL";

const QUERY_SYNTAX: &str = "\
Examples:
  jql query 'status = \"open\"'                           Open issues
  jql query 'status = \"open\" AND priority = \"high\"'     Both must match
  jql query '(status = \"open\" OR status = \"closed\") AND assignee = \"bob\"'  Grouping
  jql query 'priority IN (\"high\", \"medium\")'            Membership
  jql query 'resolved IS NULL ORDER BY created_at DESC'  Unresolved, newest first
  jql query 'title CONTAINS \"%crash%\"'                  SQL LIKE pattern
  jql query 'NOT assignee = \"bob\"' -o json              JSON envelope

Operators:
  =  !=  >  <  >=  <=   compare with a value
  IN (a, b)             membership in a list
  CONTAINS              LIKE pattern, include % yourself
  IS, IS NOT            NULL, TRUE or FALSE

Logical keywords:
  AND  OR  NOT          apply to every following condition at the same level";

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
