// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "jql")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query a local issue database with a JQL-like language")]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if jql was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize the issue database
    #[command(after_help = colors::examples("\
Examples:
  jql init                 Initialize in current directory
  jql init --path ./repo   Initialize at specific location"))]
    Init {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Create a new issue
    #[command(after_help = colors::examples("\
Examples:
  jql new \"Fix login bug\"                  Open issue with medium priority
  jql new \"Fix crash\" -p high -a bob       High priority, assigned to bob
  jql new \"Old bug\" -s closed --resolved 2024-03-01   Record a resolved issue"))]
    New {
        /// Issue title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Longer description
        #[arg(long, short)]
        description: Option<String>,

        /// Initial status
        #[arg(long, short, default_value = jql_core::issue::DEFAULT_STATUS)]
        status: String,

        /// Priority (e.g., high, medium, low)
        #[arg(long, short, default_value = jql_core::issue::DEFAULT_PRIORITY)]
        priority: String,

        /// Assign the issue to someone
        #[arg(long, short)]
        assignee: Option<String>,

        /// Resolution time (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        resolved: Option<String>,
    },

    /// Find issues matching a query
    #[command(after_help = help::query_syntax())]
    Query {
        /// The query, e.g. 'status = "open" ORDER BY priority DESC'
        jql: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show how a query parses and compiles without running it
    Explain {
        /// The query to explain
        jql: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  jql completion bash > ~/.local/share/bash-completion/completions/jql
  jql completion zsh > ~/.zfunc/_jql
  jql completion fish > ~/.config/fish/completions/jql.fish"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
