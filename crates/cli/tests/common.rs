// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn jql() -> Command {
    let mut cmd = cargo_bin_cmd!("jql");
    cmd.env_remove("JQL_LOG").env("NO_COLOR", "1");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    jql().arg("init").current_dir(temp.path()).assert().success();
    temp
}

/// Helper to create an issue and return its ID
pub fn create_issue(temp: &TempDir, title: &str, args: &[&str]) -> i64 {
    let output = jql()
        .arg("new")
        .arg(title)
        .args(args)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "jql new failed: {output:?}");

    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .find_map(|s| s.strip_prefix('#'))
        .unwrap()
        .parse()
        .unwrap()
}

/// Initialized directory with issues 1..=4:
/// 1 open/high/bob, 2 closed/low/alice (resolved), 3 open/medium/alice, 4 open/low
pub fn seeded_temp() -> TempDir {
    let temp = init_temp();
    create_issue(&temp, "Login fails", &["-p", "high", "-a", "bob"]);
    create_issue(
        &temp,
        "Typo in footer",
        &["-s", "closed", "-p", "low", "-a", "alice", "--resolved", "2024-03-01"],
    );
    create_issue(&temp, "Slow search", &["-a", "alice"]);
    create_issue(&temp, "Crash on startup", &["-p", "low"]);
    temp
}

/// Run a JSON query and return the parsed envelope.
pub fn query_json(temp: &TempDir, jql_text: &str) -> serde_json::Value {
    let output = jql()
        .args(["query", jql_text, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Ids in a success envelope, in result order.
pub fn ids(envelope: &serde_json::Value) -> Vec<i64> {
    envelope["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["id"].as_i64().unwrap())
        .collect()
}
