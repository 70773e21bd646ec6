// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn creates_work_dir() {
    let temp = TempDir::new().unwrap();

    jql()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized issue database"));

    assert!(temp.path().join(".jql").is_dir());
    assert!(temp.path().join(".jql/config.toml").exists());
    assert!(temp.path().join(".jql/issues.db").exists());
}

#[test]
fn fails_if_already_initialized() {
    let temp = init_temp();

    jql()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn init_with_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("project");

    jql()
        .args(["init", "--path"])
        .arg(&target)
        .assert()
        .success();

    assert!(target.join(".jql/issues.db").exists());
}

#[test]
fn commands_fail_when_not_initialized() {
    let temp = TempDir::new().unwrap();

    jql()
        .args(["query", "id = 1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("jql init"));
}

#[test]
fn finds_work_dir_from_subdirectory() {
    let temp = init_temp();
    let sub = temp.path().join("a").join("b");
    std::fs::create_dir_all(&sub).unwrap();

    jql()
        .args(["new", "From below"])
        .current_dir(&sub)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created issue #1"));
}

#[test]
fn directory_flag_changes_working_directory() {
    let temp = init_temp();

    jql()
        .arg("-C")
        .arg(temp.path())
        .args(["new", "Via -C"])
        .assert()
        .success();

    jql()
        .arg("-C")
        .arg(temp.path())
        .args(["query", "id = 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Via -C"));
}

#[test]
fn directory_flag_with_missing_path() {
    jql()
        .args(["-C", "/definitely/not/here", "query", "id = 1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot change to directory"));
}
