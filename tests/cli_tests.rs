//! CLI integration tests using the REAL flatdeploy binary

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    let workspace = common::TestWorkspace::new();
    common::flatdeploy_cmd(&workspace.path)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("patterns"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    let workspace = common::TestWorkspace::new();
    common::flatdeploy_cmd(&workspace.path)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flatdeploy"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_patterns_output() {
    let workspace = common::TestWorkspace::new();
    common::flatdeploy_cmd(&workspace.path)
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains(r"\.so(\.\d+)*$"))
        .stdout(predicate::str::contains(".dylib"))
        .stdout(predicate::str::contains(".dll"));
}

#[test]
fn test_completions_bash() {
    let workspace = common::TestWorkspace::new();
    common::flatdeploy_cmd(&workspace.path)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flatdeploy"));
}

#[test]
fn test_completions_unknown_shell() {
    let workspace = common::TestWorkspace::new();
    common::flatdeploy_cmd(&workspace.path)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_deploy_requires_manifest_argument() {
    let workspace = common::TestWorkspace::new();
    common::flatdeploy_cmd(&workspace.path)
        .arg("deploy")
        .assert()
        .failure();
}
