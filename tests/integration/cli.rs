//! Fixture-mode runs, filtering and validation failures.

use predicates::prelude::*;
use tempfile::TempDir;

use super::{depgraph_cmd, position};

#[test]
fn test_fixture_react() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "react", "-u", "fixtures", "-m", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package: react"))
        .stdout(predicate::str::contains("Version: 17.0.2"))
        .stdout(predicate::str::contains("  1. loose-envify\n  2. object-assign\nTotal: 2"));
}

#[test]
fn test_fixture_lookup_is_case_insensitive() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "REACT", "-u", "fixtures", "-m", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package: react"))
        .stdout(predicate::str::contains("Total: 2"));
}

#[test]
fn test_fixture_without_dependencies() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "lodash", "-u", "fixtures", "-m", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package has no dependencies"))
        .stdout(predicate::str::contains("Total:").not());
}

#[test]
fn test_unknown_fixture_is_synthesized() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "left-pad", "-u", "fixtures", "-m", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package: left-pad"))
        .stdout(predicate::str::contains("Version: 1.0.0"))
        .stdout(predicate::str::contains("  1. dep1\n  2. dep2\n  3. dep3\nTotal: 3"));
}

#[test]
fn test_filter_is_case_insensitive() {
    let temp = TempDir::new().unwrap();

    let upper = depgraph_cmd(&temp)
        .args(["-n", "express", "-u", "fixtures", "-m", "test", "-f", "BODY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: BODY"))
        .stdout(predicate::str::contains("  1. body-parser\nTotal: 1"));
    let upper = String::from_utf8_lossy(&upper.get_output().stdout).into_owned();

    let lower = depgraph_cmd(&temp)
        .args(["-n", "express", "-u", "fixtures", "-m", "test", "-f", "body"])
        .assert()
        .success();
    let lower = String::from_utf8_lossy(&lower.get_output().stdout).into_owned();

    let list = |out: &str| out[position(out, "Direct dependencies:")..].to_string();
    assert_eq!(list(&upper), list(&lower));
}

#[test]
fn test_filter_without_matches() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "vue", "-u", "fixtures", "-m", "test", "--filter", "react"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package has no dependencies"));
}

#[test]
fn test_output_order() {
    let temp = TempDir::new().unwrap();

    let assert = depgraph_cmd(&temp)
        .args(["-n", "vue", "-u", "fixtures", "-m", "test", "-f", "shared"])
        .assert()
        .success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    let echo = position(&out, "===== Run settings =====");
    let valid = position(&out, "All parameters are valid");
    let header = position(&out, "Analyzing package: vue");
    let summary = position(&out, "Package: vue");
    let list = position(&out, "  1. @vue/shared");
    let total = position(&out, "Total: 1");

    assert!(echo < valid);
    assert!(valid < header);
    assert!(header < summary);
    assert!(summary < list);
    assert!(list < total);
}

#[test]
fn test_empty_package_name_fails_after_echo() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "  ", "-u", "fixtures", "-m", "test"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("===== Run settings ====="))
        .stdout(predicate::str::contains("All parameters are valid").not())
        .stderr(predicate::str::contains("Invalid configuration: package name cannot be empty"));
}

#[test]
fn test_empty_repo_url_fails() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "react", "-u", "", "-m", "test"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("repository URL cannot be empty"));
}

#[test]
fn test_first_violation_wins() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "", "-u", "", "-m", "cloud"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("package name cannot be empty"))
        .stderr(predicate::str::contains("repository URL").not())
        .stderr(predicate::str::contains("invalid work mode").not());
}

#[test]
fn test_invalid_work_mode_is_echoed_then_rejected() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "react", "-u", "fixtures", "-m", "Remote"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Work mode      : Remote"))
        .stderr(predicate::str::contains("invalid work mode; allowed values: local, remote, test"))
        .stderr(predicate::str::contains("suggestion:"));
}

#[test]
fn test_missing_required_argument_is_usage_error() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "react", "-m", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--repo_url"));
}
