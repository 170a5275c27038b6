//! Local mode: manifest files and test repository directories.

use depgraph_cli::test_utils::{overlapping_groups_manifest_json, write_manifest};
use predicates::prelude::*;
use tempfile::TempDir;

use super::depgraph_cmd;

#[test]
fn test_local_manifest_file_unions_groups() {
    let temp = TempDir::new().unwrap();
    let path =
        write_manifest(temp.path(), "repo/overlap.json", overlapping_groups_manifest_json()).unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "overlap", "-m", "local", "-u"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Package: overlap"))
        .stdout(predicate::str::contains("Description: N/A"))
        .stdout(predicate::str::contains(
            "  1. Alpha\n  2. alpha\n  3. beta\n  4. gamma\n  5. shared\n  6. zeta\nTotal: 6",
        ));
}

#[test]
fn test_local_directory_prefers_package_subdirectory() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "repo/package.json",
        r#"{ "name": "root", "dependencies": { "wrong": "1" } }"#,
    )
    .unwrap();
    write_manifest(
        temp.path(),
        "repo/my-app/package.json",
        r#"{ "name": "my-app", "version": "0.3.0", "devDependencies": { "jest": "^29" } }"#,
    )
    .unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "my-app", "-u", "repo", "-m", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package: my-app"))
        .stdout(predicate::str::contains("  1. jest\nTotal: 1"))
        .stdout(predicate::str::contains("wrong").not());
}

#[test]
fn test_local_filter() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "repo/package.json", overlapping_groups_manifest_json()).unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "overlap", "-u", "repo", "-m", "local", "-f", "ALPHA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Alpha\n  2. alpha\nTotal: 2"));
}

#[test]
fn test_local_missing_manifest_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "ghost", "-u", "does-not-exist", "-m", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to retrieve manifest: No manifest found"))
        .stdout(predicate::str::contains("Package has no dependencies"));
}

#[test]
fn test_local_malformed_manifest_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "broken.json", "{ not json").unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "broken", "-u", "broken.json", "-m", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid manifest from"))
        .stdout(predicate::str::contains("Package has no dependencies"));
}

#[test]
fn test_local_empty_array_group_keeps_dependencies() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "legacy.json",
        r#"{ "name": "legacy", "dependencies": { "a": "1" }, "devDependencies": [] }"#,
    )
    .unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "legacy", "-u", "legacy.json", "-m", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to retrieve manifest").not())
        .stdout(predicate::str::contains("  1. a\nTotal: 1"));
}
