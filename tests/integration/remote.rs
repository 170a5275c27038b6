//! Remote mode against a one-shot local registry.
//!
//! The binary blocks the test thread while it runs, so the stand-in registry
//! needs a multi-threaded runtime to be served.

use depgraph_cli::test_utils::{MockRegistry, unreachable_registry_url};
use predicates::prelude::*;
use tempfile::TempDir;

use super::depgraph_cmd;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_remote_manifest() {
    let temp = TempDir::new().unwrap();
    let registry = MockRegistry::serve_once(
        200,
        r#"{
            "name": "demo",
            "version": "2.1.0",
            "description": "Demo package",
            "dependencies": { "b-lib": "^1.0.0", "a-lib": "^2.0.0" },
            "peerDependencies": { "a-lib": "*" }
        }"#,
    )
    .await
    .unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "demo", "-m", "remote", "-u", registry.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: Demo package"))
        .stdout(predicate::str::contains("  1. a-lib\n  2. b-lib\nTotal: 2"));

    assert_eq!(registry.requested_path().await.as_deref(), Some("/demo"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_remote_packument_uses_latest_version() {
    let temp = TempDir::new().unwrap();
    let registry = MockRegistry::serve_once(
        200,
        r#"{
            "name": "demo",
            "description": "Top-level description",
            "dist-tags": { "latest": "2.0.0" },
            "versions": {
                "1.0.0": { "name": "demo", "version": "1.0.0", "dependencies": { "old": "1" } },
                "2.0.0": { "name": "demo", "version": "2.0.0", "dependencies": { "new": "2" } }
            }
        }"#,
    )
    .await
    .unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "demo", "-m", "remote", "-u", registry.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version: 2.0.0"))
        .stdout(predicate::str::contains("Description: Top-level description"))
        .stdout(predicate::str::contains("  1. new\nTotal: 1"))
        .stdout(predicate::str::contains("old").not());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_remote_http_error_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let registry = MockRegistry::serve_once(404, r#"{ "error": "Not found" }"#).await.unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "missing", "-m", "remote", "-u", registry.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to retrieve manifest"))
        .stdout(predicate::str::contains("404"))
        .stdout(predicate::str::contains("Package has no dependencies"));
}

#[tokio::test]
async fn test_remote_transport_failure_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let url = unreachable_registry_url().await.unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "react", "-m", "remote", "-u", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to retrieve manifest"))
        .stdout(predicate::str::contains("Package has no dependencies"));
}
