//! Integration test suite for depgraph
//!
//! These tests run the `depgraph` binary end to end and check its console
//! contract and exit codes.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: fixture mode, filtering, validation failures and output order
//! - **local**: manifests read from files and test repository directories
//! - **remote**: registry fetches against a local one-shot HTTP server
//! - **settings**: settings file handling

use assert_cmd::Command;
use tempfile::TempDir;

mod cli;
mod local;
mod remote;
mod settings;

/// The binary under test, isolated from the user's environment.
///
/// The settings file points at a path inside `temp` that does not exist, so
/// defaults apply unless a test writes it. Colors and proxies are disabled.
pub fn depgraph_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("depgraph").unwrap();
    cmd.current_dir(temp.path())
        .env("DEPGRAPH_CONFIG_PATH", temp.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("HTTPS_PROXY")
        .env_remove("https_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy");
    cmd
}

/// Index of `needle` in `haystack`, panicking with context when absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack.find(needle).unwrap_or_else(|| panic!("{needle:?} not found in:\n{haystack}"))
}
