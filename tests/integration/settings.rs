//! Settings file handling.

use predicates::prelude::*;
use tempfile::TempDir;

use super::depgraph_cmd;

#[test]
fn test_invalid_settings_file_via_env_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "registry = [unclosed").unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "react", "-u", "fixtures", "-m", "test"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("All parameters are valid"))
        .stderr(predicate::str::contains("Configuration error: invalid settings file"));
}

#[test]
fn test_unknown_settings_key_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(&path, "mirror = \"https://example.com\"\n").unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "react", "-u", "fixtures", "-m", "test", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_flag_overrides_env() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "not valid toml [").unwrap();
    let good = temp.path().join("good.toml");
    std::fs::write(&good, "user_agent = \"depgraph-tests\"\n").unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "react", "-u", "fixtures", "-m", "test", "--config"])
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2"));
}

#[test]
fn test_missing_settings_file_uses_defaults() {
    let temp = TempDir::new().unwrap();

    depgraph_cmd(&temp)
        .args(["-n", "lodash", "-u", "fixtures", "-m", "test", "--config", "nowhere.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package has no dependencies"));
}
