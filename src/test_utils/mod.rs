//! Test utilities for depgraph.
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration test suite.

pub mod registry;

pub use registry::{MockRegistry, unreachable_registry_url};

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays
/// off. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Write `content` as a manifest file `relative` under `root`, creating parent
/// directories. Returns the full path.
pub fn write_manifest(root: &Path, relative: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;
    Ok(path)
}

/// A manifest declaring overlapping names in all four dependency groups.
#[must_use]
pub fn overlapping_groups_manifest_json() -> &'static str {
    r#"{
    "name": "overlap",
    "version": "0.1.0",
    "dependencies": { "zeta": "^1.0.0", "Alpha": "^1.0.0", "shared": "^1.0.0" },
    "devDependencies": { "shared": "^2.0.0", "beta": "^1.0.0" },
    "peerDependencies": { "zeta": ">=1", "gamma": "*" },
    "optionalDependencies": { "beta": "^1.0.0", "alpha": "^1.0.0" }
}"#
}
