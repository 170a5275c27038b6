//! Global constants used throughout the depgraph codebase.
//!
//! Timeouts, default endpoints, and the fixture fallback live here so the
//! values the tool depends on are discoverable in one place.

use std::time::Duration;

/// Default package registry used in `remote` mode (npm's public registry).
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Total timeout for the single registry request (10 seconds).
///
/// Elapsing the timeout is reported as a transport failure.
pub const REGISTRY_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable that overrides the settings file location.
pub const CONFIG_PATH_ENV: &str = "DEPGRAPH_CONFIG_PATH";

/// File name of a manifest inside a package directory.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Placeholder printed for manifest fields that are absent.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// Version given to manifests synthesized for unknown fixture names.
pub const FALLBACK_FIXTURE_VERSION: &str = "1.0.0";

/// Dependencies of the synthesized fixture manifest, as `(name, constraint)`.
pub const FALLBACK_FIXTURE_DEPENDENCIES: [(&str, &str); 3] =
    [("dep1", "^1.0.0"), ("dep2", "^2.0.0"), ("dep3", "^3.0.0")];

/// Default `User-Agent` header for registry requests.
pub fn default_user_agent() -> String {
    format!("depgraph/{}", env!("CARGO_PKG_VERSION"))
}
