//! Validation of the run configuration.

use tracing::debug;

use super::{Configuration, RawConfig, WorkMode};
use crate::core::ValidationError;

/// Validate a raw configuration candidate.
///
/// Rules are checked in a fixed order and the first failure wins:
///
/// 1. the package name must contain non-whitespace characters
/// 2. the source location must contain non-whitespace characters
/// 3. the work mode must be exactly `local`, `remote` or `test`
///
/// The filter is always a string and needs no check. Package name and
/// source location are stored trimmed.
///
/// # Examples
///
/// ```rust
/// use depgraph_cli::config::{RawConfig, WorkMode, validate};
///
/// let raw = RawConfig {
///     package_name: "react".to_string(),
///     source_location: "https://registry.npmjs.org".to_string(),
///     work_mode: "remote".to_string(),
///     filter: String::new(),
/// };
/// let config = validate(&raw).unwrap();
/// assert_eq!(config.work_mode(), WorkMode::Remote);
/// ```
pub fn validate(raw: &RawConfig) -> Result<Configuration, ValidationError> {
    let package_name = raw.package_name.trim();
    if package_name.is_empty() {
        return Err(ValidationError::EmptyPackageName);
    }

    let source_location = raw.source_location.trim();
    if source_location.is_empty() {
        return Err(ValidationError::EmptyRepositoryUrl);
    }

    let work_mode: WorkMode = raw.work_mode.parse()?;

    debug!("Validated configuration for '{}' in {} mode", package_name, work_mode);

    Ok(Configuration {
        package_name: package_name.to_string(),
        source_location: source_location.to_string(),
        work_mode,
        filter: raw.filter.clone(),
    })
}
