//! Console report for a single resolution run.
//!
//! Every section is rendered to a `String` so the layout can be tested
//! without capturing stdout. [`super::Cli`] prints the sections in order:
//!
//! 1. run settings echo ([`settings_block`])
//! 2. validation result (printed by the CLI)
//! 3. analysis header ([`analysis_header`])
//! 4. manifest summary ([`manifest_summary`]) or retrieval failure
//!    ([`retrieval_failure`])
//! 5. dependency list ([`dependency_list`])

use colored::Colorize;
use std::fmt::Write;

use crate::config::{Configuration, RawConfig};
use crate::constants::MISSING_FIELD_PLACEHOLDER;
use crate::core::RetrievalError;
use crate::manifest::Manifest;
use crate::resolver::DependencyList;

const NOT_SET: &str = "(not set)";

/// Echo of the four raw run values, printed before validation.
#[must_use]
pub fn settings_block(raw: &RawConfig) -> String {
    let filter = if raw.filter.is_empty() {
        NOT_SET
    } else {
        raw.filter.as_str()
    };

    let mut out = String::new();
    let _ = writeln!(out, "===== Run settings =====");
    let _ = writeln!(out, "Package name   : {}", raw.package_name);
    let _ = writeln!(out, "Repository URL : {}", raw.source_location);
    let _ = writeln!(out, "Work mode      : {}", raw.work_mode);
    let _ = writeln!(out, "Package filter : {filter}");
    let _ = write!(out, "========================");
    out
}

/// Header naming what is about to be analysed.
#[must_use]
pub fn analysis_header(config: &Configuration) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Analyzing package: {}", config.package_name().bold());
    let _ = writeln!(out, "Mode: {}", config.work_mode());
    let _ = write!(out, "Source: {}", config.source_location());
    if let Some(filter) = config.filter() {
        let _ = write!(out, "\nFilter: {filter}");
    }
    out
}

/// Name, version and description of the retrieved manifest.
#[must_use]
pub fn manifest_summary(manifest: &Manifest) -> String {
    let name = if manifest.name.is_empty() {
        MISSING_FIELD_PLACEHOLDER
    } else {
        manifest.name.as_str()
    };
    let version = manifest.version.as_deref().unwrap_or(MISSING_FIELD_PLACEHOLDER);
    let description = manifest.description.as_deref().unwrap_or(MISSING_FIELD_PLACEHOLDER);

    format!("Package: {name}\nVersion: {version}\nDescription: {description}")
}

/// Line reporting that the manifest could not be retrieved.
#[must_use]
pub fn retrieval_failure(error: &RetrievalError) -> String {
    format!("{} Failed to retrieve manifest: {}", "✗".red(), error)
}

/// Enumerated dependency list with its total, or the empty message.
#[must_use]
pub fn dependency_list(dependencies: &DependencyList) -> String {
    if dependencies.is_empty() {
        return "Package has no dependencies".to_string();
    }

    let mut out = String::from("Direct dependencies:\n");
    for (index, name) in dependencies.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, name);
    }
    let _ = write!(out, "Total: {}", dependencies.len());
    out
}
