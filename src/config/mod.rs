//! Run configuration and settings for depgraph.
//!
//! Two layers of configuration exist:
//!
//! - **Run configuration** ([`RawConfig`] → [`Configuration`]): the four values
//!   given on the command line. [`validate`] turns the raw candidate into a
//!   validated [`Configuration`], stopping at the first malformed field.
//! - **Settings** ([`Settings`]): an optional TOML file with the default
//!   registry and HTTP user agent, see [`settings`].

pub mod settings;
mod validation;

pub use settings::Settings;
pub use validation::validate;

use std::fmt;
use std::str::FromStr;

use crate::core::ValidationError;

/// Where the manifest for the requested package comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkMode {
    /// Read a manifest from the local filesystem
    Local,
    /// Fetch the manifest from a package registry over HTTP
    Remote,
    /// Use the built-in fixture manifests
    Test,
}

impl WorkMode {
    /// Every mode, in the order they are listed to users.
    pub const ALL: [Self; 3] = [Self::Local, Self::Remote, Self::Test];

    /// The command-line spelling of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkMode {
    type Err = ValidationError;

    /// Parse a mode. Matching is exact: `Test` or ` test` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == s).ok_or_else(|| {
            ValidationError::InvalidWorkMode {
                value: s.to_string(),
            }
        })
    }
}

/// Unvalidated configuration exactly as received from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    /// Package to analyze
    pub package_name: String,
    /// Registry URL, manifest path, or label depending on the mode
    pub source_location: String,
    /// Work mode spelling
    pub work_mode: String,
    /// Substring filter; empty means no filtering
    pub filter: String,
}

/// Validated, immutable configuration for one resolution.
///
/// Only [`validate`] constructs this type, so holding one is proof that every
/// field passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    package_name: String,
    source_location: String,
    work_mode: WorkMode,
    filter: String,
}

impl Configuration {
    /// The package to analyze.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Registry URL, manifest path, or informational label.
    #[must_use]
    pub fn source_location(&self) -> &str {
        &self.source_location
    }

    /// The selected work mode.
    #[must_use]
    pub const fn work_mode(&self) -> WorkMode {
        self.work_mode
    }

    /// The filter substring, or `None` when no filtering was requested.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        if self.filter.is_empty() {
            None
        } else {
            Some(&self.filter)
        }
    }
}
