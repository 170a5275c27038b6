//! Manifest acquisition strategies.
//!
//! Each work mode maps to exactly one [`ManifestSource`] variant. The variant
//! is chosen once per resolution and only decides where the manifest comes
//! from; everything downstream of [`ManifestSource::fetch`] is shared.
//!
//! | Mode     | Variant                              | `--repo_url` means              |
//! |----------|--------------------------------------|---------------------------------|
//! | `test`   | [`ManifestSource::TestFixture`]      | informational label             |
//! | `local`  | [`ManifestSource::LocalFile`]        | manifest file or directory      |
//! | `remote` | [`ManifestSource::RemoteRegistry`]   | registry base URL override      |

pub mod fixtures;
pub mod local;
pub mod registry;

pub use registry::RegistryClient;

use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::{Configuration, Settings, WorkMode};
use crate::core::RetrievalError;
use crate::manifest::Manifest;

/// Where a manifest is read from.
#[derive(Debug, Clone)]
pub enum ManifestSource {
    /// Built-in fixture table
    TestFixture,
    /// Manifest file or test repository directory on disk
    LocalFile(PathBuf),
    /// npm-compatible registry over HTTP
    RemoteRegistry(RegistryClient),
}

impl ManifestSource {
    /// Select the source for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::Transport`] if the HTTP client for remote
    /// mode cannot be created.
    pub fn for_config(config: &Configuration, settings: &Settings) -> Result<Self, RetrievalError> {
        let source = match config.work_mode() {
            WorkMode::Test => Self::TestFixture,
            WorkMode::Local => Self::LocalFile(PathBuf::from(config.source_location())),
            WorkMode::Remote => {
                let base_url = registry_base_url(config.source_location(), settings);
                Self::RemoteRegistry(RegistryClient::new(base_url, &settings.user_agent())?)
            }
        };
        debug!("Using manifest source: {}", source);
        Ok(source)
    }

    /// Fetch the manifest of `package_name` from this source.
    ///
    /// # Errors
    ///
    /// Returns a [`RetrievalError`] for any failure to read or parse the
    /// manifest. Test fixtures never fail.
    pub async fn fetch(&self, package_name: &str) -> Result<Manifest, RetrievalError> {
        match self {
            Self::TestFixture => Ok(fixtures::fixture_manifest(package_name)),
            Self::LocalFile(location) => local::read_manifest(location, package_name).await,
            Self::RemoteRegistry(client) => client.fetch_manifest(package_name).await,
        }
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TestFixture => write!(f, "built-in fixtures"),
            Self::LocalFile(path) => write!(f, "local file {}", path.display()),
            Self::RemoteRegistry(client) => write!(f, "registry {}", client.base_url()),
        }
    }
}

/// Registry base URL for remote mode.
///
/// An `http://` or `https://` `source_location` overrides the registry;
/// anything else is only a label and the configured registry is used.
#[must_use]
pub fn registry_base_url(source_location: &str, settings: &Settings) -> String {
    if is_http_url(source_location) {
        source_location.trim_end_matches('/').to_string()
    } else {
        warn!(
            "'{}' is not an http(s) URL; using registry {}",
            source_location,
            settings.registry_url()
        );
        settings.registry_url().trim_end_matches('/').to_string()
    }
}

fn is_http_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
