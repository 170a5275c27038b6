//! Optional user settings file.
//!
//! Settings live in a small TOML file. Every key is optional and a missing
//! file is the same as an empty one.
//!
//! # Location
//!
//! The first of these that applies is used:
//! 1. the `--config <path>` command-line option
//! 2. the `DEPGRAPH_CONFIG_PATH` environment variable
//! 3. `~/.depgraph/config.toml` (`%LOCALAPPDATA%\depgraph\config.toml` on Windows)
//!
//! # Format
//!
//! ```toml
//! # Registry used in remote mode when --repo_url is not an http(s) URL
//! registry = "https://registry.npmjs.org"
//!
//! # User-Agent header for registry requests
//! user_agent = "depgraph/0.2.0 (ci)"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_REGISTRY_URL, default_user_agent};
use crate::core::DepgraphError;

/// User settings loaded from the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Default registry base URL for remote mode.
    #[serde(default)]
    pub registry: Option<String>,

    /// `User-Agent` header sent with registry requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Settings {
    /// Load settings from an optional explicit path.
    ///
    /// Without a path, `DEPGRAPH_CONFIG_PATH` and then the default location
    /// are used. A file that does not exist yields default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid settings TOML.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => match std::env::var_os(CONFIG_PATH_ENV) {
                Some(path) => PathBuf::from(path),
                None => match Self::default_path() {
                    Ok(path) => path,
                    Err(_) => return Ok(Self::default()),
                },
            },
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            debug!("No settings file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: Self = toml::from_str(&content).map_err(|e| DepgraphError::ConfigError {
            message: format!("invalid settings file {}: {}", path.display(), e),
        })?;

        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Default platform-specific settings path.
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or local data) directory is unknown.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("depgraph")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".depgraph")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Registry base URL, falling back to the public npm registry.
    #[must_use]
    pub fn registry_url(&self) -> &str {
        self.registry.as_deref().unwrap_or(DEFAULT_REGISTRY_URL)
    }

    /// User agent for registry requests.
    #[must_use]
    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }
}
