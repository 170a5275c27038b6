//! Command-line interface for depgraph.
//!
//! depgraph has a single command: report the direct dependencies of one
//! package. The run is a fixed pipeline:
//!
//! 1. echo the four raw run values
//! 2. validate them, stopping with exit code 1 on the first bad field
//! 3. load the optional settings file
//! 4. resolve the dependency list (retrieval failures are reported, not fatal)
//! 5. print the manifest summary and the dependency list
//!
//! # Examples
//!
//! ```bash
//! # Built-in fixtures, no network
//! depgraph -n react -u fixtures -m test
//!
//! # Live registry, only names containing "body"
//! depgraph -n express -u https://registry.npmjs.org -m remote -f body
//!
//! # Local test repository
//! depgraph -n my-app -u ./test-repo -m local
//! ```
//!
//! # Global Options
//!
//! - `--verbose` / `-v`: debug logging on stderr
//! - `--quiet` / `-q`: only errors are logged
//! - `--config <path>`: settings file instead of `~/.depgraph/config.toml`

pub mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{RawConfig, Settings, validate};
use crate::core::DepgraphError;
use crate::resolver::Resolver;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can run the pipeline without touching
/// global logging state.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive. `None` means `RUST_LOG`, or `warn` when unset.
    pub log_level: Option<String>,

    /// Settings file given with `--config`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global `tracing` subscriber, writing to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Report the direct dependencies of a package.
#[derive(Parser, Debug)]
#[command(
    name = "depgraph",
    about = "Report the direct dependencies of a package",
    version,
    long_about = "depgraph fetches the manifest of one package from a registry, a local test \
                  repository or built-in fixtures and lists its direct dependencies."
)]
pub struct Cli {
    /// Name of the package to analyze.
    #[arg(short = 'n', long = "package_name", value_name = "NAME")]
    package_name: String,

    /// Registry URL (remote), manifest path (local) or label (test).
    #[arg(short = 'u', long = "repo_url", value_name = "URL")]
    repo_url: String,

    /// Work mode: local, remote or test.
    ///
    /// Checked after the run settings are echoed, so an invalid mode is
    /// reported by the validator rather than by argument parsing.
    #[arg(short = 'm', long = "work_mode", value_name = "MODE")]
    work_mode: String,

    /// Only list dependencies whose name contains this text (case-insensitive).
    #[arg(short = 'f', long = "filter", value_name = "TEXT", default_value = "")]
    filter: String,

    /// Enable debug logging on stderr.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,

    /// Path to the settings file.
    ///
    /// Overrides `DEPGRAPH_CONFIG_PATH` and `~/.depgraph/config.toml`.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Run the command with configuration from the global flags.
    ///
    /// # Errors
    ///
    /// Returns [`DepgraphError::Validation`] when a run value is invalid and
    /// a settings error when the settings file cannot be loaded. Retrieval
    /// failures are reported on stdout and do not produce an error.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Derive the [`CliConfig`] from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// The raw, unvalidated run values.
    #[must_use]
    pub fn raw_config(&self) -> RawConfig {
        RawConfig {
            package_name: self.package_name.clone(),
            source_location: self.repo_url.clone(),
            work_mode: self.work_mode.clone(),
            filter: self.filter.clone(),
        }
    }

    /// Run the pipeline with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`Cli::execute`].
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        let raw = self.raw_config();
        println!("{}", report::settings_block(&raw));

        let run = validate(&raw).map_err(DepgraphError::Validation)?;
        println!("{}", "✓ All parameters are valid".green());

        let settings = Settings::load_with_optional(config.config_path).await?;
        debug!("Effective settings: {:?}", settings);

        println!();
        println!("{}", report::analysis_header(&run));
        println!();

        let resolution = Resolver::new(settings).resolve_detailed(&run).await;

        match (&resolution.manifest, &resolution.failure) {
            (Some(manifest), _) => println!("{}", report::manifest_summary(manifest)),
            (None, Some(error)) => println!("{}", report::retrieval_failure(error)),
            (None, None) => {}
        }
        println!();
        println!("{}", report::dependency_list(&resolution.dependencies));

        Ok(())
    }
}
