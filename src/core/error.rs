//! Error handling for depgraph
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Error Tiers
//!
//! - [`ValidationError`] - a configuration value is malformed. Always fatal to
//!   the invocation and reported with the `Invalid configuration:` prefix.
//! - [`RetrievalError`] - a manifest could not be fetched or parsed. The
//!   resolver catches these and degrades to an empty dependency list.
//! - [`DepgraphError`] - the top-level error that wraps both tiers plus
//!   settings-file and miscellaneous failures.
//!
//! Use [`user_friendly_error`] to turn any [`anyhow::Error`] into an
//! [`ErrorContext`] that can be printed with colors and suggestions.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// A configuration value failed validation.
///
/// Each variant names exactly one field; validation stops at the first
/// failure so only one of these is ever reported per invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `--package_name` was empty or only whitespace.
    #[error("package name cannot be empty")]
    EmptyPackageName,

    /// `--repo_url` was empty or only whitespace.
    #[error("repository URL cannot be empty")]
    EmptyRepositoryUrl,

    /// `--work_mode` was not one of `local`, `remote`, `test`.
    #[error("invalid work mode; allowed values: local, remote, test")]
    InvalidWorkMode {
        /// The rejected value, as given on the command line
        value: String,
    },
}

impl ValidationError {
    /// Name of the command-line option that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyPackageName => "package_name",
            Self::EmptyRepositoryUrl => "repo_url",
            Self::InvalidWorkMode {
                ..
            } => "work_mode",
        }
    }
}

/// Failure to acquire or parse a package manifest.
///
/// Every message keeps the underlying cause so users can tell a DNS failure
/// from a timeout or a 404.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Failed to fetch {url}: {reason}")]
    Transport {
        /// URL that was requested
        url: String,
        /// Underlying cause, including the full source chain
        reason: String,
    },

    /// The registry answered with a non-success status.
    #[error("Registry returned HTTP {status} for {url}")]
    HttpStatus {
        /// URL that was requested
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The document was read but is not a usable manifest.
    #[error("Invalid manifest from {origin}: {reason}")]
    InvalidManifest {
        /// URL or path the document came from
        origin: String,
        /// What was wrong with it
        reason: String,
    },

    /// No manifest file exists at the given location.
    #[error("No manifest found at {path}")]
    NotFound {
        /// Location that was searched
        path: String,
    },

    /// The manifest file exists but could not be read.
    #[error("Failed to read manifest {path}: {reason}")]
    Io {
        /// Path of the unreadable file
        path: String,
        /// Underlying I/O error message
        reason: String,
    },
}

/// Top-level error type for depgraph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepgraphError {
    /// Configuration validation failed
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Manifest retrieval failed
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    /// The settings file could not be loaded
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Render an error and its whole `source()` chain as one line.
///
/// `reqwest` keeps the interesting part ("connection refused", "operation
/// timed out") in nested sources, so the top-level message alone is not
/// enough to tell failures apart.
#[must_use]
pub fn error_chain_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Error wrapper with user-facing details and suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DepgraphError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DepgraphError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are displayed in green in the terminal.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    ///
    /// Details are displayed in yellow in the terminal.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    ///
    /// ```rust,no_run
    /// use depgraph_cli::core::{DepgraphError, ErrorContext, ValidationError};
    ///
    /// let context = ErrorContext::new(DepgraphError::Validation(ValidationError::EmptyPackageName))
    ///     .with_suggestion("Pass a package with -n, e.g. -n react");
    /// context.display();
    /// ```
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// Recognizes [`DepgraphError`], bare [`ValidationError`] and
/// [`RetrievalError`] values, and settings-file TOML errors. Anything else is
/// reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(depgraph_error) = error.downcast_ref::<DepgraphError>() {
        return create_error_context(depgraph_error.clone());
    }

    if let Some(validation_error) = error.downcast_ref::<ValidationError>() {
        return create_error_context(DepgraphError::Validation(validation_error.clone()));
    }

    if let Some(retrieval_error) = error.downcast_ref::<RetrievalError>() {
        return create_error_context(DepgraphError::Retrieval(retrieval_error.clone()));
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(DepgraphError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your depgraph settings file");
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DepgraphError::Other {
        message,
    })
}

fn create_error_context(error: DepgraphError) -> ErrorContext {
    match &error {
        DepgraphError::Validation(validation) => {
            let suggestion = match validation {
                ValidationError::EmptyPackageName => {
                    "Pass the package to analyze with -n/--package_name, e.g. -n react"
                }
                ValidationError::EmptyRepositoryUrl => {
                    "Pass a registry URL or manifest path with -u/--repo_url"
                }
                ValidationError::InvalidWorkMode {
                    ..
                } => "Use -m local, -m remote or -m test",
            };
            let details = match validation {
                ValidationError::InvalidWorkMode {
                    value,
                } => format!("'{value}' was given for --{}", validation.field()),
                _ => format!("--{} must contain non-whitespace characters", validation.field()),
            };
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }
        DepgraphError::Retrieval(RetrievalError::Transport {
            ..
        }) => ErrorContext::new(error)
            .with_suggestion("Check your network connection and the registry URL"),
        DepgraphError::ConfigError {
            ..
        } => ErrorContext::new(error).with_suggestion(format!(
            "Fix or remove the settings file (location can be overridden with {})",
            crate::constants::CONFIG_PATH_ENV
        )),
        _ => ErrorContext::new(error),
    }
}
