//! Manifests fetched from an npm-compatible package registry.
//!
//! The manifest URL is `<registry-base>/<package_name>`. Exactly one request
//! is made per invocation, bounded by a 10 second total timeout and never
//! retried.

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::constants::REGISTRY_REQUEST_TIMEOUT;
use crate::core::{RetrievalError, error_chain_message};
use crate::manifest::Manifest;

/// HTTP client bound to one registry base URL.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client for `base_url` with the standard timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::Transport`] if the HTTP client cannot be
    /// initialised (e.g. no TLS backend available).
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, RetrievalError> {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .timeout(REGISTRY_REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RetrievalError::Transport {
                url: base_url.clone(),
                reason: error_chain_message(&e),
            })?;

        Ok(Self::with_client(base_url, client))
    }

    /// Create a client from a preconfigured [`reqwest::Client`].
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The registry base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the manifest document for `package_name`.
    #[must_use]
    pub fn manifest_url(&self, package_name: &str) -> String {
        format!("{}/{}", self.base_url, package_name)
    }

    /// Fetch and parse the manifest for `package_name`.
    ///
    /// # Errors
    ///
    /// - [`RetrievalError::Transport`] when no response arrives (including
    ///   timeouts); the reason keeps the full cause chain
    /// - [`RetrievalError::HttpStatus`] for non-success responses
    /// - [`RetrievalError::InvalidManifest`] when the body is not a manifest
    pub async fn fetch_manifest(&self, package_name: &str) -> Result<Manifest, RetrievalError> {
        let url = self.manifest_url(package_name);
        debug!("Fetching manifest from {}", url);

        let transport = |e: reqwest::Error| RetrievalError::Transport {
            url: url.clone(),
            reason: error_chain_message(&e),
        };

        let response =
            self.client.get(&url).header(ACCEPT, "application/json").send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::HttpStatus {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        debug!("Received {} bytes from {}", body.len(), url);

        Manifest::from_json_str(&body, &url)
    }
}
