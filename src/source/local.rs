//! Manifests read from the local filesystem.
//!
//! `--repo_url` names either a manifest file or a directory. Directories are
//! treated as a small test repository and searched in this order:
//!
//! 1. `<dir>/<package>/package.json`
//! 2. `<dir>/<package>.json`
//! 3. `<dir>/package.json`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::constants::MANIFEST_FILE_NAME;
use crate::core::RetrievalError;
use crate::manifest::Manifest;

/// Candidate manifest files inside a repository directory, in search order.
#[must_use]
pub fn candidate_paths(directory: &Path, package_name: &str) -> Vec<PathBuf> {
    vec![
        directory.join(package_name).join(MANIFEST_FILE_NAME),
        directory.join(format!("{package_name}.json")),
        directory.join(MANIFEST_FILE_NAME),
    ]
}

/// Locate the manifest file for `package_name` under `location`.
///
/// # Errors
///
/// Returns [`RetrievalError::NotFound`] if `location` does not exist or a
/// directory contains none of the candidate files, and
/// [`RetrievalError::Io`] if `location` cannot be inspected.
pub async fn find_manifest(location: &Path, package_name: &str) -> Result<PathBuf, RetrievalError> {
    let not_found = || RetrievalError::NotFound {
        path: location.display().to_string(),
    };

    let metadata = fs::metadata(location).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => not_found(),
        _ => RetrievalError::Io {
            path: location.display().to_string(),
            reason: e.to_string(),
        },
    })?;
    if !metadata.is_dir() {
        return Ok(location.to_path_buf());
    }

    for candidate in candidate_paths(location, package_name) {
        if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
            return Ok(candidate);
        }
        debug!("No manifest at {}", candidate.display());
    }

    Err(not_found())
}

/// Read and parse the manifest for `package_name` under `location`.
///
/// # Errors
///
/// Returns a [`RetrievalError`] if no manifest is found, it cannot be read,
/// or it is not a valid JSON manifest.
pub async fn read_manifest(location: &Path, package_name: &str) -> Result<Manifest, RetrievalError> {
    let path = find_manifest(location, package_name).await?;
    debug!("Reading manifest from {}", path.display());

    let content = fs::read_to_string(&path).await.map_err(|e| RetrievalError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Manifest::from_json_str(&content, &path.display().to_string())
}
