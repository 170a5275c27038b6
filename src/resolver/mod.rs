//! Direct dependency resolution.
//!
//! The [`Resolver`] turns a validated [`Configuration`] into a
//! [`DependencyList`]:
//!
//! 1. select the [`ManifestSource`] for the work mode
//! 2. fetch the manifest
//! 3. union the names of all four dependency groups
//! 4. keep names containing the filter (case-insensitive), if one is set
//! 5. deduplicate and sort ascending
//!
//! Retrieval failures never escape [`Resolver::resolve`]: they are logged and
//! produce an empty list. [`Resolver::resolve_detailed`] additionally returns
//! the manifest and the failure for reporting.

use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::config::{Configuration, Settings};
use crate::core::RetrievalError;
use crate::manifest::{DependencyGroup, Manifest};
use crate::source::ManifestSource;

/// Sorted, duplicate-free list of dependency names.
///
/// Ordering is byte-wise on the names as declared, so `Zed` sorts before
/// `alpha`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyList(Vec<String>);

impl DependencyList {
    /// An empty list.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a list from arbitrary names, deduplicating and sorting them.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self(unique.into_iter().collect())
    }

    /// Keep only names matching `filter` (see [`matches_filter`]).
    #[must_use]
    pub fn filtered(self, filter: &str) -> Self {
        Self(self.0.into_iter().filter(|name| matches_filter(name, filter)).collect())
    }

    /// Number of dependencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Case-insensitive substring match. An empty filter matches everything.
#[must_use]
pub fn matches_filter(name: &str, filter: &str) -> bool {
    filter.is_empty() || name.to_lowercase().contains(&filter.to_lowercase())
}

/// Extract the direct dependency names of a manifest.
///
/// All four groups are unioned, so a name declared in several groups appears
/// once. The result does not depend on group or key iteration order.
#[must_use]
pub fn extract_dependencies(manifest: &Manifest, filter: Option<&str>) -> DependencyList {
    for group in DependencyGroup::ALL {
        let count = manifest.group(group).len();
        if count > 0 {
            debug!("{} declares {} {}", manifest.name, count, group);
        }
    }

    let list = DependencyList::from_names(manifest.declared_names());
    match filter {
        Some(filter) if !filter.is_empty() => list.filtered(filter),
        _ => list,
    }
}

/// Everything one resolution produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The manifest, if it could be obtained
    pub manifest: Option<Manifest>,
    /// The resolved dependency names (empty on failure)
    pub dependencies: DependencyList,
    /// Why the manifest could not be obtained
    pub failure: Option<RetrievalError>,
}

impl Resolution {
    /// Whether the manifest was retrieved.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Resolves the direct dependencies of one package.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    settings: Settings,
}

impl Resolver {
    /// Create a resolver using the given settings.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self {
            settings,
        }
    }

    /// Resolve the dependency list for `config`. Never fails.
    pub async fn resolve(&self, config: &Configuration) -> DependencyList {
        self.resolve_detailed(config).await.dependencies
    }

    /// Resolve `config`, keeping the manifest and any retrieval failure.
    pub async fn resolve_detailed(&self, config: &Configuration) -> Resolution {
        match self.acquire(config).await {
            Ok(manifest) => {
                let dependencies = extract_dependencies(&manifest, config.filter());
                debug!(
                    "Resolved {} direct dependencies for {}",
                    dependencies.len(),
                    config.package_name()
                );
                Resolution {
                    manifest: Some(manifest),
                    dependencies,
                    failure: None,
                }
            }
            Err(error) => {
                warn!("Could not retrieve manifest for {}: {}", config.package_name(), error);
                Resolution {
                    manifest: None,
                    dependencies: DependencyList::empty(),
                    failure: Some(error),
                }
            }
        }
    }

    async fn acquire(&self, config: &Configuration) -> Result<Manifest, RetrievalError> {
        let source = ManifestSource::for_config(config, &self.settings)?;
        source.fetch(config.package_name()).await
    }
}
