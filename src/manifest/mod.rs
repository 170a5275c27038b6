//! Package manifest model and parsing.
//!
//! A [`Manifest`] is the `package.json`-shaped descriptor of one package: its
//! name, version, description and four dependency groups. Manifests are built
//! fresh for every invocation from exactly one source (see
//! [`crate::source`]) and discarded once the dependency list is derived.
//!
//! # Accepted Documents
//!
//! [`Manifest::from_document`] accepts two JSON shapes:
//!
//! - a plain manifest, as found in `package.json` or at
//!   `<registry>/<name>/<version>`:
//!   ```json
//!   { "name": "react", "version": "17.0.2", "dependencies": { "loose-envify": "^1.1.0" } }
//!   ```
//! - a registry *packument* (every published version of a package), as served
//!   at `<registry>/<name>`. The manifest of the `dist-tags.latest` version is
//!   used:
//!   ```json
//!   { "name": "react", "dist-tags": { "latest": "17.0.2" }, "versions": { "17.0.2": { ... } } }
//!   ```

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::core::RetrievalError;

/// One of the four dependency declaration groups of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyGroup {
    /// Runtime dependencies (`dependencies`)
    Dependencies,
    /// Development-only dependencies (`devDependencies`)
    DevDependencies,
    /// Dependencies the host must provide (`peerDependencies`)
    PeerDependencies,
    /// Dependencies whose installation may fail (`optionalDependencies`)
    OptionalDependencies,
}

impl DependencyGroup {
    /// Every group, in the order dependency names are collected.
    pub const ALL: [Self; 4] = [
        Self::Dependencies,
        Self::DevDependencies,
        Self::PeerDependencies,
        Self::OptionalDependencies,
    ];

    /// The JSON field name of this group.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
            Self::PeerDependencies => "peerDependencies",
            Self::OptionalDependencies => "optionalDependencies",
        }
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Descriptor of a package and its declared dependency groups.
///
/// Missing groups deserialize to empty maps, so downstream code never has to
/// distinguish "absent" from "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Declared package name. Not reconciled with the requested name.
    #[serde(default)]
    pub name: String,

    /// Declared version, if any.
    #[serde(default)]
    pub version: Option<String>,

    /// Free-form description, if any.
    #[serde(default)]
    pub description: Option<String>,

    /// Runtime dependencies mapped to their version constraints.
    #[serde(default, deserialize_with = "lenient_group")]
    pub dependencies: BTreeMap<String, String>,

    /// Development dependencies mapped to their version constraints.
    #[serde(default, deserialize_with = "lenient_group")]
    pub dev_dependencies: BTreeMap<String, String>,

    /// Peer dependencies mapped to their version constraints.
    #[serde(default, deserialize_with = "lenient_group")]
    pub peer_dependencies: BTreeMap<String, String>,

    /// Optional dependencies mapped to their version constraints.
    #[serde(default, deserialize_with = "lenient_group")]
    pub optional_dependencies: BTreeMap<String, String>,
}

/// Decode one dependency group leniently.
///
/// Only an object contributes names. `null`, arrays (older packages publish
/// `"devDependencies": []`) and other scalars are an empty group, so one odd
/// group never hides the others. Non-string constraints are kept as their JSON
/// text.
fn lenient_group<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    let entries = match raw {
        Some(serde_json::Value::Object(entries)) => entries,
        Some(serde_json::Value::Array(items)) if items.is_empty() => return Ok(BTreeMap::new()),
        None | Some(serde_json::Value::Null) => return Ok(BTreeMap::new()),
        Some(other) => {
            debug!("Ignoring dependency group that is not an object: {}", other);
            return Ok(BTreeMap::new());
        }
    };

    Ok(entries
        .into_iter()
        .map(|(name, constraint)| {
            let constraint = match constraint {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (name, constraint)
        })
        .collect())
}

impl Manifest {
    /// Create an empty manifest with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the version (builder style).
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the description (builder style).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a dependency to a group (builder style).
    #[must_use]
    pub fn with_dependency(
        mut self,
        group: DependencyGroup,
        name: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        self.group_mut(group).insert(name.into(), constraint.into());
        self
    }

    /// Borrow one dependency group.
    #[must_use]
    pub const fn group(&self, group: DependencyGroup) -> &BTreeMap<String, String> {
        match group {
            DependencyGroup::Dependencies => &self.dependencies,
            DependencyGroup::DevDependencies => &self.dev_dependencies,
            DependencyGroup::PeerDependencies => &self.peer_dependencies,
            DependencyGroup::OptionalDependencies => &self.optional_dependencies,
        }
    }

    /// Mutably borrow one dependency group.
    pub fn group_mut(&mut self, group: DependencyGroup) -> &mut BTreeMap<String, String> {
        match group {
            DependencyGroup::Dependencies => &mut self.dependencies,
            DependencyGroup::DevDependencies => &mut self.dev_dependencies,
            DependencyGroup::PeerDependencies => &mut self.peer_dependencies,
            DependencyGroup::OptionalDependencies => &mut self.optional_dependencies,
        }
    }

    /// Iterate over every declared dependency name across all groups.
    ///
    /// A name declared in several groups is yielded once per group.
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        DependencyGroup::ALL
            .into_iter()
            .flat_map(move |group| self.group(group).keys().map(String::as_str))
    }

    /// Parse a manifest from JSON text.
    ///
    /// `origin` names the URL or path the text came from and is only used in
    /// error messages.
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self, RetrievalError> {
        let document: serde_json::Value =
            serde_json::from_str(content).map_err(|e| RetrievalError::InvalidManifest {
                origin: origin.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_document(document, origin)
    }

    /// Build a manifest from an already-parsed JSON document.
    ///
    /// Packuments resolve to their `latest` version; any other object is read
    /// as a manifest directly.
    pub fn from_document(document: serde_json::Value, origin: &str) -> Result<Self, RetrievalError> {
        let invalid = |reason: String| RetrievalError::InvalidManifest {
            origin: origin.to_string(),
            reason,
        };

        let serde_json::Value::Object(mut object) = document else {
            return Err(invalid("expected a JSON object".to_string()));
        };

        let latest = object
            .get("dist-tags")
            .and_then(|tags| tags.get("latest"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);

        let is_packument = object.get("versions").is_some_and(serde_json::Value::is_object);
        if let (true, Some(latest)) = (is_packument, latest) {
            let package_name = object.get("name").and_then(serde_json::Value::as_str).map(str::to_string);
            let package_description =
                object.get("description").and_then(serde_json::Value::as_str).map(str::to_string);

            let version_document = object
                .get_mut("versions")
                .and_then(|versions| versions.get_mut(&latest))
                .map(serde_json::Value::take)
                .ok_or_else(|| invalid(format!("latest version {latest} missing from versions")))?;

            let mut manifest: Self =
                serde_json::from_value(version_document).map_err(|e| invalid(e.to_string()))?;
            if manifest.name.is_empty() {
                manifest.name = package_name.unwrap_or_default();
            }
            if manifest.version.is_none() {
                manifest.version = Some(latest);
            }
            if manifest.description.is_none() {
                manifest.description = package_description;
            }
            return Ok(manifest);
        }

        serde_json::from_value(serde_json::Value::Object(object)).map_err(|e| invalid(e.to_string()))
    }
}
