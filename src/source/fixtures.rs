//! Built-in fixture manifests for `test` mode.
//!
//! The table holds four well-known packages with hand-written dependency
//! sets. Lookup ignores ASCII case. Any other name gets a synthesized manifest
//! with three generic dependencies, so test mode always has data to work on.

use crate::constants::{FALLBACK_FIXTURE_DEPENDENCIES, FALLBACK_FIXTURE_VERSION};
use crate::manifest::{DependencyGroup, Manifest};

/// A hand-authored stand-in manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// Package name (lowercase)
    pub name: &'static str,
    /// Package version
    pub version: &'static str,
    /// Package description
    pub description: &'static str,
    /// `dependencies` group as `(name, constraint)` pairs
    pub dependencies: &'static [(&'static str, &'static str)],
}

impl Fixture {
    /// Build the [`Manifest`] this fixture describes.
    #[must_use]
    pub fn to_manifest(&self) -> Manifest {
        self.dependencies.iter().fold(
            Manifest::new(self.name).with_version(self.version).with_description(self.description),
            |manifest, (name, constraint)| {
                manifest.with_dependency(DependencyGroup::Dependencies, *name, *constraint)
            },
        )
    }
}

/// The fixture table.
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "react",
        version: "17.0.2",
        description: "React is a JavaScript library for building user interfaces.",
        dependencies: &[("loose-envify", "^1.1.0"), ("object-assign", "^4.1.1")],
    },
    Fixture {
        name: "express",
        version: "4.18.2",
        description: "Fast, unopinionated, minimalist web framework",
        dependencies: &[
            ("accepts", "~1.3.8"),
            ("body-parser", "1.20.1"),
            ("content-disposition", "0.5.4"),
            ("cookie", "0.5.0"),
            ("debug", "2.6.9"),
            ("etag", "~1.8.1"),
            ("finalhandler", "1.2.0"),
            ("merge-descriptors", "1.0.1"),
            ("path-to-regexp", "0.1.7"),
            ("qs", "6.11.0"),
            ("send", "0.18.0"),
            ("serve-static", "1.15.0"),
        ],
    },
    Fixture {
        name: "lodash",
        version: "4.17.21",
        description: "Lodash modular utilities.",
        dependencies: &[],
    },
    Fixture {
        name: "vue",
        version: "3.3.4",
        description: "The progressive JavaScript framework for building modern web UI.",
        dependencies: &[
            ("@vue/compiler-dom", "3.3.4"),
            ("@vue/compiler-sfc", "3.3.4"),
            ("@vue/runtime-dom", "3.3.4"),
            ("@vue/server-renderer", "3.3.4"),
            ("@vue/shared", "3.3.4"),
        ],
    },
];

/// Find the fixture for a package name, ignoring ASCII case.
#[must_use]
pub fn lookup(package_name: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|fixture| fixture.name.eq_ignore_ascii_case(package_name))
}

/// Manifest for `package_name` in test mode.
///
/// Known fixtures resolve to their table entry; anything else gets a
/// synthesized manifest named after the request with `dep1`, `dep2` and
/// `dep3` as dependencies.
#[must_use]
pub fn fixture_manifest(package_name: &str) -> Manifest {
    match lookup(package_name) {
        Some(fixture) => fixture.to_manifest(),
        None => FALLBACK_FIXTURE_DEPENDENCIES.iter().fold(
            Manifest::new(package_name)
                .with_version(FALLBACK_FIXTURE_VERSION)
                .with_description(format!("Generated test package {package_name}")),
            |manifest, (name, constraint)| {
                manifest.with_dependency(DependencyGroup::Dependencies, *name, *constraint)
            },
        ),
    }
}
