//! depgraph - direct dependency reporter
//!
//! Reports the direct (first-level) dependencies of a single package. The
//! package manifest comes from an npm-compatible registry, a local test
//! repository, or a built-in fixture set; its dependency groups are merged,
//! deduplicated, optionally filtered and printed in sorted order.
//!
//! # Architecture Overview
//!
//! ```text
//! CLI args ─► RawConfig ─► validate ─► Configuration ─► Resolver ─► DependencyList
//!                 │                                        │
//!             echo block                          ManifestSource (test | local | remote)
//! ```
//!
//! - The validator stops at the first malformed field.
//! - The resolver runs once per invocation and never fails: retrieval errors
//!   are logged and reported, and yield an empty list.
//! - Extraction unions `dependencies`, `devDependencies`,
//!   `peerDependencies` and `optionalDependencies`.
//!
//! Transitive resolution, version constraint solving and graph rendering are
//! out of scope.
//!
//! # Core Modules
//!
//! - [`cli`] - argument parsing and the console report
//! - [`config`] - run configuration, validation and the settings file
//! - [`core`] - error types and user-facing error rendering
//! - [`manifest`] - package manifest model and JSON parsing
//! - [`resolver`] - dependency extraction and the resolver
//! - [`source`] - fixture, local and registry manifest sources
//! - [`constants`] - defaults shared across modules

// Core functionality modules
pub mod cli;
pub mod config;
pub mod core;
pub mod resolver;

// Manifest acquisition
pub mod manifest;
pub mod source;

// Supporting modules
pub mod constants;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
