//! Version resolution against a target framework major
//!
//! This module provides:
//! - Version ordering and constraint cleaning
//! - Pre-release classification
//! - Peer dependency constraint evaluation
//! - Resolution policies for framework-core and ecosystem packages

mod ecosystem;
mod framework;
mod peer;
mod prerelease;
mod version;

pub use ecosystem::EcosystemVersionResolver;
pub use framework::FrameworkVersionResolver;
pub use peer::satisfies_peer;
pub use prerelease::is_prerelease;
pub use version::{clean_version, compare_versions, is_at_least, major_of, sort_descending};

use crate::domain::PackageMetadata;

/// A policy choosing the recommended version for a package
pub trait VersionResolver: Send + Sync {
    /// Recommend a version given the cleaned current version and registry metadata
    fn resolve(&self, current: &str, metadata: &PackageMetadata) -> String;
}
