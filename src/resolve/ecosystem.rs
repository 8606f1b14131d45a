//! Resolution policy for ecosystem packages
//!
//! An ecosystem package is compatible with the target when the version either
//! declares no peer dependency on the framework-core package or declares one
//! the target satisfies.

use super::peer::satisfies_peer;
use super::prerelease::is_prerelease;
use super::version::{compare_versions, is_at_least, sort_descending};
use super::VersionResolver;
use crate::domain::{PackageMetadata, TargetMajor};
use std::cmp::Ordering;

/// Picks the highest peer-compatible version at or above the current one
#[derive(Debug, Clone)]
pub struct EcosystemVersionResolver {
    target: TargetMajor,
    core_package: String,
}

impl EcosystemVersionResolver {
    /// Create a resolver checking peer dependencies on `core_package`
    pub fn new(target: TargetMajor, core_package: impl Into<String>) -> Self {
        Self {
            target,
            core_package: core_package.into(),
        }
    }

    fn is_compatible(&self, metadata: &PackageMetadata, version: &str) -> bool {
        match metadata.peer_constraint(version, &self.core_package) {
            None => true,
            Some(constraint) => satisfies_peer(self.target, constraint),
        }
    }

    /// The registry's `latest` tag, swapped for the highest stable release
    /// when the tag is a pre-release and the project is on a stable version
    fn fallback<'a>(&self, current: &'a str, metadata: &'a PackageMetadata) -> &'a str {
        let Some(latest) = metadata.latest() else {
            return current;
        };

        if is_prerelease(latest) && !is_prerelease(current) {
            let mut stable: Vec<&str> = metadata
                .versions
                .keys()
                .map(String::as_str)
                .filter(|v| !is_prerelease(v))
                .collect();
            sort_descending(&mut stable);
            if let Some(highest) = stable.first().copied() {
                return highest;
            }
        }

        latest
    }
}

impl VersionResolver for EcosystemVersionResolver {
    fn resolve(&self, current: &str, metadata: &PackageMetadata) -> String {
        let allow_prerelease = is_prerelease(current);

        let mut candidates: Vec<&str> = metadata
            .versions
            .keys()
            .map(String::as_str)
            .filter(|v| allow_prerelease || !is_prerelease(v))
            .filter(|v| self.is_compatible(metadata, v))
            .collect();
        sort_descending(&mut candidates);

        if let Some(best) = candidates.iter().find(|v| is_at_least(v, current)) {
            tracing::debug!(
                package = %metadata.name,
                target = %self.target,
                recommended = %best,
                "Resolved compatible ecosystem version"
            );
            return best.to_string();
        }

        let fallback = self.fallback(current, metadata);
        if compare_versions(fallback, current) == Ordering::Less {
            tracing::debug!(
                package = %metadata.name,
                current = %current,
                fallback = %fallback,
                "Fallback below current version, keeping current"
            );
            return current.to_string();
        }

        tracing::debug!(
            package = %metadata.name,
            recommended = %fallback,
            "No compatible version at or above current, using latest tag"
        );
        fallback.to_string()
    }
}
