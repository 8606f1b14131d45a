//! Registry sources for package metadata
//!
//! This module provides:
//! - The `MetadataSource` capability injected into the analyzer
//! - HTTP client shared foundation with retry logic
//! - npm Registry adapter
//! - Offline snapshot source

mod client;
mod npm;
mod snapshot;

pub use client::{HttpClient, DEFAULT_TIMEOUT, MAX_RETRIES};
pub use npm::{NpmRegistry, NPM_REGISTRY_URL};
pub use snapshot::SnapshotRegistry;

use crate::domain::PackageMetadata;
use async_trait::async_trait;

/// A source of package metadata
///
/// Lookups never fail: transport problems resolve to `None`, which the
/// analyzer treats as "no information" and keeps the current version.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Name used in log output
    fn source_name(&self) -> &str;

    /// Fetch the metadata document for a package
    async fn fetch_package_metadata(&self, package: &str) -> Option<PackageMetadata>;
}
