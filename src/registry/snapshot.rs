//! Offline registry snapshot
//!
//! Serves package metadata from memory. A snapshot file is a JSON object
//! mapping package names to npm-registry-shaped documents:
//!
//! ```json
//! {
//!   "@angular/core": { "versions": { "17.1.0": {} }, "dist-tags": { "latest": "17.1.0" } },
//!   "ngx-toastr": { "versions": { "18.0.0": { "peerDependencies": { "@angular/core": ">=17.0.0-0" } } } }
//! }
//! ```

use crate::domain::PackageMetadata;
use crate::error::RegistryError;
use crate::registry::MetadataSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// In-memory metadata source
#[derive(Debug, Clone, Default)]
pub struct SnapshotRegistry {
    label: String,
    packages: HashMap<String, PackageMetadata>,
}

impl SnapshotRegistry {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self {
            label: "snapshot".to_string(),
            packages: HashMap::new(),
        }
    }

    /// Add a package keyed by its metadata name (builder pattern)
    pub fn with_package(mut self, metadata: PackageMetadata) -> Self {
        self.insert(metadata);
        self
    }

    /// Add or replace a package keyed by its metadata name
    pub fn insert(&mut self, metadata: PackageMetadata) {
        self.packages.insert(metadata.name.clone(), metadata);
    }

    /// Parse a snapshot document
    pub fn from_json(content: &str, label: &str) -> Result<Self, RegistryError> {
        let documents: HashMap<String, PackageMetadata> = serde_json::from_str(content)
            .map_err(|e| RegistryError::invalid_response("", label, e.to_string()))?;

        let packages = documents
            .into_iter()
            .map(|(name, mut metadata)| {
                if metadata.name.is_empty() {
                    metadata.name = name.clone();
                }
                (name, metadata)
            })
            .collect();

        Ok(Self {
            label: label.to_string(),
            packages,
        })
    }

    /// Load a snapshot file
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let label = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::invalid_response("", &label, e.to_string()))?;
        let snapshot = Self::from_json(&content, &label)?;
        tracing::info!(path = %label, packages = snapshot.len(), "Loaded registry snapshot");
        Ok(snapshot)
    }

    /// Number of packages in the snapshot
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if the snapshot holds no packages
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[async_trait]
impl MetadataSource for SnapshotRegistry {
    fn source_name(&self) -> &str {
        &self.label
    }

    async fn fetch_package_metadata(&self, package: &str) -> Option<PackageMetadata> {
        let found = self.packages.get(package).cloned();
        if found.is_none() {
            tracing::warn!(package = %package, source = %self.label, "Package not in snapshot");
        }
        found
    }
}
