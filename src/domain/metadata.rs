//! Registry metadata for a single package
//!
//! Mirrors the subset of the npm registry document the resolvers read:
//! the version map with peer dependencies, the dist-tags and the publish times.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Metadata for one published version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Declared peer dependencies (package name -> constraint)
    ///
    /// Kept as raw values: old registry records carry `null` or objects here,
    /// and only string constraints are ever read.
    #[serde(
        rename = "peerDependencies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub peer_dependencies: Option<BTreeMap<String, Value>>,
}

/// Distribution tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistTags {
    /// The version tagged `latest`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
}

/// Package metadata as fetched from the registry
///
/// Versions are keyed in a `BTreeMap` so iteration order is deterministic for
/// a given snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Package name
    #[serde(default)]
    pub name: String,
    /// Published versions
    #[serde(default)]
    pub versions: BTreeMap<String, VersionRecord>,
    /// Distribution tags
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: DistTags,
    /// Publish times keyed by version (plus `created`/`modified`)
    #[serde(default)]
    pub time: BTreeMap<String, Value>,
}

impl PackageMetadata {
    /// Creates empty metadata for a package
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a version without peer dependencies (builder pattern)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.versions.entry(version.into()).or_default();
        self
    }

    /// Adds a version with one peer dependency (builder pattern)
    pub fn with_peer(
        mut self,
        version: impl Into<String>,
        package: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        self.versions
            .entry(version.into())
            .or_default()
            .peer_dependencies
            .get_or_insert_with(BTreeMap::new)
            .insert(package.into(), Value::String(constraint.into()));
        self
    }

    /// Sets the `latest` dist-tag (builder pattern)
    pub fn with_latest(mut self, version: impl Into<String>) -> Self {
        self.dist_tags.latest = Some(version.into());
        self
    }

    /// Records a publish time for a version (builder pattern)
    pub fn with_time(mut self, version: impl Into<String>, timestamp: impl Into<String>) -> Self {
        self.time
            .insert(version.into(), Value::String(timestamp.into()));
        self
    }

    /// All published version strings
    pub fn version_strings(&self) -> Vec<&str> {
        self.versions.keys().map(String::as_str).collect()
    }

    /// The peer constraint a version declares on `package`, if any
    pub fn peer_constraint(&self, version: &str, package: &str) -> Option<&str> {
        self.versions
            .get(version)?
            .peer_dependencies
            .as_ref()?
            .get(package)?
            .as_str()
    }

    /// The `latest` dist-tag
    pub fn latest(&self) -> Option<&str> {
        self.dist_tags.latest.as_deref()
    }

    /// When a version was published, if the registry reported it
    pub fn released_at(&self, version: &str) -> Option<DateTime<Utc>> {
        self.time
            .get(version)?
            .as_str()?
            .parse::<DateTime<Utc>>()
            .ok()
    }
}
