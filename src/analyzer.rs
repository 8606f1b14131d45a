//! Dependency analysis against a target framework major
//!
//! This module provides:
//! - Per-dependency resolution routed by the framework-core name test
//! - Concurrent registry lookups bounded by a semaphore, joined before aggregation
//! - Risk and note classification
//! - The rewritten manifest and summary for a whole package.json

use crate::domain::{
    AnalysisEntry, AnalysisResult, AnalysisSummary, FrameworkProfile, PackageMetadata, RiskLevel,
    TargetMajor,
};
use crate::manifest::{DeclaredDependency, PackageManifest};
use crate::registry::MetadataSource;
use crate::resolve::{
    clean_version, compare_versions, EcosystemVersionResolver, FrameworkVersionResolver,
    VersionResolver,
};
use futures::future::join_all;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Default number of in-flight registry lookups
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Analyzes declared dependencies against a target framework major
pub struct DependencyAnalyzer {
    registry: Arc<dyn MetadataSource>,
    profile: FrameworkProfile,
    target: TargetMajor,
    concurrency: usize,
    framework_resolver: FrameworkVersionResolver,
    ecosystem_resolver: EcosystemVersionResolver,
}

impl DependencyAnalyzer {
    /// Create an analyzer using the Angular profile
    pub fn new(registry: Arc<dyn MetadataSource>, target: TargetMajor) -> Self {
        if !target.is_known() {
            tracing::warn!("Target major is not numeric, framework packages will keep their versions");
        }

        let profile = FrameworkProfile::default();
        let ecosystem_resolver = EcosystemVersionResolver::new(target, profile.core_package.clone());

        Self {
            registry,
            profile,
            target,
            concurrency: DEFAULT_CONCURRENCY,
            framework_resolver: FrameworkVersionResolver::new(target),
            ecosystem_resolver,
        }
    }

    /// Use a different framework profile (builder pattern)
    pub fn with_profile(mut self, profile: FrameworkProfile) -> Self {
        self.ecosystem_resolver =
            EcosystemVersionResolver::new(self.target, profile.core_package.clone());
        self.profile = profile;
        self
    }

    /// Set the maximum number of in-flight lookups (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// The target major this analyzer resolves against
    pub fn target(&self) -> TargetMajor {
        self.target
    }

    /// Analyze a whole manifest
    pub async fn analyze_manifest(&self, manifest: &PackageManifest) -> AnalysisResult {
        let dependencies = manifest.dependencies();
        tracing::info!(
            manifest = %manifest.name(),
            path = %manifest.path().display(),
            dependencies = dependencies.len(),
            target = %self.target,
            source = %self.registry.source_name(),
            "Analyzing dependencies"
        );

        let analysis = self.analyze_dependencies(&dependencies).await;
        let summary = AnalysisSummary::from_entries(&analysis);
        let updated_manifest = manifest.with_recommendations(&analysis);

        tracing::info!(
            total = summary.total,
            needs_update = summary.needs_update,
            "Analysis complete"
        );

        AnalysisResult {
            target: self.target,
            original_manifest: manifest.as_value().clone(),
            updated_manifest,
            analysis,
            summary,
        }
    }

    /// Analyze a list of declared dependencies
    ///
    /// Lookups run concurrently; entries come back in input order.
    pub async fn analyze_dependencies(
        &self,
        dependencies: &[DeclaredDependency],
    ) -> Vec<AnalysisEntry> {
        let semaphore = Semaphore::new(self.concurrency);
        let lookups = dependencies
            .iter()
            .map(|dependency| self.lookup_and_analyze(&semaphore, dependency));
        join_all(lookups).await
    }

    async fn lookup_and_analyze(
        &self,
        semaphore: &Semaphore,
        dependency: &DeclaredDependency,
    ) -> AnalysisEntry {
        let metadata = {
            // The semaphore is never closed, so acquire only fails if it is
            let _permit = semaphore.acquire().await.ok();
            self.registry.fetch_package_metadata(&dependency.name).await
        };
        self.analyze_one(dependency, metadata.as_ref())
    }

    /// Build the entry for one dependency from its (possibly absent) metadata
    pub fn analyze_one(
        &self,
        dependency: &DeclaredDependency,
        metadata: Option<&PackageMetadata>,
    ) -> AnalysisEntry {
        let current = clean_version(&dependency.constraint);
        let is_framework_package = self.profile.is_framework_core(&dependency.name);

        let recommended = match metadata {
            Some(metadata) => self.resolver_for(is_framework_package).resolve(&current, metadata),
            None => {
                tracing::debug!(package = %dependency.name, "No metadata, keeping current version");
                current.clone()
            }
        };

        let ordering = compare_versions(&recommended, &current);
        let risk = self.profile.risk_for(&dependency.name);
        let notes = notes_for(&self.profile, self.target, ordering, is_framework_package, risk);
        let released_at = metadata.and_then(|m| m.released_at(&recommended));

        AnalysisEntry {
            name: dependency.name.clone(),
            current_version: current,
            latest_version: recommended.clone(),
            recommended_version: recommended,
            is_framework_package,
            needs_update: ordering == Ordering::Greater,
            risk,
            notes,
            released_at,
        }
    }

    fn resolver_for(&self, is_framework_package: bool) -> &dyn VersionResolver {
        if is_framework_package {
            &self.framework_resolver
        } else {
            &self.ecosystem_resolver
        }
    }
}

/// Human-readable note for an entry
///
/// `ordering` is the recommended version compared to the current one.
fn notes_for(
    profile: &FrameworkProfile,
    target: TargetMajor,
    ordering: Ordering,
    is_framework_package: bool,
    risk: RiskLevel,
) -> String {
    match ordering {
        Ordering::Greater if is_framework_package => {
            format!("Upgrade to match {} {}", profile.display_name, target)
        }
        Ordering::Greater if risk == RiskLevel::Medium => {
            "Update available - verify compatibility".to_string()
        }
        Ordering::Greater => "Update available".to_string(),
        Ordering::Equal if is_framework_package => {
            format!("Aligned with {} {}", profile.display_name, target)
        }
        Ordering::Equal => "Up to date".to_string(),
        Ordering::Less => "Current version is newer than recommended".to_string(),
    }
}
