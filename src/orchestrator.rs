//! Analysis orchestrator coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: locate → configure → read → fetch → resolve → write
//! - Configuration merging (CLI flags over ngup.toml over defaults)
//! - Registry selection (npm over HTTP or an offline snapshot)

use crate::analyzer::DependencyAnalyzer;
use crate::cli::CliArgs;
use crate::config::Config;
use crate::domain::{AnalysisResult, TargetMajor};
use crate::error::{AppError, ConfigError, RegistryError};
use crate::manifest::{apply_recommendations, locate_manifest, read_manifest, WriteResult};
use crate::progress::Progress;
use crate::registry::{HttpClient, MetadataSource, NpmRegistry, SnapshotRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Orchestrator for coordinating the analysis workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct OrchestratorResult {
    /// The manifest that was analyzed
    pub manifest_path: PathBuf,
    /// Analysis of the manifest
    pub analysis: AnalysisResult,
    /// Where the updated manifest was written, if requested
    pub write_result: Option<WriteResult>,
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the analysis workflow
    pub async fn run(&self) -> Result<OrchestratorResult, AppError> {
        self.run_with_progress(self.args.show_progress()).await
    }

    /// Run the analysis workflow with optional progress display
    pub async fn run_with_progress(
        &self,
        show_progress: bool,
    ) -> Result<OrchestratorResult, AppError> {
        self.args.validate()?;

        let manifest_path = locate_manifest(&self.args.path)?;
        let config = self.load_config(&manifest_path)?;
        let target = self.resolve_target(&config)?;
        let manifest = read_manifest(&manifest_path)?;
        let registry = self.build_registry(&config)?;

        let mut progress = Progress::new(show_progress);
        progress.start(manifest.dependencies().len() as u64, "Checking dependencies");

        let analyzer = DependencyAnalyzer::new(progress.track(registry), target)
            .with_profile(config.framework.clone())
            .with_concurrency(self.concurrency(&config));
        let analysis = analyzer.analyze_manifest(&manifest).await;
        progress.finish_and_clear();

        let write_result = match self.args.write_destination(&manifest_path) {
            Some(destination) => Some(apply_recommendations(&analysis, &destination)?),
            None => None,
        };

        Ok(OrchestratorResult {
            manifest_path,
            analysis,
            write_result,
        })
    }

    /// Explicit `--config`, else ngup.toml next to the manifest, else defaults
    fn load_config(&self, manifest_path: &Path) -> Result<Config, ConfigError> {
        match self.args.config {
            Some(ref path) => Config::load(path),
            None => Config::discover(manifest_path.parent().unwrap_or(Path::new("."))),
        }
    }

    fn resolve_target(&self, config: &Config) -> Result<TargetMajor, ConfigError> {
        match self.args.target {
            Some(target) => Ok(target),
            None => config.require_target(),
        }
    }

    fn concurrency(&self, config: &Config) -> usize {
        self.args
            .concurrency
            .unwrap_or(config.registry.concurrency)
    }

    /// Build the metadata source: a snapshot file when given, else the npm registry
    fn build_registry(&self, config: &Config) -> Result<Arc<dyn MetadataSource>, RegistryError> {
        if let Some(ref snapshot) = self.args.snapshot {
            return Ok(Arc::new(SnapshotRegistry::from_file(snapshot)?));
        }

        let client =
            HttpClient::with_timeout(config.timeout())?.with_max_retries(config.registry.max_retries);
        let url = self
            .args
            .registry
            .clone()
            .unwrap_or_else(|| config.registry.url.clone());
        tracing::debug!(url = %url, "Using npm registry");

        Ok(Arc::new(NpmRegistry::with_base_url(client, url)))
    }
}
