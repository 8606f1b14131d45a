//! Configuration file handling
//!
//! Settings come from an `ngup.toml` file, either passed with `--config` or
//! found next to the manifest. Every key is optional and CLI flags win.
//!
//! # Configuration File Format
//!
//! ```toml
//! # ngup.toml
//! target = 17
//!
//! [registry]
//! url = "https://registry.npmjs.org"
//! timeout_secs = 30
//! max_retries = 3
//! concurrency = 10
//!
//! [framework]
//! display_name = "Angular"
//! core_package = "@angular/core"
//! core_scope = "@angular/"
//! toolkit_packages = ["@angular/material", "@angular/cdk"]
//! adjacent_prefixes = ["ng-", "ngx-", "@ng-"]
//! adjacent_markers = ["@angular/material", "@angular/cdk", "@ngrx"]
//! ```

use crate::analyzer::DEFAULT_CONCURRENCY;
use crate::domain::{FrameworkProfile, TargetMajor};
use crate::error::ConfigError;
use crate::registry::{DEFAULT_TIMEOUT, MAX_RETRIES, NPM_REGISTRY_URL};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file looked up next to the manifest
pub const CONFIG_FILENAME: &str = "ngup.toml";

/// Registry options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// Base URL of the npm registry or a mirror.
    pub url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Retries after the first attempt.
    pub max_retries: u32,

    /// Maximum in-flight lookups.
    pub concurrency: usize,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            url: NPM_REGISTRY_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            max_retries: MAX_RETRIES,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default target major.
    pub target: Option<TargetMajor>,

    /// Registry options.
    pub registry: RegistryOptions,

    /// Framework naming conventions.
    pub framework: FrameworkProfile,
}

impl Config {
    /// Parse configuration text; `path` is only used in error messages
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::parse_error(path, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load `ngup.toml` from a directory if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        match Self::find(dir) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!(dir = %dir.display(), "No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn find(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILENAME);
        candidate.is_file().then_some(candidate)
    }

    /// Reject values the analyzer cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency { value: 0 });
        }
        Ok(())
    }

    /// The target major, which must come from somewhere
    pub fn require_target(&self) -> Result<TargetMajor, ConfigError> {
        self.target.ok_or(ConfigError::MissingTarget)
    }

    /// Registry request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.registry.timeout_secs)
    }
}
