//! ngup - Angular-aware dependency upgrade advisor library
//!
//! Given a package.json and a target Angular major, this library recommends a
//! version for every dependency:
//! - Framework-core packages (`@angular/*`) move to the newest release on the target major
//! - Ecosystem packages move to the newest release whose peer dependency on
//!   `@angular/core` accepts the target
//! - Nothing is ever downgraded

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod resolve;

pub use analyzer::DependencyAnalyzer;
pub use config::Config;
pub use error::{AppError, ConfigError, ManifestError, RegistryError};
