//! CLI argument parsing module for ngup

use crate::domain::TargetMajor;
use crate::error::ConfigError;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a target major; text without leading digits becomes an unknown target
fn parse_target(s: &str) -> Result<TargetMajor, String> {
    if s.trim().is_empty() {
        return Err("empty target".to_string());
    }
    Ok(TargetMajor::parse(s))
}

/// Angular-aware dependency upgrade advisor
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ngup",
    version,
    about = "Recommend dependency versions for an Angular major upgrade"
)]
pub struct CliArgs {
    /// package.json file or directory containing one (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Target framework major version (e.g. 17)
    #[arg(short, long, value_parser = parse_target)]
    pub target: Option<TargetMajor>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show manifest changes in diff format
    #[arg(long)]
    pub diff: bool,

    /// Increase log and output detail (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only show packages that need updates, log errors only
    #[arg(short, long)]
    pub quiet: bool,

    // Write options
    /// Rewrite the manifest in place with the recommended constraints
    #[arg(long)]
    pub write: bool,

    /// Write the updated manifest to this file instead
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    // Registry options
    /// npm registry base URL
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Read package metadata from a JSON snapshot instead of the network
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Maximum concurrent registry lookups
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Configuration file (default: ngup.toml next to the manifest)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Reject option combinations clap cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.json && self.diff {
            return Err(ConfigError::ConflictingOptions {
                message: "--json and --diff cannot be used together".to_string(),
            });
        }
        if self.write && self.output.is_some() {
            return Err(ConfigError::ConflictingOptions {
                message: "--write and --output cannot be used together".to_string(),
            });
        }
        if self.concurrency == Some(0) {
            return Err(ConfigError::InvalidConcurrency { value: 0 });
        }
        Ok(())
    }

    /// Where the updated manifest should be written, if anywhere
    pub fn write_destination(&self, manifest_path: &std::path::Path) -> Option<PathBuf> {
        if self.write {
            Some(manifest_path.to_path_buf())
        } else {
            self.output.clone()
        }
    }

    /// Whether a progress bar may be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
