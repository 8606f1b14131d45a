//! Core domain models for ngup
//!
//! This module contains the fundamental types used throughout the application:
//! - Registry metadata for a package
//! - The target framework major and the framework naming profile
//! - Analysis entries, summary and result structures

mod analysis;
mod framework;
mod metadata;
mod target;

pub use analysis::{AnalysisEntry, AnalysisResult, AnalysisSummary, RiskLevel};
pub use framework::FrameworkProfile;
pub use metadata::{DistTags, PackageMetadata, VersionRecord};
pub use target::TargetMajor;
