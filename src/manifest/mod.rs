//! package.json handling
//!
//! This module provides functionality to:
//! - Locate and read a package.json
//! - Validate its shape and extract declared dependencies
//! - Emit the manifest with recommended constraints applied

mod package_json;
mod writer;

pub use package_json::{render_manifest, DeclaredDependency, PackageManifest};
pub use writer::{
    apply_recommendations, locate_manifest, read_manifest, write_manifest, WriteResult,
};

/// Manifest file name looked up inside a directory
pub const MANIFEST_FILENAME: &str = "package.json";
