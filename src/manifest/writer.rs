//! Manifest file reading and writing
//!
//! This module provides:
//! - Manifest location (a directory resolves to its package.json)
//! - Emitting the rewritten manifest

use crate::domain::AnalysisResult;
use crate::error::ManifestError;
use crate::manifest::{render_manifest, PackageManifest, MANIFEST_FILENAME};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of writing an updated manifest
#[derive(Debug)]
pub struct WriteResult {
    /// Destination path
    pub path: PathBuf,
    /// Number of constraints that changed
    pub updates_applied: usize,
}

impl WriteResult {
    /// Returns true if any constraint changed
    pub fn has_updates(&self) -> bool {
        self.updates_applied > 0
    }
}

/// Write the updated manifest of `result` to `destination`
///
/// The file is written even when nothing changed so that `--output` always
/// produces a file.
pub fn apply_recommendations(
    result: &AnalysisResult,
    destination: &Path,
) -> Result<WriteResult, ManifestError> {
    write_manifest(destination, &render_manifest(&result.updated_manifest))?;

    let write_result = WriteResult {
        path: destination.to_path_buf(),
        updates_applied: count_changed_constraints(result),
    };
    tracing::info!(
        path = %destination.display(),
        updates = write_result.updates_applied,
        "Wrote updated manifest"
    );

    Ok(write_result)
}

/// Count dependency constraints whose text differs between the two manifests
fn count_changed_constraints(result: &AnalysisResult) -> usize {
    ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|group| {
            let before = result.original_manifest.get(*group)?.as_object()?;
            let after = result.updated_manifest.get(*group)?.as_object()?;
            Some(
                before
                    .iter()
                    .filter(|(name, constraint)| after.get(*name) != Some(*constraint))
                    .count(),
            )
        })
        .sum()
}

/// Resolve a CLI path to a manifest file
///
/// A directory resolves to the package.json inside it.
pub fn locate_manifest(path: &Path) -> Result<PathBuf, ManifestError> {
    let candidate = if path.is_dir() {
        path.join(MANIFEST_FILENAME)
    } else {
        path.to_path_buf()
    };

    if !candidate.is_file() {
        return Err(ManifestError::not_found(candidate));
    }

    Ok(candidate)
}

/// Read and validate a manifest file
pub fn read_manifest(path: &Path) -> Result<PackageManifest, ManifestError> {
    let content = fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    PackageManifest::parse(&content, path)
}

/// Write content to a manifest file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}
