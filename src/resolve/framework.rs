//! Resolution policy for framework-core packages
//!
//! Framework-core packages share the framework's own major version, so the
//! best candidate is simply the highest release on the target major.

use super::prerelease::is_prerelease;
use super::version::{compare_versions, major_of, sort_descending};
use super::VersionResolver;
use crate::domain::{PackageMetadata, TargetMajor};
use std::cmp::Ordering;

/// Picks the highest version on the target major
#[derive(Debug, Clone, Copy)]
pub struct FrameworkVersionResolver {
    target: TargetMajor,
}

impl FrameworkVersionResolver {
    /// Create a resolver for the given target major
    pub fn new(target: TargetMajor) -> Self {
        Self { target }
    }

    /// Fallback when nothing is published on the target major
    fn fallback(&self, current: &str) -> String {
        // A project already past the target is never pulled back
        if self.target.is_exceeded_by(major_of(current)) {
            return current.to_string();
        }
        match self.target.value() {
            Some(major) => format!("{}.0.0", major),
            None => current.to_string(),
        }
    }
}

impl VersionResolver for FrameworkVersionResolver {
    fn resolve(&self, current: &str, metadata: &PackageMetadata) -> String {
        let on_target: Vec<&str> = metadata
            .versions
            .keys()
            .map(String::as_str)
            .filter(|v| self.target.equals(major_of(v)))
            .collect();

        let mut candidates = if is_prerelease(current) {
            on_target
        } else {
            let stable: Vec<&str> = on_target
                .iter()
                .copied()
                .filter(|v| !is_prerelease(v))
                .collect();
            if stable.is_empty() {
                on_target
            } else {
                stable
            }
        };
        sort_descending(&mut candidates);

        let chosen = match candidates.first() {
            Some(best) => best.to_string(),
            None => self.fallback(current),
        };

        if compare_versions(&chosen, current) == Ordering::Less {
            tracing::debug!(
                package = %metadata.name,
                current = %current,
                candidate = %chosen,
                "Candidate below current version, keeping current"
            );
            return current.to_string();
        }

        tracing::debug!(
            package = %metadata.name,
            target = %self.target,
            recommended = %chosen,
            "Resolved framework package"
        );
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(versions: &[&str]) -> PackageMetadata {
        versions
            .iter()
            .fold(PackageMetadata::new("@angular/core"), |m, v| m.with_version(*v))
    }

    fn resolve(target: u64, current: &str, versions: &[&str]) -> String {
        FrameworkVersionResolver::new(TargetMajor::new(target)).resolve(current, &metadata(versions))
    }

    const VERSIONS: [&str; 4] = ["16.2.0", "17.0.0", "17.1.0", "18.0.0-next.0"];

    #[test]
    fn test_highest_on_target_major() {
        assert_eq!(resolve(17, "16.2.0", &VERSIONS), "17.1.0");
    }

    #[test]
    fn test_prefers_stable_over_prerelease_on_target() {
        let versions = ["17.0.0", "17.1.0", "17.2.0-rc.0"];
        assert_eq!(resolve(17, "16.2.0", &versions), "17.1.0");
    }

    #[test]
    fn test_prerelease_only_target_major() {
        assert_eq!(resolve(18, "17.1.0", &VERSIONS), "18.0.0-next.0");
    }

    #[test]
    fn test_current_prerelease_admits_prereleases() {
        let versions = ["18.0.0", "18.1.0-next.2", "18.1.0"];
        // Pre-release and stable 18.1.0 compare equal; both are valid heads
        let resolved = resolve(18, "18.0.0-rc.1", &versions);
        assert!(resolved.starts_with("18.1.0"), "got {resolved}");

        let versions = ["18.0.0", "18.2.0-next.0"];
        assert_eq!(resolve(18, "18.0.0-rc.1", &versions), "18.2.0-next.0");
        assert_eq!(resolve(18, "18.0.0", &versions), "18.0.0");
    }

    #[test]
    fn test_synthesized_fallback_when_target_unpublished() {
        assert_eq!(resolve(19, "16.2.0", &VERSIONS), "19.0.0");
    }

    #[test]
    fn test_project_ahead_of_target_is_kept() {
        assert_eq!(resolve(15, "17.0.0", &VERSIONS), "17.0.0");
    }

    #[test]
    fn test_no_downgrade_when_target_is_behind() {
        // 17.1.0 is the best match for 17 but the project is on 18
        assert_eq!(resolve(17, "18.1.0", &VERSIONS), "18.1.0");
        // Already past the best match within the same major
        assert_eq!(resolve(17, "17.3.0", &VERSIONS), "17.3.0");
    }

    #[test]
    fn test_no_versions_published() {
        assert_eq!(resolve(17, "16.0.0", &[]), "17.0.0");
        assert_eq!(resolve(17, "17.2.0", &[]), "17.2.0");
    }

    #[test]
    fn test_unknown_target_keeps_current() {
        let resolver = FrameworkVersionResolver::new(TargetMajor::parse("abc"));
        assert_eq!(resolver.resolve("16.2.0", &metadata(&VERSIONS)), "16.2.0");
    }
}
