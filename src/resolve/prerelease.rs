//! Stable vs pre-release classification
//!
//! A keyword heuristic, not a semver pre-release parser: any occurrence of an
//! instability keyword anywhere in the string marks it as a pre-release.

/// Keywords that mark a version as a pre-release
const PRERELEASE_KEYWORDS: [&str; 9] = [
    "canary",
    "beta",
    "rc",
    "alpha",
    "next",
    "dev",
    "snapshot",
    "preview",
    "experimental",
];

/// Returns true if the version string contains any pre-release keyword
pub fn is_prerelease(version: &str) -> bool {
    let lower = version.to_lowercase();
    PRERELEASE_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}
