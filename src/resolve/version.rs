//! Version ordering over dot-separated numeric version strings
//!
//! This is deliberately not a semver implementation: each component is read as
//! an integer from its leading digits, so pre-release suffix text never takes
//! part in ordering. `1.2` and `1.2.0` compare equal.

use std::cmp::Ordering;

/// Range operator characters stripped from a declared constraint
const RANGE_OPERATORS: [char; 5] = ['^', '~', '>', '=', '<'];

/// Read one version component as an integer.
///
/// Only leading ASCII digits count; a component with none (or one that
/// overflows `u64`) reads as 0.
fn component_value(component: &str) -> u64 {
    let digits_end = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(component.len());
    component[..digits_end].parse().unwrap_or(0)
}

fn components(version: &str) -> Vec<u64> {
    version.split('.').map(component_value).collect()
}

/// Compare two version strings component-wise
///
/// Missing components are treated as 0 and the first unequal component decides.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parts_a = components(a);
    let parts_b = components(b);
    let len = parts_a.len().max(parts_b.len());

    for i in 0..len {
        let pa = parts_a.get(i).copied().unwrap_or(0);
        let pb = parts_b.get(i).copied().unwrap_or(0);
        match pa.cmp(&pb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

/// Sort versions highest first (stable: equal versions keep their input order)
pub fn sort_descending<S: AsRef<str>>(versions: &mut [S]) {
    versions.sort_by(|a, b| compare_versions(b.as_ref(), a.as_ref()));
}

/// Returns true if `version` orders at or above `floor`
pub fn is_at_least(version: &str, floor: &str) -> bool {
    compare_versions(version, floor) != Ordering::Less
}

/// Strip range operators from a declared constraint, e.g. `^17.0.0` -> `17.0.0`
pub fn clean_version(raw: &str) -> String {
    raw.chars()
        .filter(|c| !RANGE_OPERATORS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// The major component of a version, read the same way `compare_versions` reads it
pub fn major_of(version: &str) -> u64 {
    version.split('.').next().map(component_value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 10] = [
        "17.0.0",
        "9.0.0",
        "1.2",
        "1.2.0",
        "18.0.0-next.3",
        "18.0.0",
        "0.0.1",
        "not-a-version",
        "",
        "4.17.21",
    ];

    #[test]
    fn test_compare_fixed_cases() {
        assert_eq!(compare_versions("17.0.0", "9.0.0"), Ordering::Greater);
        assert_eq!(compare_versions("1.2", "1.2.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.9.0", "1.10.0"), Ordering::Less);
        assert_eq!(compare_versions("2.0.0", "1.99.99"), Ordering::Greater);
    }

    #[test]
    fn test_compare_is_antisymmetric_and_reflexive() {
        for a in SAMPLES {
            assert_eq!(compare_versions(a, a), Ordering::Equal, "{a} vs itself");
            for b in SAMPLES {
                assert_eq!(
                    compare_versions(a, b),
                    compare_versions(b, a).reverse(),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_prerelease_suffix_is_invisible() {
        assert_eq!(compare_versions("18.0.0-next.0", "18.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.2.3-beta", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn test_non_numeric_components_read_as_zero() {
        assert_eq!(compare_versions("x.y.z", "0.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.x", "1.0"), Ordering::Equal);
        assert_eq!(compare_versions("", "0"), Ordering::Equal);
    }

    #[test]
    fn test_sort_descending() {
        let mut versions = vec!["16.2.0", "17.1.0", "17.0.0", "9.9.9"];
        sort_descending(&mut versions);
        assert_eq!(versions, vec!["17.1.0", "17.0.0", "16.2.0", "9.9.9"]);
    }

    #[test]
    fn test_sort_descending_owned_strings() {
        let mut versions = vec!["1.0.0".to_string(), "1.10.0".to_string(), "1.2.0".to_string()];
        sort_descending(&mut versions);
        assert_eq!(versions[0], "1.10.0");
        assert_eq!(versions[2], "1.0.0");
    }

    #[test]
    fn test_is_at_least() {
        assert!(is_at_least("17.1.0", "17.0.0"));
        assert!(is_at_least("17.0.0", "17.0"));
        assert!(!is_at_least("16.9.9", "17.0.0"));
    }

    #[test]
    fn test_clean_version() {
        assert_eq!(clean_version("^17.0.0"), "17.0.0");
        assert_eq!(clean_version("~1.2.3"), "1.2.3");
        assert_eq!(clean_version(">=2.0.0"), "2.0.0");
        assert_eq!(clean_version(" <=3.1 "), "3.1");
        assert_eq!(clean_version("4.17.21"), "4.17.21");
    }

    #[test]
    fn test_major_of() {
        assert_eq!(major_of("17.1.0"), 17);
        assert_eq!(major_of("18.0.0-next.1"), 18);
        assert_eq!(major_of("latest"), 0);
    }
}
