//! Target framework major version

use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The framework major version an analysis targets
///
/// Built from an integer or a numeric string. A string without leading digits
/// yields an unknown target; every comparison against an unknown target is
/// false, so no version ever matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TargetMajor(Option<u64>);

impl TargetMajor {
    /// Creates a known target
    pub fn new(major: u64) -> Self {
        Self(Some(major))
    }

    /// Creates an unknown target
    pub fn unknown() -> Self {
        Self(None)
    }

    /// Parses a target from text, reading its leading digits (`"17"`, `" 18 "`, `"19.x"`)
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        Self(s[..digits_end].parse().ok())
    }

    /// The numeric value, if known
    pub fn value(&self) -> Option<u64> {
        self.0
    }

    /// Returns true if the target is a usable number
    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }

    /// `target == major`
    pub fn equals(&self, major: u64) -> bool {
        self.0 == Some(major)
    }

    /// `target >= major`
    pub fn at_least(&self, major: u64) -> bool {
        self.0.is_some_and(|t| t >= major)
    }

    /// `major > target`
    pub fn is_exceeded_by(&self, major: u64) -> bool {
        self.0.is_some_and(|t| major > t)
    }
}

impl From<u64> for TargetMajor {
    fn from(major: u64) -> Self {
        Self::new(major)
    }
}

impl FromStr for TargetMajor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for TargetMajor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(major) => write!(f, "{}", major),
            None => write!(f, "unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for TargetMajor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
            Null(Option<()>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::new(n),
            Raw::Text(s) => Self::parse(&s),
            Raw::Null(_) => Self::unknown(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(TargetMajor::parse("17"), TargetMajor::new(17));
        assert_eq!(TargetMajor::parse(" 18 "), TargetMajor::new(18));
        assert_eq!(TargetMajor::parse("19.2"), TargetMajor::new(19));
    }

    #[test]
    fn test_parse_non_numeric_is_unknown() {
        let target = TargetMajor::parse("latest");
        assert!(!target.is_known());
        assert_eq!(target.value(), None);
        assert_eq!(target.to_string(), "unknown");
    }

    #[test]
    fn test_comparisons() {
        let target = TargetMajor::new(17);
        assert!(target.equals(17));
        assert!(!target.equals(16));
        assert!(target.at_least(16));
        assert!(target.at_least(17));
        assert!(!target.at_least(18));
        assert!(target.is_exceeded_by(18));
        assert!(!target.is_exceeded_by(17));
    }

    #[test]
    fn test_unknown_target_never_compares_true() {
        let target = TargetMajor::unknown();
        assert!(!target.equals(0));
        assert!(!target.at_least(0));
        assert!(!target.is_exceeded_by(u64::MAX));
    }

    #[test]
    fn test_deserialize_number_and_string() {
        let n: TargetMajor = serde_json::from_str("17").unwrap();
        assert_eq!(n, TargetMajor::new(17));
        let s: TargetMajor = serde_json::from_str("\"18\"").unwrap();
        assert_eq!(s, TargetMajor::new(18));
        let bad: TargetMajor = serde_json::from_str("\"abc\"").unwrap();
        assert!(!bad.is_known());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&TargetMajor::new(17)).unwrap(), "17");
        assert_eq!(serde_json::to_string(&TargetMajor::unknown()).unwrap(), "null");
    }
}
