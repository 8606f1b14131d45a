//! Analysis result types
//!
//! Per-dependency entries, the aggregate summary and the overall result of an
//! analysis run.

use super::TargetMajor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Upgrade risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Plain label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Analysis of a single dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEntry {
    /// Package name
    pub name: String,
    /// Declared constraint with range operators stripped
    pub current_version: String,
    /// Version the resolver recommends
    pub recommended_version: String,
    /// Same as `recommended_version`
    pub latest_version: String,
    /// Whether the package was resolved as framework-core
    pub is_framework_package: bool,
    /// Whether the recommended version is strictly newer than the current one
    pub needs_update: bool,
    /// Upgrade risk
    pub risk: RiskLevel,
    /// Human-readable note
    pub notes: String,
    /// Publish time of the recommended version, when the registry reported it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_at: Option<DateTime<Utc>>,
}

/// Aggregate counts over the analysis entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total: usize,
    pub needs_update: usize,
    pub low_risk: usize,
    pub medium_risk: usize,
    pub high_risk: usize,
}

impl AnalysisSummary {
    /// Folds the entry list into counts
    pub fn from_entries(entries: &[AnalysisEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            summary.total += 1;
            if entry.needs_update {
                summary.needs_update += 1;
            }
            match entry.risk {
                RiskLevel::Low => summary.low_risk += 1,
                RiskLevel::Medium => summary.medium_risk += 1,
                RiskLevel::High => summary.high_risk += 1,
            }
            summary
        })
    }

    /// Returns true if any dependency needs an update
    pub fn has_updates(&self) -> bool {
        self.needs_update > 0
    }
}

/// Result of analyzing one manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Target major the analysis ran against
    pub target: TargetMajor,
    /// The manifest as read
    pub original_manifest: Value,
    /// The manifest with every analyzed constraint rewritten
    pub updated_manifest: Value,
    /// Per-dependency entries in manifest order
    pub analysis: Vec<AnalysisEntry>,
    /// Aggregate counts
    pub summary: AnalysisSummary,
}

impl AnalysisResult {
    /// Entries that need an update
    pub fn updates(&self) -> impl Iterator<Item = &AnalysisEntry> {
        self.analysis.iter().filter(|e| e.needs_update)
    }

    /// The manifest's `name` field
    pub fn manifest_name(&self) -> Option<&str> {
        self.original_manifest.get("name").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, needs_update: bool, risk: RiskLevel) -> AnalysisEntry {
        AnalysisEntry {
            name: name.to_string(),
            current_version: "1.0.0".to_string(),
            recommended_version: "2.0.0".to_string(),
            latest_version: "2.0.0".to_string(),
            is_framework_package: false,
            needs_update,
            risk,
            notes: String::new(),
            released_at: None,
        }
    }

    #[test]
    fn test_summary_from_entries() {
        let entries = vec![
            entry("a", true, RiskLevel::Low),
            entry("b", false, RiskLevel::Medium),
            entry("c", true, RiskLevel::Medium),
            entry("d", false, RiskLevel::High),
        ];

        let summary = AnalysisSummary::from_entries(&entries);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.needs_update, 2);
        assert_eq!(summary.low_risk, 1);
        assert_eq!(summary.medium_risk, 2);
        assert_eq!(summary.high_risk, 1);
        assert_eq!(
            summary.low_risk + summary.medium_risk + summary.high_risk,
            summary.total
        );
        assert!(summary.has_updates());
    }

    #[test]
    fn test_summary_empty() {
        let summary = AnalysisSummary::from_entries(&[]);
        assert_eq!(summary, AnalysisSummary::default());
        assert!(!summary.has_updates());
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let json = serde_json::to_value(entry("rxjs", true, RiskLevel::Low)).unwrap();
        assert_eq!(json["currentVersion"], "1.0.0");
        assert_eq!(json["recommendedVersion"], "2.0.0");
        assert_eq!(json["isFrameworkPackage"], false);
        assert_eq!(json["needsUpdate"], true);
        assert_eq!(json["risk"], "low");
        assert!(json.get("releasedAt").is_none());
    }

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::Low.to_string(), "low");
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert_eq!(RiskLevel::High.to_string(), "high");
    }
}
