//! Host framework naming conventions
//!
//! Decides which packages are framework-core (resolved by the framework's own
//! major), which package gates ecosystem compatibility through peer
//! dependencies, and which names are risky ecosystem neighbours.

use super::RiskLevel;
use serde::{Deserialize, Serialize};

/// Naming conventions of the host framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkProfile {
    /// Human-readable framework name used in notes
    pub display_name: String,
    /// The package ecosystem packages declare a peer dependency on
    pub core_package: String,
    /// Scope prefix shared by framework-core packages
    pub core_scope: String,
    /// UI-toolkit sub-packages inside the core scope that are not framework-core
    pub toolkit_packages: Vec<String>,
    /// Name prefixes of ecosystem-adjacent packages
    pub adjacent_prefixes: Vec<String>,
    /// Substrings marking UI-toolkit or state-management packages
    pub adjacent_markers: Vec<String>,
}

impl FrameworkProfile {
    /// The Angular profile
    pub fn angular() -> Self {
        Self {
            display_name: "Angular".to_string(),
            core_package: "@angular/core".to_string(),
            core_scope: "@angular/".to_string(),
            toolkit_packages: vec!["@angular/material".to_string(), "@angular/cdk".to_string()],
            adjacent_prefixes: vec!["ng-".to_string(), "ngx-".to_string(), "@ng-".to_string()],
            adjacent_markers: vec![
                "@angular/material".to_string(),
                "@angular/cdk".to_string(),
                "@ngrx".to_string(),
            ],
        }
    }

    /// Returns true if the package is resolved against the framework major directly
    pub fn is_framework_core(&self, name: &str) -> bool {
        name.starts_with(&self.core_scope)
            && !self
                .toolkit_packages
                .iter()
                .any(|toolkit| name.starts_with(toolkit.as_str()))
    }

    /// Returns true if the package name follows an ecosystem-adjacent convention
    pub fn is_ecosystem_adjacent(&self, name: &str) -> bool {
        self.adjacent_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
            || self
                .adjacent_markers
                .iter()
                .any(|marker| name.contains(marker.as_str()))
    }

    /// Upgrade risk implied by the package name
    pub fn risk_for(&self, name: &str) -> RiskLevel {
        if self.is_ecosystem_adjacent(name) {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl Default for FrameworkProfile {
    fn default() -> Self {
        Self::angular()
    }
}
