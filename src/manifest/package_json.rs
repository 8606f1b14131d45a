//! package.json reading and rewriting
//!
//! Handles:
//! - Shape validation before analysis
//! - dependencies / devDependencies extraction in merged order
//! - Rewriting analyzed constraints to `^<recommended>` with field order preserved

use crate::domain::AnalysisEntry;
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Dependency groups read and rewritten, in merge order
const DEPENDENCY_GROUPS: [&str; 2] = ["dependencies", "devDependencies"];

/// A dependency as declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredDependency {
    /// Package name
    pub name: String,
    /// Raw declared constraint, e.g. `^17.0.0`
    pub constraint: String,
}

impl DeclaredDependency {
    /// Creates a new declared dependency
    pub fn new(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
        }
    }
}

/// A validated package.json document
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    path: PathBuf,
    value: Value,
}

impl PackageManifest {
    /// Parse and validate manifest text
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        let value: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(&path, e.to_string()))?;
        Self::from_value(value, path)
    }

    /// Validate an already parsed manifest
    ///
    /// A manifest must be an object with a non-empty string `name` and at least
    /// one of `dependencies` / `devDependencies`.
    pub fn from_value(value: Value, path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        let Some(object) = value.as_object() else {
            return Err(ManifestError::NotAnObject { path });
        };

        let has_name = object
            .get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| !name.is_empty());
        if !has_name {
            return Err(ManifestError::MissingName { path });
        }

        let has_dependencies = DEPENDENCY_GROUPS
            .iter()
            .any(|group| object.get(*group).is_some_and(|v| !v.is_null()));
        if !has_dependencies {
            return Err(ManifestError::MissingDependencies { path });
        }

        Ok(Self { path, value })
    }

    /// The manifest's `name`
    pub fn name(&self) -> &str {
        self.value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Where the manifest was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The manifest document
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Declared dependencies with devDependencies merged over dependencies
    ///
    /// Order follows dependencies first, then devDependencies not already seen.
    /// A devDependencies constraint overrides a same-named dependencies one but
    /// keeps its position. Non-string constraints are skipped.
    pub fn dependencies(&self) -> Vec<DeclaredDependency> {
        let mut merged: Map<String, Value> = Map::new();
        for group in DEPENDENCY_GROUPS {
            if let Some(deps) = self.value.get(group).and_then(Value::as_object) {
                for (name, constraint) in deps {
                    merged.insert(name.clone(), constraint.clone());
                }
            }
        }

        merged
            .into_iter()
            .filter_map(|(name, constraint)| {
                constraint
                    .as_str()
                    .map(|c| DeclaredDependency::new(name.clone(), c))
            })
            .collect()
    }

    /// The manifest with every analyzed constraint rewritten to `^<recommended>`
    ///
    /// Both dependency groups are rewritten independently from the same entry.
    /// Non-string constraints and every other field pass through untouched.
    pub fn with_recommendations(&self, entries: &[AnalysisEntry]) -> Value {
        let mut updated = self.value.clone();

        for group in DEPENDENCY_GROUPS {
            if let Some(deps) = updated.get_mut(group).and_then(Value::as_object_mut) {
                for entry in entries {
                    let Some(constraint) = deps.get_mut(&entry.name) else {
                        continue;
                    };
                    if constraint.is_string() {
                        *constraint = Value::String(format!("^{}", entry.recommended_version));
                    }
                }
            }
        }

        updated
    }
}

/// Render a manifest the way npm writes it: two-space indent, trailing newline
pub fn render_manifest(value: &Value) -> String {
    // Serializing a serde_json::Value cannot fail
    let mut rendered = serde_json::to_string_pretty(value).unwrap_or_default();
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskLevel;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(content: &str) -> Result<PackageManifest, ManifestError> {
        PackageManifest::parse(content, "package.json")
    }

    fn entry(name: &str, recommended: &str) -> AnalysisEntry {
        AnalysisEntry {
            name: name.to_string(),
            current_version: "0.0.0".to_string(),
            recommended_version: recommended.to_string(),
            latest_version: recommended.to_string(),
            is_framework_package: false,
            needs_update: true,
            risk: RiskLevel::Low,
            notes: String::new(),
            released_at: None,
        }
    }

    #[test]
    fn test_parse_simple_dependencies() {
        let manifest = parse(
            r#"{
            "name": "app",
            "dependencies": {
                "@angular/core": "^16.2.0",
                "rxjs": "~7.8.0"
            }
        }"#,
        )
        .unwrap();

        assert_eq!(manifest.name(), "app");
        assert_eq!(manifest.path(), Path::new("package.json"));
        assert_eq!(
            manifest.dependencies(),
            vec![
                DeclaredDependency::new("@angular/core", "^16.2.0"),
                DeclaredDependency::new("rxjs", "~7.8.0"),
            ]
        );
    }

    #[test]
    fn test_merged_order_and_dev_override() {
        let manifest = parse(
            r#"{
            "name": "app",
            "dependencies": { "zone.js": "~0.13.0", "rxjs": "^7.0.0", "tslib": "^2.3.0" },
            "devDependencies": { "typescript": "~5.1.0", "rxjs": "^7.8.0" }
        }"#,
        )
        .unwrap();

        let names: Vec<_> = manifest
            .dependencies()
            .into_iter()
            .map(|d| (d.name, d.constraint))
            .collect();
        assert_eq!(
            names,
            vec![
                ("zone.js".to_string(), "~0.13.0".to_string()),
                ("rxjs".to_string(), "^7.8.0".to_string()),
                ("tslib".to_string(), "^2.3.0".to_string()),
                ("typescript".to_string(), "~5.1.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_string_constraints_are_skipped() {
        let manifest = parse(
            r#"{ "name": "app", "dependencies": { "weird": { "version": "1" }, "rxjs": "^7.0.0" } }"#,
        )
        .unwrap();
        assert_eq!(manifest.dependencies().len(), 1);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse("not json"),
            Err(ManifestError::JsonParseError { .. })
        ));
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(
            parse("[]"),
            Err(ManifestError::NotAnObject { .. })
        ));
    }

    #[test]
    fn test_missing_name() {
        assert!(matches!(
            parse(r#"{ "dependencies": {} }"#),
            Err(ManifestError::MissingName { .. })
        ));
        assert!(matches!(
            parse(r#"{ "name": "", "dependencies": {} }"#),
            Err(ManifestError::MissingName { .. })
        ));
    }

    #[test]
    fn test_missing_dependencies() {
        assert!(matches!(
            parse(r#"{ "name": "app", "scripts": {} }"#),
            Err(ManifestError::MissingDependencies { .. })
        ));
    }

    #[test]
    fn test_dev_dependencies_only_is_valid() {
        let manifest = parse(r#"{ "name": "lib", "devDependencies": { "jest": "^29.0.0" } }"#);
        assert!(manifest.is_ok());
    }

    #[test]
    fn test_with_recommendations_rewrites_both_groups() {
        let manifest = parse(
            r#"{
            "name": "app",
            "dependencies": { "rxjs": "^7.0.0", "untouched": "1.0.0" },
            "devDependencies": { "rxjs": "~7.5.0" }
        }"#,
        )
        .unwrap();

        let updated = manifest.with_recommendations(&[entry("rxjs", "7.8.1")]);
        assert_eq!(updated["dependencies"]["rxjs"], "^7.8.1");
        assert_eq!(updated["devDependencies"]["rxjs"], "^7.8.1");
        assert_eq!(updated["dependencies"]["untouched"], "1.0.0");
    }

    #[test]
    fn test_with_recommendations_keeps_non_string_constraint() {
        let manifest = parse(
            r#"{
            "name": "app",
            "dependencies": { "rxjs": { "version": "7" } },
            "devDependencies": { "rxjs": "^7.0.0" }
        }"#,
        )
        .unwrap();

        let updated = manifest.with_recommendations(&[entry("rxjs", "7.8.1")]);
        assert_eq!(updated["dependencies"]["rxjs"], json!({ "version": "7" }));
        assert_eq!(updated["devDependencies"]["rxjs"], "^7.8.1");
    }

    #[test]
    fn test_with_recommendations_preserves_field_order() {
        let content = r#"{
  "name": "app",
  "version": "0.0.0",
  "scripts": {
    "build": "ng build"
  },
  "dependencies": {
    "zone.js": "~0.13.0",
    "@angular/core": "^16.2.0"
  },
  "private": true
}
"#;
        let manifest = parse(content).unwrap();
        let updated = manifest.with_recommendations(&[entry("@angular/core", "17.1.0")]);

        assert_eq!(
            render_manifest(&updated),
            content.replace("^16.2.0", "^17.1.0")
        );
    }

    #[test]
    fn test_render_manifest_round_trip() {
        let content = "{\n  \"name\": \"app\",\n  \"dependencies\": {\n    \"b\": \"1\",\n    \"a\": \"2\"\n  }\n}\n";
        let manifest = parse(content).unwrap();
        assert_eq!(render_manifest(manifest.as_value()), content);
    }
}
