//! Diff output formatter for showing changes
//!
//! This module provides:
//! - Unified-diff-like display of rewritten constraints
//! - One hunk per changed constraint, in manifest order

use crate::domain::AnalysisSummary;
use crate::orchestrator::OrchestratorResult;
use crate::output::OutputFormatter;
use serde_json::Value;
use std::io::Write;

const DEPENDENCY_GROUPS: [&str; 2] = ["dependencies", "devDependencies"];

/// Diff formatter for showing constraint changes
#[derive(Debug, Default)]
pub struct DiffFormatter;

/// One rewritten constraint
struct ConstraintChange<'a> {
    group: &'a str,
    name: &'a str,
    before: &'a str,
    after: &'a str,
}

impl DiffFormatter {
    /// Create a new diff formatter
    pub fn new() -> Self {
        Self
    }

    fn changes<'a>(original: &'a Value, updated: &'a Value) -> Vec<ConstraintChange<'a>> {
        let mut changes = Vec::new();
        for group in DEPENDENCY_GROUPS {
            let (Some(before), Some(after)) = (
                original.get(group).and_then(Value::as_object),
                updated.get(group).and_then(Value::as_object),
            ) else {
                continue;
            };

            for (name, old) in before {
                let (Some(old), Some(new)) = (old.as_str(), after.get(name).and_then(Value::as_str))
                else {
                    continue;
                };
                if old != new {
                    changes.push(ConstraintChange {
                        group,
                        name,
                        before: old,
                        after: new,
                    });
                }
            }
        }
        changes
    }
}

impl OutputFormatter for DiffFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let changes = Self::changes(
            &result.analysis.original_manifest,
            &result.analysis.updated_manifest,
        );

        if !changes.is_empty() {
            let path = result.manifest_path.display();
            writeln!(writer, "--- a/{}", path)?;
            writeln!(writer, "+++ b/{}", path)?;

            for change in &changes {
                writeln!(writer, "@@ {} {} @@", change.group, change.name)?;
                writeln!(writer, "-    \"{}\": \"{}\"", change.name, change.before)?;
                writeln!(writer, "+    \"{}\": \"{}\"", change.name, change.after)?;
            }
            writeln!(writer)?;
        }

        writeln!(writer, "# {} constraint(s) changed", changes.len())?;
        self.format_summary(&result.analysis.summary, writer)
    }

    fn format_summary(
        &self,
        summary: &AnalysisSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "# {} of {} package(s) need updates",
            summary.needs_update, summary.total
        )
    }
}
