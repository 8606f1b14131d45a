//! JSON output formatter for machine processing
//!
//! Emits `{ target, summary, analysis, updatedManifest }` with camelCase keys.

use crate::domain::{AnalysisEntry, AnalysisSummary, TargetMajor};
use crate::orchestrator::OrchestratorResult;
use crate::output::OutputFormatter;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    target: TargetMajor,
    summary: &'a AnalysisSummary,
    analysis: &'a [AnalysisEntry],
    updated_manifest: &'a Value,
}

fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            target: result.analysis.target,
            summary: &result.analysis.summary,
            analysis: &result.analysis.analysis,
            updated_manifest: &result.analysis.updated_manifest,
        };
        write_json(&output, writer)
    }

    fn format_summary(
        &self,
        summary: &AnalysisSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        write_json(summary, writer)
    }
}
