//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A header naming the manifest and target major
//! - One aligned line per dependency with risk and notes
//! - Release dates in verbose mode
//! - Summary with risk breakdown

use crate::domain::{AnalysisEntry, AnalysisSummary, RiskLevel};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn colored_risk(&self, risk: RiskLevel) -> String {
        match risk {
            RiskLevel::Low => risk.label().green().to_string(),
            RiskLevel::Medium => risk.label().yellow().to_string(),
            RiskLevel::High => risk.label().red().bold().to_string(),
        }
    }

    /// Calculate the maximum package name length for alignment
    fn max_name_length(&self, entries: &[&AnalysisEntry]) -> usize {
        entries.iter().map(|e| e.name.len()).max().unwrap_or(0)
    }

    /// Format a single entry line
    fn format_entry_line(
        &self,
        entry: &AnalysisEntry,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let released_at = if self.verbosity == Verbosity::Verbose {
            entry.released_at
        } else {
            None
        };
        let date_display = released_at
            .map(|d| format!(" ({})", d.format("%Y/%m/%d %H:%M")))
            .unwrap_or_default();

        if self.color {
            let name_display = format!("{:width$}", entry.name, width = max_name_len);
            let recommended = if entry.needs_update {
                entry.recommended_version.bright_white().bold().to_string()
            } else {
                entry.recommended_version.dimmed().to_string()
            };

            writeln!(
                writer,
                "  {} {} {} {} [{}] {}{}",
                name_display,
                entry.current_version.dimmed(),
                "→".dimmed(),
                recommended,
                self.colored_risk(entry.risk),
                entry.notes,
                date_display.dimmed()
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} -> {} [{}] {}{}",
                entry.name,
                entry.current_version,
                entry.recommended_version,
                entry.risk,
                entry.notes,
                date_display,
                width = max_name_len
            )
        }
    }

    /// Write the header line naming the manifest and target
    fn format_header(
        &self,
        result: &OrchestratorResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let name = result.analysis.manifest_name().unwrap_or_default();
        let path_display = result.manifest_path.display().to_string();
        let target = result.analysis.target.to_string();

        if self.color {
            writeln!(
                writer,
                "{} {} - target {}",
                name.bold(),
                format!("({})", path_display).dimmed(),
                target.cyan().bold()
            )
        } else {
            writeln!(writer, "{} ({}) - target {}", name, path_display, target)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        self.format_header(result, writer)?;

        let entries: Vec<&AnalysisEntry> = match self.verbosity {
            Verbosity::Quiet => result.analysis.updates().collect(),
            _ => result.analysis.analysis.iter().collect(),
        };
        let max_name_len = self.max_name_length(&entries).max(20);

        for entry in &entries {
            self.format_entry_line(entry, max_name_len, writer)?;
        }
        writeln!(writer)?;

        self.format_summary(&result.analysis.summary, writer)?;

        if let Some(ref written) = result.write_result {
            let path_display = written.path.display().to_string();
            if self.color {
                writeln!(writer, "{} {}", "Wrote".green(), path_display.bold())?;
            } else {
                writeln!(writer, "Wrote {}", path_display)?;
            }
        }

        Ok(())
    }

    fn format_summary(
        &self,
        summary: &AnalysisSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            if self.color {
                writeln!(
                    writer,
                    "{} of {} need updates",
                    summary.needs_update.to_string().green(),
                    summary.total
                )?;
            } else {
                writeln!(writer, "{} of {} need updates", summary.needs_update, summary.total)?;
            }
            return Ok(());
        }

        if self.color {
            writeln!(writer, "{}:", "Summary".bold())?;
            if summary.has_updates() {
                writeln!(
                    writer,
                    "  {} of {} package(s) need updates",
                    summary.needs_update.to_string().green(),
                    summary.total
                )?;
            } else {
                writeln!(writer, "  {}", "All packages up to date".dimmed())?;
            }
            writeln!(
                writer,
                "  risk: {} low, {} medium, {} high",
                summary.low_risk.to_string().green(),
                summary.medium_risk.to_string().yellow(),
                summary.high_risk.to_string().red()
            )?;
        } else {
            writeln!(writer, "Summary:")?;
            if summary.has_updates() {
                writeln!(
                    writer,
                    "  {} of {} package(s) need updates",
                    summary.needs_update, summary.total
                )?;
            } else {
                writeln!(writer, "  All packages up to date")?;
            }
            writeln!(
                writer,
                "  risk: {} low, {} medium, {} high",
                summary.low_risk, summary.medium_risk, summary.high_risk
            )?;
        }

        Ok(())
    }
}
