use crate::pipeline::FilterOutcome;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Totals reported to the operator after a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub valid_lines_scanned: usize,
    pub lines_written: usize,
    pub malformed_lines: usize,
    pub invalid_level_lines: usize,
    pub output_file: String,
}

impl RunSummary {
    pub fn new(outcome: &FilterOutcome, output: &Path) -> Self {
        Self {
            valid_lines_scanned: outcome.valid_lines_scanned,
            lines_written: outcome.lines_written,
            malformed_lines: outcome.malformed_lines,
            invalid_level_lines: outcome.invalid_level_lines,
            output_file: output.display().to_string(),
        }
    }
}

pub fn format_summary_text(summary: &RunSummary) -> String {
    format!(
        "Valid lines scanned: {}\nLines written: {}\nOutput file: {}\n",
        summary.valid_lines_scanned.to_string().green().bold(),
        summary.lines_written.to_string().green().bold(),
        summary.output_file.cyan()
    )
}

pub fn format_summary_json(summary: &RunSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize summary: {}\"}}", e)
    })
}
