//! JSON output formatter.
//!
//! Formats a report as machine-readable JSON for tooling integration.

use super::{Report, ReportFormatter};
use serde::Serialize;
use std::io::Write;

/// Formats a report as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: &'a str,
    generated_at: String,
    requirements: &'a [String],
    recommendations: &'a [String],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    compatible: bool,
    requirements: usize,
    recommendations: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            title: &report.title,
            generated_at: report.generated_at.to_rfc3339(),
            requirements: &report.requirements,
            recommendations: &report.recommendations,
            summary: JsonSummary {
                compatible: report.is_compatible(),
                requirements: report.requirements.len(),
                recommendations: report.recommendations.len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
