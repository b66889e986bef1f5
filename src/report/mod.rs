//! Compatibility reports and their renderings.
//!
//! A [`Report`] holds the two message lists. Formatters turn it into an HTML
//! page, JSON, or terminal text.

pub mod html;
pub mod human;
pub mod json;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub use html::HtmlFormatter;
pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Z Compatibility";

/// The result of one checker run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Heading of the rendered report.
    pub title: String,
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
    /// Failed hard checks.
    pub requirements: Vec<String>,
    /// Failed soft checks and reminders.
    pub recommendations: Vec<String>,
}

impl Report {
    /// Create a report stamped with the current time.
    pub fn new(title: &str, requirements: Vec<String>, recommendations: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            generated_at: Utc::now(),
            requirements,
            recommendations,
        }
    }

    /// Whether every requirement is met.
    pub fn is_compatible(&self) -> bool {
        self.requirements.is_empty()
    }
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone HTML page.
    #[default]
    Html,
    /// Machine-readable JSON.
    Json,
    /// Terminal text.
    Text,
}

/// Trait for rendering a report.
pub trait ReportFormatter {
    /// Write the rendered report to `writer`.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

/// Render `report` in `format` into `writer`.
pub fn render<W: Write>(
    report: &Report,
    format: OutputFormat,
    use_color: bool,
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Html => HtmlFormatter::new().format(report, writer),
        OutputFormat::Json => JsonFormatter::new().format(report, writer),
        OutputFormat::Text => HumanFormatter::new(use_color).format(report, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_when_no_requirements() {
        let report = Report::new(DEFAULT_TITLE, vec![], vec!["check it".into()]);
        assert!(report.is_compatible());
        assert!(!Report::new(DEFAULT_TITLE, vec!["fix".into()], vec![]).is_compatible());
    }

    #[test]
    fn render_dispatches_by_format() {
        let report = Report::new(DEFAULT_TITLE, vec!["fix me".into()], vec![]);

        let mut html = Vec::new();
        render(&report, OutputFormat::Html, false, &mut html).unwrap();
        assert!(String::from_utf8(html).unwrap().starts_with("<!doctype html>"));

        let mut json = Vec::new();
        render(&report, OutputFormat::Json, false, &mut json).unwrap();
        assert!(serde_json::from_slice::<serde_json::Value>(&json).is_ok());

        let mut text = Vec::new();
        render(&report, OutputFormat::Text, false, &mut text).unwrap();
        assert!(String::from_utf8(text).unwrap().contains("fix me"));
    }

    #[test]
    fn output_format_deserializes_lowercase() {
        let format: OutputFormat = serde_yaml::from_str("json").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
