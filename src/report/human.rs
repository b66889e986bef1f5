//! Human-readable output formatter.
//!
//! Formats a report for terminal display with optional color support.
//! `<strong>` emphasis becomes bold text; any other markup is dropped.

use super::{Report, ReportFormatter};
use console::style;
use regex::Regex;
use std::io::Write;
use std::sync::LazyLock;

static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<strong>(.*?)</strong>").unwrap());

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Formats a report for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Translate a message's markup for the terminal.
    pub fn render_message(&self, message: &str) -> String {
        let emphasized = STRONG.replace_all(message, |caps: &regex::Captures| {
            if self.use_color {
                style(&caps[1]).bold().force_styling(true).to_string()
            } else {
                caps[1].to_string()
            }
        });
        TAG.replace_all(&emphasized, "").into_owned()
    }

    fn heading(&self, text: &str) -> String {
        if self.use_color {
            style(text).bold().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    fn marker(&self, symbol: &'static str, failing: bool) -> String {
        if !self.use_color {
            return symbol.to_string();
        }
        let styled = style(symbol).force_styling(true);
        if failing {
            styled.red().bold().to_string()
        } else {
            styled.color256(208).to_string()
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.heading(&report.title))?;
        writeln!(writer)?;

        writeln!(writer, "{}", self.heading("Requirements"))?;
        if report.requirements.is_empty() {
            writeln!(writer, "  ✓ All requirements met")?;
        }
        for message in &report.requirements {
            writeln!(
                writer,
                "  {} {}",
                self.marker("✗", true),
                self.render_message(message)
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "{}", self.heading("Recommendations"))?;
        if report.recommendations.is_empty() {
            writeln!(writer, "  ✓ Nothing to review")?;
        }
        for message in &report.recommendations {
            writeln!(
                writer,
                "  {} {}",
                self.marker("⚠", false),
                self.render_message(message)
            )?;
        }

        Ok(())
    }
}
