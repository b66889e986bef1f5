//! HTML page formatter.
//!
//! Messages already contain their own emphasis markup and are written as-is.
//! A list is left out entirely when it has no items.

use super::{Report, ReportFormatter};
use std::io::Write;

/// Formats a report as a standalone HTML page.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Create a new HTML formatter.
    pub fn new() -> Self {
        Self
    }

    fn write_list<W: Write>(writer: &mut W, id: &str, items: &[String]) -> std::io::Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        write!(writer, "<ul id=\"{}\">", id)?;
        for item in items {
            write!(writer, "<li>{}</li>", item)?;
        }
        writeln!(writer, "</ul>")
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let title = escape_html(&report.title);

        writeln!(writer, "<!doctype html>")?;
        writeln!(writer, "<html lang=\"en\">")?;
        writeln!(writer, "<head>")?;
        writeln!(writer, "    <meta charset=\"UTF-8\">")?;
        writeln!(writer, "    <title>{}</title>", title)?;
        writeln!(writer, "</head>")?;
        writeln!(writer, "<body>")?;
        writeln!(writer, "<h1>{}</h1>", title)?;

        writeln!(writer, "<h2>Requirements</h2>")?;
        Self::write_list(writer, "requirements", &report.requirements)?;

        writeln!(writer, "<h2>Recommendations</h2>")?;
        Self::write_list(writer, "recommendations", &report.recommendations)?;

        writeln!(writer, "</body>")?;
        writeln!(writer, "</html>")?;
        Ok(())
    }
}

/// Escape text for use in HTML content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DEFAULT_TITLE;

    fn render(report: &Report) -> String {
        let mut output = Vec::new();
        HtmlFormatter::new().format(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn one_item_per_message_in_order() {
        let report = Report::new(
            DEFAULT_TITLE,
            vec!["first".into(), "second".into()],
            vec!["third".into()],
        );
        let html = render(&report);

        assert!(html.contains(
            "<ul id=\"requirements\"><li>first</li><li>second</li></ul>"
        ));
        assert!(html.contains("<ul id=\"recommendations\"><li>third</li></ul>"));
    }

    #[test]
    fn empty_lists_are_omitted() {
        let report = Report::new(DEFAULT_TITLE, vec![], vec![]);
        let html = render(&report);

        assert!(!html.contains("<ul"));
        assert!(html.contains("<h2>Requirements</h2>"));
        assert!(html.contains("<h2>Recommendations</h2>"));
    }

    #[test]
    fn emphasis_markup_passes_through() {
        let report = Report::new(
            DEFAULT_TITLE,
            vec!["Extension <strong>curl</strong> must be installed".into()],
            vec![],
        );
        assert!(render(&report).contains("<li>Extension <strong>curl</strong> must be installed</li>"));
    }

    #[test]
    fn title_is_escaped() {
        let report = Report::new("Staging <eu> & co", vec![], vec![]);
        let html = render(&report);
        assert!(html.contains("<title>Staging &lt;eu&gt; &amp; co</title>"));
        assert!(html.contains("<h1>Staging &lt;eu&gt; &amp; co</h1>"));
    }

    #[test]
    fn default_title_is_used() {
        let html = render(&Report::new(DEFAULT_TITLE, vec![], vec![]));
        assert!(html.contains("<h1>Z Compatibility</h1>"));
    }

    #[test]
    fn escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html("\"a\" 'b'"), "&quot;a&quot; &#39;b&#39;");
    }
}
