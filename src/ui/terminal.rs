//! Terminal UI writing status lines to stderr.

use console::Term;
use std::io::Write;

use super::{should_use_colors, CompatTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: CompatTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let term = Term::stderr();
        let theme = if should_use_colors(&term) {
            CompatTheme::new()
        } else {
            CompatTheme::plain()
        };

        Self { term, theme, mode }
    }
}

impl UserInterface for TerminalUI {
    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }
}
