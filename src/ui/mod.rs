//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for status output on stderr
//! - [`MockUI`] for capturing output in tests
//!
//! Reports themselves are written by the formatters in [`crate::report`];
//! the UI only carries status lines, so it writes to stderr and never mixes
//! with a report on stdout.
//!
//! # Example
//!
//! ```
//! use zcompat::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Report written");
//! assert!(ui.successes().contains(&"Report written".to_string()));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, CompatTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);
}
