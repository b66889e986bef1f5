//! Report command implementation.
//!
//! The `zcompat report` command checks the environment and renders the
//! requirements and recommendations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checker::CompatibilityChecker;
use crate::cli::args::ReportArgs;
use crate::config::CompatConfig;
use crate::environment::RuntimeInspector;
use crate::error::Result;
use crate::report::{render, OutputFormat, Report, DEFAULT_TITLE};
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::environment::load_environment;

/// The report command implementation.
pub struct ReportCommand {
    project_root: PathBuf,
    args: ReportArgs,
    config: CompatConfig,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(project_root: &Path, args: ReportArgs, config: CompatConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config,
        }
    }

    /// Output format after applying flags over config.
    pub fn format(&self) -> OutputFormat {
        self.args
            .format
            .or(self.config.report.format)
            .unwrap_or_default()
    }

    /// Report heading after applying flags over config.
    pub fn title(&self) -> &str {
        self.args
            .title
            .as_deref()
            .or(self.config.report.title.as_deref())
            .unwrap_or(DEFAULT_TITLE)
    }

    /// Output file after applying flags over config.
    ///
    /// A relative path from config is taken relative to the project root.
    pub fn output(&self) -> Option<PathBuf> {
        self.args.output.clone().or_else(|| {
            self.config.report.output.as_ref().map(|output| {
                if output.is_absolute() {
                    output.clone()
                } else {
                    self.project_root.join(output)
                }
            })
        })
    }

    /// Build the report for an environment.
    pub fn build(&self, env: &dyn RuntimeInspector) -> Report {
        CompatibilityChecker::new(env).report(self.title())
    }

    /// Exit status for a finished report.
    pub fn result_for(&self, report: &Report) -> CommandResult {
        if self.args.strict && !report.is_compatible() {
            CommandResult::failure(1)
        } else {
            CommandResult::success()
        }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = load_environment(&self.args.environment, &self.config, &self.project_root)?;
        let report = self.build(&env);

        tracing::debug!(
            requirements = report.requirements.len(),
            recommendations = report.recommendations.len(),
            "Compatibility report for PHP {}",
            env.version
        );

        let format = self.format();
        match self.output() {
            Some(path) => {
                let mut buffer = Vec::new();
                render(&report, format, false, &mut buffer)?;
                fs::write(&path, buffer)?;
                ui.success(&format!("Report written to {}", path.display()));
            }
            None => {
                let use_color = should_use_colors(&console::Term::stdout());
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                render(&report, format, use_color, &mut handle)?;
                handle.flush()?;
            }
        }

        if !report.is_compatible() {
            ui.warning(&format!(
                "{} requirement(s) not met",
                report.requirements.len()
            ));
        }

        Ok(self.result_for(&report))
    }
}
