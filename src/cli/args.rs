//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::report::OutputFormat;

/// zcompat - PHP environment compatibility reporter.
#[derive(Debug, Parser)]
#[command(name = "zcompat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .zcompat/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only print the report and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the environment and print the report (default)
    Report(ReportArgs),

    /// List every check in evaluation order
    List(ListArgs),

    /// Capture the PHP environment as JSON for later use with --snapshot
    Snapshot(SnapshotArgs),
}

/// Where the environment comes from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvironmentArgs {
    /// PHP binary to inspect
    #[arg(long)]
    pub php: Option<String>,

    /// php.ini to load instead of the binary's default
    #[arg(long)]
    pub ini: Option<PathBuf>,

    /// Read the environment from a JSON or YAML snapshot instead of PHP
    #[arg(long, conflicts_with_all = ["php", "ini"])]
    pub snapshot: Option<PathBuf>,

    /// Treat the request as served over https
    #[arg(long)]
    pub https: bool,
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub environment: EnvironmentArgs,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report heading
    #[arg(long)]
    pub title: Option<String>,

    /// Exit with status 1 when any requirement is not met
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `snapshot` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SnapshotArgs {
    #[command(flatten)]
    pub environment: EnvironmentArgs,

    /// Write the snapshot to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["zcompat"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_report_flags() {
        let cli = Cli::parse_from([
            "zcompat",
            "report",
            "--format",
            "json",
            "--php",
            "php8.2",
            "--https",
            "--strict",
        ]);
        let Some(Commands::Report(args)) = cli.command else {
            panic!("Expected Report command");
        };
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.environment.php.as_deref(), Some("php8.2"));
        assert!(args.environment.https);
        assert!(args.strict);
    }

    #[test]
    fn snapshot_conflicts_with_php() {
        let result = Cli::try_parse_from([
            "zcompat",
            "report",
            "--snapshot",
            "env.json",
            "--php",
            "php",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["zcompat", "list", "--quiet", "--no-color"]);
        assert!(cli.quiet);
        assert!(cli.no_color);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["zcompat", "report", "--format", "pdf"]);
        assert!(result.is_err());
    }
}
