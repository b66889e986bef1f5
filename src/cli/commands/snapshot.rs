//! Snapshot command implementation.
//!
//! The `zcompat snapshot` command captures the PHP environment as JSON so a
//! report can be produced later, or elsewhere, with `--snapshot`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::SnapshotArgs;
use crate::config::CompatConfig;
use crate::environment::EnvironmentSnapshot;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::environment::load_environment;

/// The snapshot command implementation.
pub struct SnapshotCommand {
    project_root: PathBuf,
    args: SnapshotArgs,
    config: CompatConfig,
}

impl SnapshotCommand {
    /// Create a new snapshot command.
    pub fn new(project_root: &Path, args: SnapshotArgs, config: CompatConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config,
        }
    }
}

/// Serialize a snapshot as pretty JSON.
pub fn snapshot_json(snapshot: &EnvironmentSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|e| anyhow::anyhow!("Failed to serialize snapshot: {}", e).into())
}

impl Command for SnapshotCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let snapshot = load_environment(&self.args.environment, &self.config, &self.project_root)?;
        let json = snapshot_json(&snapshot)?;

        match &self.args.output {
            Some(path) => {
                fs::write(path, format!("{}\n", json))?;
                ui.success(&format!("Snapshot written to {}", path.display()));
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", json)?;
            }
        }

        Ok(CommandResult::success())
    }
}
