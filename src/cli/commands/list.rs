//! List command implementation.
//!
//! The `zcompat list` command shows every check in evaluation order.

use std::io::Write;

use serde::Serialize;

use crate::checks::{CheckDef, CheckKind, RECOMMENDATIONS, REQUIREMENTS};
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

#[derive(Serialize)]
struct ListedCheck {
    kind: CheckKind,
    id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    requires: Option<String>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    fn entries() -> Vec<ListedCheck> {
        let listed = |kind: CheckKind| {
            move |def: &CheckDef| ListedCheck {
                kind,
                id: def.id,
                requires: def.requires.map(|cap| cap.to_string()),
            }
        };

        REQUIREMENTS
            .iter()
            .map(listed(CheckKind::Requirement))
            .chain(RECOMMENDATIONS.iter().map(listed(CheckKind::Recommendation)))
            .collect()
    }

    /// Write the check list to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let entries = Self::entries();

        if self.args.json {
            serde_json::to_writer_pretty(&mut *writer, &entries)
                .map_err(|e| anyhow::anyhow!("Failed to serialize checks: {}", e))?;
            writeln!(writer)?;
            return Ok(());
        }

        for entry in &entries {
            match &entry.requires {
                Some(cap) => writeln!(
                    writer,
                    "{:<15} {} (when {} is loaded)",
                    entry.kind.to_string(),
                    entry.id,
                    cap
                )?,
                None => writeln!(writer, "{:<15} {}", entry.kind.to_string(), entry.id)?,
            }
        }
        Ok(())
    }
}

impl Command for ListCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)?;
        Ok(CommandResult::success())
    }
}
