//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`zcompat report`, `zcompat list`)
//! - Shared config loading
//! - Consistent global flag handling

pub mod dispatcher;
pub mod environment;
pub mod list;
pub mod report;
pub mod snapshot;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
