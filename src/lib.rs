//! zcompat - PHP environment compatibility reporter.
//!
//! zcompat inspects a PHP runtime's configuration (version, resource limits,
//! loaded extensions) and reports hard requirements that are not met and
//! recommendations worth reviewing, as an HTML page, JSON, or terminal text.
//!
//! # Modules
//!
//! - [`checker`] - Runs the check lists against an environment
//! - [`checks`] - Declared checks, their predicates and thresholds
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`environment`] - Runtime inspection (PHP probe and snapshots)
//! - [`error`] - Error types and result aliases
//! - [`report`] - Reports and their renderings
//! - [`size`] - Size string parsing for ini values
//! - [`ui`] - Status output
//! - [`version`] - Runtime version comparison
//!
//! # Example
//!
//! ```
//! use zcompat::checker::CompatibilityChecker;
//! use zcompat::environment::EnvironmentSnapshot;
//!
//! let env = EnvironmentSnapshot::new("5.4.0").with_ini("memory_limit", "64M");
//! let requirements = CompatibilityChecker::new(&env).requirements();
//! assert!(requirements[0].starts_with("PHP version"));
//! ```

pub mod checker;
pub mod checks;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod report;
pub mod size;
pub mod ui;
pub mod version;

pub use error::{CompatError, Result};
