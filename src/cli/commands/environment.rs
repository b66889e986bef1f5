//! Resolving where a command reads the environment from.

use std::path::Path;

use crate::cli::args::EnvironmentArgs;
use crate::config::CompatConfig;
use crate::environment::{EnvironmentSnapshot, PhpProbe};
use crate::error::Result;

/// PHP binary used when neither flags nor config name one.
pub const DEFAULT_PHP_BINARY: &str = "php";

/// Build the probe described by flags and config. Flags win.
///
/// A relative ini path from config is taken relative to the project root.
pub fn build_probe(args: &EnvironmentArgs, config: &CompatConfig, project_root: &Path) -> PhpProbe {
    let binary = args
        .php
        .clone()
        .or_else(|| config.php.binary.clone())
        .unwrap_or_else(|| DEFAULT_PHP_BINARY.to_string());

    let ini = args.ini.clone().or_else(|| {
        config.php.ini.as_ref().map(|ini| {
            if ini.is_absolute() {
                ini.clone()
            } else {
                project_root.join(ini)
            }
        })
    });

    PhpProbe::new(binary)
        .with_ini_file(ini)
        .with_secure_transport(args.https.then_some(true))
}

/// Load the environment from a snapshot file or a live PHP probe.
pub fn load_environment(
    args: &EnvironmentArgs,
    config: &CompatConfig,
    project_root: &Path,
) -> Result<EnvironmentSnapshot> {
    if let Some(path) = &args.snapshot {
        tracing::debug!("Reading environment snapshot {}", path.display());
        let mut snapshot = EnvironmentSnapshot::load(path)?;
        if args.https {
            snapshot.secure_transport = true;
        }
        return Ok(snapshot);
    }

    build_probe(args, config, project_root).run()
}
