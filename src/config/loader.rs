//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files in the
//! correct priority order.

use crate::config::schema::CompatConfig;
use crate::error::{CompatError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".zcompat";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.zcompat/config.yml`)
/// 2. Local overrides (`.zcompat/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .zcompat/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .zcompat/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CompatConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CompatError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CompatError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty file is a valid, empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CompatConfig> {
    if content.trim().is_empty() {
        return Ok(CompatConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| CompatError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file. Otherwise the
/// project config and local overrides are layered; with neither present the
/// default config is returned.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<CompatConfig> {
    if let Some(override_path) = config_override {
        tracing::debug!("Loading config from {}", override_path.display());
        return load_config_file(override_path);
    }

    let paths = ConfigPaths::discover(project_root);
    let mut config = CompatConfig::default();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        config = config.overlay(load_config_file(path)?);
    }
    Ok(config)
}
