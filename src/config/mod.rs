//! Configuration loading for zcompat.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use zcompat::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".zcompat");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "php:\n  binary: php8.2\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.php.binary, Some("php8.2".to_string()));
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.zcompat/config.yml`)
//! 2. Local overrides (`.zcompat/config.local.yml`)
//!
//! `--config FILE` replaces both. Command-line flags override any file.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, CONFIG_DIR};
pub use schema::{CompatConfig, PhpConfig, ReportConfig};
