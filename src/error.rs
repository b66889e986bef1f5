//! Error types for zcompat operations.
//!
//! This module defines [`CompatError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Failed compatibility checks are never errors; they become report messages
//! - Use `CompatError` for failures to obtain the environment or load config
//! - Use `anyhow::Error` (via `CompatError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for zcompat operations.
#[derive(Debug, Error)]
pub enum CompatError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The PHP binary could not be started.
    #[error("Failed to run '{binary}': {message}")]
    ProbeFailed { binary: String, message: String },

    /// The PHP probe ran but its output was unusable.
    #[error("Unexpected probe output: {message}")]
    ProbeOutput { message: String },

    /// An environment snapshot file could not be parsed.
    #[error("Failed to parse snapshot at {path}: {message}")]
    SnapshotParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for zcompat operations.
pub type Result<T> = std::result::Result<T, CompatError>;
