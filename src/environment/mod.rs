//! Runtime environment inspection.
//!
//! Checks never query the runtime directly. They read from a
//! [`RuntimeInspector`], which is either a [`PhpProbe`] result taken from a
//! real PHP binary or an [`EnvironmentSnapshot`] loaded from a file or built
//! in tests.
//!
//! # Modules
//!
//! - [`capability`] - Named runtime extensions and how to detect them
//! - [`php`] - Probe that asks a PHP binary for its configuration
//! - [`snapshot`] - Plain-value environment, serializable for reuse

pub mod capability;
pub mod php;
pub mod snapshot;

pub use capability::{Capability, ProbeSymbol};
pub use php::PhpProbe;
pub use snapshot::EnvironmentSnapshot;

/// Read-only view of a runtime's configuration.
pub trait RuntimeInspector {
    /// The runtime version string, e.g. `8.2.7`. Empty when unknown.
    fn runtime_version(&self) -> &str;

    /// Current value of an ini directive, or `None` when it is not set.
    fn ini(&self, key: &str) -> Option<&str>;

    /// Whether the given extension is available.
    fn has_capability(&self, capability: Capability) -> bool;

    /// Whether the current request arrived over a secure transport.
    fn is_secure_transport(&self) -> bool;

    /// Drivers available to the PDO data-access layer.
    fn pdo_drivers(&self) -> &[String];
}

/// Interpret an ini boolean the way PHP does (`1`, `on`, `yes`, `true`).
pub fn ini_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "on" | "yes" | "true"
        ),
        None => false,
    }
}

/// Interpret an ini integer, treating anything unparsable as `0`.
pub fn ini_int(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}
