//! Plain-value runtime environment.
//!
//! An `EnvironmentSnapshot` is what the PHP probe produces, and what tests
//! and `--snapshot` files provide instead of a live runtime.

use crate::environment::{Capability, RuntimeInspector};
use crate::error::{CompatError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// A captured set of runtime configuration values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSnapshot {
    /// Runtime version string.
    pub version: String,

    /// Ini directives that are set, by name.
    pub ini: BTreeMap<String, String>,

    /// Extensions that are available.
    pub capabilities: BTreeSet<Capability>,

    /// Whether the request arrived over a secure transport.
    pub secure_transport: bool,

    /// Drivers available to PDO.
    pub pdo_drivers: Vec<String>,
}

impl EnvironmentSnapshot {
    /// Create an empty snapshot for the given runtime version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    /// Set an ini directive.
    pub fn with_ini(mut self, key: &str, value: &str) -> Self {
        self.ini.insert(key.to_string(), value.to_string());
        self
    }

    /// Remove an ini directive.
    pub fn without_ini(mut self, key: &str) -> Self {
        self.ini.remove(key);
        self
    }

    /// Mark a capability as available.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Mark a capability as missing.
    pub fn without_capability(mut self, capability: Capability) -> Self {
        self.capabilities.remove(&capability);
        self
    }

    /// Mark every known capability as available.
    pub fn with_all_capabilities(mut self) -> Self {
        self.capabilities.extend(Capability::ALL);
        self
    }

    /// Add a PDO driver.
    pub fn with_pdo_driver(mut self, driver: &str) -> Self {
        self.pdo_drivers.push(driver.to_string());
        self
    }

    /// Set whether the request used a secure transport.
    pub fn with_secure_transport(mut self, secure: bool) -> Self {
        self.secure_transport = secure;
        self
    }

    /// Load a snapshot from a JSON or YAML file.
    ///
    /// Files ending in `.json` are read as JSON; anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| CompatError::SnapshotParseError {
            path: path.to_path_buf(),
            message,
        })
    }
}

impl RuntimeInspector for EnvironmentSnapshot {
    fn runtime_version(&self) -> &str {
        &self.version
    }

    fn ini(&self, key: &str) -> Option<&str> {
        self.ini.get(key).map(String::as_str)
    }

    fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    fn is_secure_transport(&self) -> bool {
        self.secure_transport
    }

    fn pdo_drivers(&self) -> &[String] {
        &self.pdo_drivers
    }
}
