//! Probe that asks a PHP binary for its configuration.
//!
//! The probe runs `php -r <script>` once. The script prints a single JSON
//! object with the version, the ini directives the checks read, the
//! capabilities that are present and the PDO drivers. That object
//! deserializes straight into an [`EnvironmentSnapshot`].
//!
//! Secure transport is not something a CLI invocation of PHP can know, so it
//! comes from the CGI-style `HTTPS` variable or an explicit override.
//!
//! # Example
//!
//! ```no_run
//! use zcompat::environment::PhpProbe;
//!
//! let snapshot = PhpProbe::new("php").run().unwrap();
//! println!("PHP {}", snapshot.version);
//! ```

use crate::environment::{Capability, EnvironmentSnapshot, ProbeSymbol};
use crate::error::{CompatError, Result};
use std::path::PathBuf;
use std::process::Command;

/// Ini directives the checks read.
pub const INI_DIRECTIVES: &[&str] = &[
    "date.timezone",
    "memory_limit",
    "post_max_size",
    "upload_max_filesize",
    "file_uploads",
    "max_file_uploads",
    "default_charset",
];

/// Environment variable that signals a secure request, CGI style.
pub const SECURE_TRANSPORT_VAR: &str = "HTTPS";

/// Runs a PHP binary to capture its environment.
#[derive(Debug, Clone)]
pub struct PhpProbe {
    binary: String,
    ini_file: Option<PathBuf>,
    secure_transport: Option<bool>,
}

impl PhpProbe {
    /// Create a probe for the given PHP binary (name on PATH or full path).
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            ini_file: None,
            secure_transport: None,
        }
    }

    /// Use a specific php.ini instead of the binary's default.
    pub fn with_ini_file(mut self, ini_file: Option<PathBuf>) -> Self {
        self.ini_file = ini_file;
        self
    }

    /// Force the secure transport flag instead of reading `HTTPS`.
    pub fn with_secure_transport(mut self, secure: Option<bool>) -> Self {
        self.secure_transport = secure;
        self
    }

    /// The binary this probe runs.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Probe using the real process environment.
    pub fn run(&self) -> Result<EnvironmentSnapshot> {
        self.run_with_env(|key: &str| std::env::var(key))
    }

    /// Probe with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn run_with_env<F>(&self, env_fn: F) -> Result<EnvironmentSnapshot>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let mut cmd = Command::new(&self.binary);
        if let Some(ini) = &self.ini_file {
            cmd.arg("-c").arg(ini);
        }
        cmd.arg("-r").arg(probe_script());

        tracing::debug!("Probing PHP environment with {}", self.binary);

        let output = cmd.output().map_err(|e| CompatError::ProbeFailed {
            binary: self.binary.clone(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CompatError::ProbeOutput {
                message: format!(
                    "{} exited with {}: {}",
                    self.binary,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut snapshot = parse_probe_output(&stdout)?;
        snapshot.secure_transport = self
            .secure_transport
            .unwrap_or_else(|| secure_transport_from_env(&env_fn));

        tracing::debug!(
            "PHP {} reports {} capabilities",
            snapshot.version,
            snapshot.capabilities.len()
        );

        Ok(snapshot)
    }
}

/// Whether the environment marks the request as secure.
///
/// Any value other than empty or `"0"` counts, matching PHP's `empty()`.
pub fn secure_transport_from_env<F>(env_fn: &F) -> bool
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    env_fn(SECURE_TRANSPORT_VAR)
        .map(|value| !value.is_empty() && value != "0")
        .unwrap_or(false)
}

/// Parse the JSON printed by the probe script.
pub fn parse_probe_output(stdout: &str) -> Result<EnvironmentSnapshot> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(CompatError::ProbeOutput {
            message: "probe printed nothing".to_string(),
        });
    }

    serde_json::from_str(trimmed).map_err(|e| CompatError::ProbeOutput {
        message: e.to_string(),
    })
}

/// Build the PHP source passed to `php -r`.
pub fn probe_script() -> String {
    let directives = INI_DIRECTIVES
        .iter()
        .map(|d| format!("'{}'", d))
        .collect::<Vec<_>>()
        .join(",");

    let checks = Capability::ALL
        .iter()
        .map(|cap| {
            let test = match cap.probe_symbol() {
                ProbeSymbol::Function(name) => format!("function_exists('{}')", name),
                ProbeSymbol::Class(name) => format!("class_exists('{}')", name),
                ProbeSymbol::Extension(name) => format!("extension_loaded('{}')", name),
            };
            // Serde name of the variant, e.g. "bzip2".
            let key = serde_json::to_string(cap).unwrap_or_default();
            format!("if ({}) {{ $caps[] = {}; }}", test, key)
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "$ini = []; \
         foreach ([{directives}] as $k) {{ $v = ini_get($k); if ($v !== false) {{ $ini[$k] = (string) $v; }} }} \
         $caps = []; {checks} \
         $drivers = class_exists('PDO') ? PDO::getAvailableDrivers() : []; \
         echo json_encode(['version' => PHP_VERSION, 'ini' => (object) $ini, \
         'capabilities' => $caps, 'pdo_drivers' => $drivers]);"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::RuntimeInspector;

    fn no_env(_: &str) -> std::result::Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    #[test]
    fn script_reads_every_directive() {
        let script = probe_script();
        for directive in INI_DIRECTIVES {
            assert!(script.contains(directive), "missing {}", directive);
        }
    }

    #[test]
    fn script_tests_every_capability() {
        let script = probe_script();
        assert!(script.contains("function_exists('bzopen')"));
        assert!(script.contains("class_exists('Locale')"));
        assert!(script.contains("extension_loaded('pdo')"));
        assert!(script.contains("$caps[] = \"bzip2\";"));
    }

    #[test]
    fn parses_probe_json() {
        let env = parse_probe_output(
            r#"{"version":"8.2.7","ini":{"date.timezone":"UTC","file_uploads":"1"},"capabilities":["curl","gd"],"pdo_drivers":["mysql","sqlite"]}"#,
        )
        .unwrap();

        assert_eq!(env.runtime_version(), "8.2.7");
        assert_eq!(env.ini("date.timezone"), Some("UTC"));
        assert!(env.has_capability(Capability::Gd));
        assert_eq!(env.pdo_drivers().len(), 2);
    }

    #[test]
    fn empty_ini_object_is_accepted() {
        let env = parse_probe_output(r#"{"version":"8.0.0","ini":{}}"#).unwrap();
        assert!(env.ini.is_empty());
    }

    #[test]
    fn empty_output_is_an_error() {
        let err = parse_probe_output("  \n").unwrap_err();
        assert!(matches!(err, CompatError::ProbeOutput { .. }));
    }

    #[test]
    fn garbage_output_is_an_error() {
        let err = parse_probe_output("PHP Warning: something").unwrap_err();
        assert!(matches!(err, CompatError::ProbeOutput { .. }));
    }

    #[test]
    fn secure_transport_follows_https_var() {
        assert!(!secure_transport_from_env(&no_env));
        assert!(secure_transport_from_env(&|_: &str| Ok("on".to_string())));
        assert!(secure_transport_from_env(&|_: &str| Ok("off".to_string())));
        assert!(!secure_transport_from_env(&|_: &str| Ok(String::new())));
        assert!(!secure_transport_from_env(&|_: &str| Ok("0".to_string())));
    }

    #[test]
    fn missing_binary_is_probe_failed() {
        let probe = PhpProbe::new("this-php-does-not-exist-12345");
        let err = probe.run_with_env(no_env).unwrap_err();
        assert!(matches!(err, CompatError::ProbeFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn runs_fake_php_binary() {
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let fake = temp.path().join("php");
        std::fs::write(
            &fake,
            "#!/bin/sh\necho '{\"version\":\"8.3.1\",\"ini\":{\"memory_limit\":\"256M\"},\"capabilities\":[\"pdo\"]}'\n",
        )
        .unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let probe = PhpProbe::new(fake.to_string_lossy()).with_secure_transport(Some(true));
        let env = probe.run_with_env(no_env).unwrap();

        assert_eq!(env.version, "8.3.1");
        assert_eq!(env.ini("memory_limit"), Some("256M"));
        assert!(env.has_capability(Capability::Pdo));
        assert!(env.is_secure_transport());
    }

    #[cfg(unix)]
    #[test]
    fn failing_php_binary_is_probe_output_error() {
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let fake = temp.path().join("php");
        std::fs::write(&fake, "#!/bin/sh\necho 'Parse error' >&2\nexit 255\n").unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = PhpProbe::new(fake.to_string_lossy())
            .run_with_env(no_env)
            .unwrap_err();
        assert!(err.to_string().contains("Parse error"));
    }
}
