//! Configuration schema.
//!
//! Only the environment being inspected and the report rendering are
//! configurable. Checks and thresholds are fixed.

use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompatConfig {
    /// Which PHP to inspect.
    pub php: PhpConfig,

    /// How to render the report.
    pub report: ReportConfig,
}

/// PHP runtime settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhpConfig {
    /// PHP binary name or path. Defaults to `php`.
    pub binary: Option<String>,

    /// php.ini to load instead of the binary's default.
    pub ini: Option<PathBuf>,
}

/// Report rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Output format. Defaults to HTML.
    pub format: Option<OutputFormat>,

    /// Report heading.
    pub title: Option<String>,

    /// File to write the report to instead of stdout.
    pub output: Option<PathBuf>,
}

impl CompatConfig {
    /// Layer `overlay` on top of `self`. Values set in `overlay` win.
    pub fn overlay(self, overlay: CompatConfig) -> CompatConfig {
        CompatConfig {
            php: PhpConfig {
                binary: overlay.php.binary.or(self.php.binary),
                ini: overlay.php.ini.or(self.php.ini),
            },
            report: ReportConfig {
                format: overlay.report.format.or(self.report.format),
                title: overlay.report.title.or(self.report.title),
                output: overlay.report.output.or(self.report.output),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config: CompatConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, CompatConfig::default());
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
php:
  binary: /usr/bin/php8.2
  ini: conf/php.ini
report:
  format: text
  title: Staging
  output: report.txt
"#;
        let config: CompatConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.php.binary.as_deref(), Some("/usr/bin/php8.2"));
        assert_eq!(config.php.ini, Some(PathBuf::from("conf/php.ini")));
        assert_eq!(config.report.format, Some(OutputFormat::Text));
        assert_eq!(config.report.title.as_deref(), Some("Staging"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<CompatConfig, _> = serde_yaml::from_str("thresholds:\n  memory: 1G\n");
        assert!(result.is_err());
    }

    #[test]
    fn overlay_prefers_set_values() {
        let base = CompatConfig {
            php: PhpConfig {
                binary: Some("php7".into()),
                ini: Some(PathBuf::from("base.ini")),
            },
            ..Default::default()
        };
        let overlay = CompatConfig {
            php: PhpConfig {
                binary: Some("php8".into()),
                ini: None,
            },
            ..Default::default()
        };

        let merged = base.overlay(overlay);
        assert_eq!(merged.php.binary.as_deref(), Some("php8"));
        assert_eq!(merged.php.ini, Some(PathBuf::from("base.ini")));
    }
}
