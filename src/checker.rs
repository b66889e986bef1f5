//! The compatibility checker.
//!
//! `CompatibilityChecker` runs the fixed check lists against a
//! [`RuntimeInspector`]. Nothing is cached: every call re-reads the
//! environment and builds fresh message lists.

use crate::checks::{self, RECOMMENDATIONS, REQUIREMENTS};
use crate::environment::RuntimeInspector;
use crate::report::Report;

/// Evaluates requirements and recommendations for one environment.
pub struct CompatibilityChecker<'a> {
    env: &'a dyn RuntimeInspector,
}

impl<'a> CompatibilityChecker<'a> {
    /// Create a checker reading from `env`.
    pub fn new(env: &'a dyn RuntimeInspector) -> Self {
        Self { env }
    }

    /// Messages of every failed hard check, in declaration order.
    pub fn requirements(&self) -> Vec<String> {
        let messages = checks::failed_messages(REQUIREMENTS, self.env);
        tracing::debug!("{} requirement(s) not met", messages.len());
        messages
    }

    /// Messages of every failed soft check, in declaration order.
    pub fn recommendations(&self) -> Vec<String> {
        let messages = checks::failed_messages(RECOMMENDATIONS, self.env);
        tracing::debug!("{} recommendation(s)", messages.len());
        messages
    }

    /// Build a report with both lists.
    pub fn report(&self, title: &str) -> Report {
        Report::new(title, self.requirements(), self.recommendations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::thresholds::PREFERRED_TIMEZONE;
    use crate::environment::{Capability, EnvironmentSnapshot};

    /// An environment that satisfies every hard check.
    fn healthy() -> EnvironmentSnapshot {
        EnvironmentSnapshot::new("8.2.7")
            .with_ini("date.timezone", "UTC")
            .with_ini("memory_limit", "256M")
            .with_ini("post_max_size", "64M")
            .with_ini("upload_max_filesize", "128M")
            .with_ini("file_uploads", "1")
            .with_ini("max_file_uploads", "20")
            .with_ini("default_charset", "UTF-8")
            .with_all_capabilities()
            .with_pdo_driver("mysql")
    }

    #[test]
    fn healthy_environment_has_no_requirements() {
        let env = healthy();
        assert!(CompatibilityChecker::new(&env).requirements().is_empty());
    }

    #[test]
    fn version_timezone_and_memory_fail_in_order() {
        let env = healthy()
            .with_ini("memory_limit", "64M")
            .without_ini("date.timezone");
        let env = EnvironmentSnapshot {
            version: "5.4.0".to_string(),
            ..env
        };

        let requirements = CompatibilityChecker::new(&env).requirements();
        assert_eq!(requirements.len(), 3);
        assert!(requirements[0].starts_with("PHP version"));
        assert!(requirements[1].contains("date.timezone"));
        assert!(requirements[2].contains("memory_limit"));
        assert!(requirements[2].contains("<strong>64M</strong>"));
    }

    #[test]
    fn requirements_are_idempotent() {
        let env = healthy()
            .without_capability(Capability::Gd)
            .with_ini("max_file_uploads", "3");
        let checker = CompatibilityChecker::new(&env);
        assert_eq!(checker.requirements(), checker.requirements());
    }

    #[test]
    fn fixing_a_check_removes_only_its_message() {
        let broken = healthy()
            .with_ini("memory_limit", "64M")
            .without_capability(Capability::Curl)
            .without_capability(Capability::Exif);
        let before = CompatibilityChecker::new(&broken).requirements();
        assert_eq!(before.len(), 3);

        let fixed = broken.with_ini("memory_limit", "512M");
        let after = CompatibilityChecker::new(&fixed).requirements();

        let expected: Vec<String> = before
            .into_iter()
            .filter(|m| !m.contains("memory_limit"))
            .collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn pdo_driver_only_checked_when_pdo_loaded() {
        let env = EnvironmentSnapshot {
            pdo_drivers: Vec::new(),
            ..healthy().without_capability(Capability::Pdo)
        };
        let requirements = CompatibilityChecker::new(&env).requirements();
        assert_eq!(requirements.len(), 1);
        assert!(requirements[0].contains("<strong>pdo</strong>"));

        let env = env.with_capability(Capability::Pdo);
        let requirements = CompatibilityChecker::new(&env).requirements();
        assert_eq!(requirements.len(), 1);
        assert!(requirements[0].contains("pdo_mysql"));
    }

    #[test]
    fn empty_environment_fails_closed() {
        let env = EnvironmentSnapshot::default();
        let requirements = CompatibilityChecker::new(&env).requirements();
        // Every check except the PDO driver, which needs PDO first.
        assert_eq!(requirements.len(), REQUIREMENTS.len() - 1);
    }

    #[test]
    fn reminders_remain_when_secure_and_preferred_timezone() {
        let env = healthy()
            .with_ini("date.timezone", PREFERRED_TIMEZONE)
            .with_secure_transport(true);
        let recommendations = CompatibilityChecker::new(&env).recommendations();

        assert_eq!(recommendations.len(), 3);
        assert!(recommendations[0].starts_with("Default charset"));
        assert!(recommendations[1].contains("connect to MySQL"));
        assert!(recommendations[2].contains("Apache modules"));
    }

    #[test]
    fn insecure_transport_and_other_timezone_are_recommended() {
        let env = healthy();
        let recommendations = CompatibilityChecker::new(&env).recommendations();

        assert_eq!(recommendations.len(), 5);
        assert!(recommendations[3].contains("SSL certificate"));
        assert!(recommendations[4].contains(PREFERRED_TIMEZONE));
    }

    #[test]
    fn report_carries_both_lists() {
        let env = healthy().with_ini("file_uploads", "Off");
        let report = CompatibilityChecker::new(&env).report("Z Compatibility");

        assert_eq!(report.title, "Z Compatibility");
        assert_eq!(report.requirements.len(), 1);
        assert_eq!(report.recommendations.len(), 5);
    }
}
