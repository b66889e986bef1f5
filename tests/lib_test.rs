//! Library integration tests.

use zcompat::checker::CompatibilityChecker;
use zcompat::checks::thresholds::PREFERRED_TIMEZONE;
use zcompat::environment::{Capability, EnvironmentSnapshot};
use zcompat::size::parse_size;
use zcompat::CompatError;

fn satisfied() -> EnvironmentSnapshot {
    EnvironmentSnapshot::new("7.4.33")
        .with_ini("date.timezone", "Europe/Paris")
        .with_ini("memory_limit", "128M")
        .with_ini("post_max_size", "100M")
        .with_ini("upload_max_filesize", "64M")
        .with_ini("file_uploads", "On")
        .with_ini("max_file_uploads", "10")
        .with_all_capabilities()
        .with_pdo_driver("mysql")
}

#[test]
fn error_types_are_public() {
    let err = CompatError::ProbeOutput {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> zcompat::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn size_examples() {
    assert_eq!(parse_size("128M"), 134_217_728);
    assert_eq!(parse_size("64M"), 67_108_864);
    assert_eq!(parse_size("512"), 512);
    assert_eq!(parse_size("1.5G"), 1_610_612_736);
}

#[test]
fn outdated_runtime_scenario() {
    let env = EnvironmentSnapshot {
        version: "5.3.0".into(),
        ..satisfied()
    }
    .without_ini("date.timezone")
    .with_ini("memory_limit", "64M");

    let requirements = CompatibilityChecker::new(&env).requirements();
    assert_eq!(requirements.len(), 3);
    assert!(requirements[0].contains("PHP version"));
    assert!(requirements[1].contains("php.ini:date.timezone"));
    assert!(requirements[2].contains("php.ini:memory_limit"));
}

#[test]
fn satisfied_scenario_has_no_requirements() {
    let env = satisfied();
    assert!(CompatibilityChecker::new(&env).requirements().is_empty());
}

#[test]
fn secure_preferred_scenario_keeps_reminders() {
    let env = satisfied()
        .with_ini("date.timezone", PREFERRED_TIMEZONE)
        .with_secure_transport(true);
    let recommendations = CompatibilityChecker::new(&env).recommendations();

    assert_eq!(recommendations.len(), 3);
    assert!(recommendations[0].contains("Default charset"));
    assert!(recommendations[1].contains("MySQL"));
    assert!(recommendations[2].contains("Apache modules"));
}

#[test]
fn repeated_runs_are_identical() {
    let env = satisfied().without_capability(Capability::Intl);
    let checker = CompatibilityChecker::new(&env);
    assert_eq!(checker.requirements(), checker.requirements());
    assert_eq!(checker.recommendations(), checker.recommendations());
}
