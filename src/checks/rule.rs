//! Check predicates and the messages they produce when they fail.
//!
//! Messages carry `<strong>` emphasis around names and values. Renderers
//! either pass it through (HTML) or translate it (terminal).

use crate::environment::{ini_flag, ini_int, Capability, RuntimeInspector};
use crate::size::parse_size;
use crate::version::version_at_least;

use super::thresholds::SERVER_MODULES;

/// Items the operator has to verify by hand. They always fail so that the
/// reminder is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reminder {
    /// Show the configured default charset.
    DefaultCharset,
    /// Database connectivity is never tested automatically.
    DatabaseConnectivity,
    /// Web server modules cannot be seen from the runtime.
    ServerModules,
}

/// What a check tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Runtime version is at least `minimum`.
    MinVersion { minimum: &'static str },

    /// Ini directive has a non-empty value.
    IniSet { directive: &'static str },

    /// Ini directive equals `expected` exactly.
    IniEquals {
        directive: &'static str,
        expected: &'static str,
        label: &'static str,
    },

    /// Ini size directive is at least `minimum`, compared in bytes.
    MinSize {
        directive: &'static str,
        minimum: &'static str,
    },

    /// Ini boolean directive is on.
    IniEnabled { directive: &'static str },

    /// Ini integer directive is at least `minimum`.
    MinInt {
        directive: &'static str,
        minimum: i64,
    },

    /// Extension is available.
    Capability(Capability),

    /// PDO lists the given driver.
    PdoDriver(&'static str),

    /// Request arrived over a secure transport.
    SecureTransport,

    /// Always fails.
    Reminder(Reminder),
}

impl Rule {
    /// Evaluate the predicate.
    pub fn passes(&self, env: &dyn RuntimeInspector) -> bool {
        match *self {
            Rule::MinVersion { minimum } => version_at_least(env.runtime_version(), minimum),
            Rule::IniSet { directive } => env.ini(directive).is_some_and(|v| !v.is_empty()),
            Rule::IniEquals {
                directive,
                expected,
                ..
            } => env.ini(directive) == Some(expected),
            Rule::MinSize { directive, minimum } => {
                parse_size(env.ini(directive).unwrap_or("")) >= parse_size(minimum)
            }
            Rule::IniEnabled { directive } => ini_flag(env.ini(directive)),
            Rule::MinInt { directive, minimum } => ini_int(env.ini(directive)) >= minimum,
            Rule::Capability(capability) => env.has_capability(capability),
            Rule::PdoDriver(driver) => env.pdo_drivers().iter().any(|d| d == driver),
            Rule::SecureTransport => env.is_secure_transport(),
            Rule::Reminder(_) => false,
        }
    }

    /// The message shown when the predicate fails.
    pub fn message(&self, env: &dyn RuntimeInspector) -> String {
        match *self {
            Rule::MinVersion { minimum } => format!(
                "PHP version must be >= <strong>{}</strong>, currently is <strong>{}</strong>",
                minimum,
                display_value(Some(env.runtime_version()))
            ),
            Rule::IniSet { directive } => {
                format!("<strong>php.ini:{}</strong> must be set ", directive)
            }
            Rule::IniEquals {
                expected, label, ..
            } => format!("{} should be set to <strong>{}</strong>", label, expected),
            Rule::MinSize { directive, minimum } => {
                minimum_message(directive, minimum, env.ini(directive))
            }
            Rule::IniEnabled { directive } => {
                format!("<strong>php.ini:{}</strong> must be enabled", directive)
            }
            Rule::MinInt { directive, minimum } => {
                minimum_message(directive, &minimum.to_string(), env.ini(directive))
            }
            Rule::Capability(capability) => {
                format!("Extension <strong>{}</strong> must be installed", capability)
            }
            Rule::PdoDriver(driver) => {
                format!("Extension <strong>pdo_{}</strong> must be installed", driver)
            }
            Rule::SecureTransport => "If necessary, verify that there is an SSL certificate, \
                (running this test under https will hide this recommendation)"
                .to_string(),
            Rule::Reminder(reminder) => reminder_message(reminder, env),
        }
    }
}

fn minimum_message(directive: &str, minimum: &str, current: Option<&str>) -> String {
    format!(
        "<strong>php.ini:{}</strong> must be >= <strong>{}</strong>, currently is <strong>{}</strong>",
        directive,
        minimum,
        display_value(current)
    )
}

fn reminder_message(reminder: Reminder, env: &dyn RuntimeInspector) -> String {
    match reminder {
        Reminder::DefaultCharset => format!(
            "Default charset is <strong>{}</strong>, change if needed",
            display_value(env.ini("default_charset"))
        ),
        Reminder::DatabaseConnectivity => "Verify that you can connect to MySQL".to_string(),
        Reminder::ServerModules => {
            let modules = SERVER_MODULES
                .iter()
                .map(|m| format!("<strong>{}</strong>", m))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Verify that required Apache modules are activated: ({})",
                modules
            )
        }
    }
}

fn display_value(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "not set",
    }
}
