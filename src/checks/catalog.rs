//! The fixed check lists.
//!
//! Order matters: report messages appear in the order checks are declared
//! here.

use super::rule::{Reminder, Rule};
use super::thresholds::{
    MIN_MAX_FILE_UPLOADS, MIN_MEMORY_LIMIT, MIN_POST_MAX_SIZE, MIN_RUNTIME_VERSION,
    MIN_UPLOAD_MAX_FILESIZE, PDO_DRIVER, PREFERRED_TIMEZONE,
};
use super::CheckDef;
use crate::environment::Capability;

/// Hard checks. Any failure is a must-fix item.
pub static REQUIREMENTS: &[CheckDef] = &[
    CheckDef::new(
        "runtime_version",
        Rule::MinVersion {
            minimum: MIN_RUNTIME_VERSION,
        },
    ),
    CheckDef::new(
        "date.timezone",
        Rule::IniSet {
            directive: "date.timezone",
        },
    ),
    CheckDef::new(
        "memory_limit",
        Rule::MinSize {
            directive: "memory_limit",
            minimum: MIN_MEMORY_LIMIT,
        },
    ),
    CheckDef::new(
        "post_max_size",
        Rule::MinSize {
            directive: "post_max_size",
            minimum: MIN_POST_MAX_SIZE,
        },
    ),
    CheckDef::new(
        "upload_max_filesize",
        Rule::MinSize {
            directive: "upload_max_filesize",
            minimum: MIN_UPLOAD_MAX_FILESIZE,
        },
    ),
    CheckDef::new(
        "file_uploads",
        Rule::IniEnabled {
            directive: "file_uploads",
        },
    ),
    CheckDef::new(
        "max_file_uploads",
        Rule::MinInt {
            directive: "max_file_uploads",
            minimum: MIN_MAX_FILE_UPLOADS,
        },
    ),
    CheckDef::new("ext.bz2", Rule::Capability(Capability::Bzip2)),
    CheckDef::new("ext.curl", Rule::Capability(Capability::Curl)),
    CheckDef::new("ext.fileinfo", Rule::Capability(Capability::Fileinfo)),
    CheckDef::new("ext.gd", Rule::Capability(Capability::Gd)),
    CheckDef::new("ext.intl", Rule::Capability(Capability::Intl)),
    CheckDef::new("ext.mbstring", Rule::Capability(Capability::Mbstring)),
    CheckDef::new("ext.exif", Rule::Capability(Capability::Exif)),
    CheckDef::new("ext.mysqli", Rule::Capability(Capability::Mysqli)),
    CheckDef::new("ext.openssl", Rule::Capability(Capability::Openssl)),
    CheckDef::new("ext.pdo", Rule::Capability(Capability::Pdo)),
    CheckDef::new("ext.pdo_mysql", Rule::PdoDriver(PDO_DRIVER)).when(Capability::Pdo),
];

/// Soft checks. The first three are reminders and always show.
pub static RECOMMENDATIONS: &[CheckDef] = &[
    CheckDef::new(
        "default_charset",
        Rule::Reminder(Reminder::DefaultCharset),
    ),
    CheckDef::new(
        "database_connectivity",
        Rule::Reminder(Reminder::DatabaseConnectivity),
    ),
    CheckDef::new("server_modules", Rule::Reminder(Reminder::ServerModules)),
    CheckDef::new("secure_transport", Rule::SecureTransport),
    CheckDef::new(
        "preferred_timezone",
        Rule::IniEquals {
            directive: "date.timezone",
            expected: PREFERRED_TIMEZONE,
            label: "Timezone",
        },
    ),
];
