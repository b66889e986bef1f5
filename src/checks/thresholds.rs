//! Fixed minimums the environment is measured against.

/// Oldest runtime version that is supported.
pub const MIN_RUNTIME_VERSION: &str = "5.5.0";

/// Minimum `memory_limit`.
pub const MIN_MEMORY_LIMIT: &str = "128M";

/// Minimum `post_max_size`.
pub const MIN_POST_MAX_SIZE: &str = "64M";

/// Minimum `upload_max_filesize`.
pub const MIN_UPLOAD_MAX_FILESIZE: &str = "64M";

/// Minimum `max_file_uploads`.
pub const MIN_MAX_FILE_UPLOADS: i64 = 10;

/// Timezone deployments are expected to run in.
pub const PREFERRED_TIMEZONE: &str = "America/Montreal";

/// PDO driver the application talks to.
pub const PDO_DRIVER: &str = "mysql";

/// Web server modules the operator has to confirm by hand.
pub const SERVER_MODULES: &[&str] = &[
    "auth_basic",
    "deflate",
    "env",
    "expires",
    "filter",
    "headers",
    "mime",
    "rewrite",
    "setenvif",
    "ssl",
];
