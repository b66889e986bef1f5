//! Runtime capabilities the report requires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the probe script detects a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSymbol {
    /// `function_exists(name)`
    Function(&'static str),
    /// `class_exists(name)`
    Class(&'static str),
    /// `extension_loaded(name)`
    Extension(&'static str),
}

/// A named runtime extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Bzip2,
    Curl,
    Fileinfo,
    Gd,
    Intl,
    Mbstring,
    Exif,
    Mysqli,
    Openssl,
    Pdo,
}

impl Capability {
    /// All capabilities, in the order they are checked.
    pub const ALL: [Capability; 10] = [
        Capability::Bzip2,
        Capability::Curl,
        Capability::Fileinfo,
        Capability::Gd,
        Capability::Intl,
        Capability::Mbstring,
        Capability::Exif,
        Capability::Mysqli,
        Capability::Openssl,
        Capability::Pdo,
    ];

    /// Extension name as shown to the operator.
    pub fn extension_name(self) -> &'static str {
        match self {
            Capability::Bzip2 => "bz2",
            Capability::Curl => "curl",
            Capability::Fileinfo => "fileinfo",
            Capability::Gd => "gd",
            Capability::Intl => "intl",
            Capability::Mbstring => "mbstring",
            Capability::Exif => "exif",
            Capability::Mysqli => "mysqli",
            Capability::Openssl => "openssl",
            Capability::Pdo => "pdo",
        }
    }

    /// The symbol whose presence proves the extension is usable.
    pub fn probe_symbol(self) -> ProbeSymbol {
        match self {
            Capability::Bzip2 => ProbeSymbol::Function("bzopen"),
            Capability::Curl => ProbeSymbol::Function("curl_init"),
            Capability::Fileinfo => ProbeSymbol::Function("finfo_open"),
            Capability::Gd => ProbeSymbol::Function("imagecreatefrompng"),
            Capability::Intl => ProbeSymbol::Class("Locale"),
            Capability::Mbstring => ProbeSymbol::Function("mb_strlen"),
            Capability::Exif => ProbeSymbol::Function("exif_imagetype"),
            Capability::Mysqli => ProbeSymbol::Function("mysqli_connect"),
            Capability::Openssl => ProbeSymbol::Function("openssl_encrypt"),
            Capability::Pdo => ProbeSymbol::Extension("pdo"),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension_name())
    }
}
