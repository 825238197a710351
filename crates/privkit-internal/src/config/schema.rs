use std::collections::BTreeMap;
use std::fmt;

use privkit_core::error::{PrivkitError, Result};
use serde::{Deserialize, Serialize, Serializer};

/// Supported config document version.
pub const CONFIG_VERSION: u32 = 1;

pub const INTERNAL_API_KEY: &str = "secret-key-12345";
pub const INTERNAL_DB_HOST: &str = "internal.database.local";

const REDACTED: &str = "[REDACTED]";

/// On-disk config document. Every field except `version` is optional and
/// falls back to the built-in internal values.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InternalConfigFile {
    pub version: u32,

    #[serde(default = "default_api_key")]
    pub api_key: String,

    #[serde(default = "default_db_host")]
    pub db_host: String,

    #[serde(default)]
    pub flags: FeatureFlags,
}

impl InternalConfigFile {
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(PrivkitError::UnsupportedVersion(self.version));
        }
        if self.api_key.trim().is_empty() {
            return Err(PrivkitError::BadConfig("api_key must not be blank".into()));
        }
        if self.db_host.trim().is_empty() {
            return Err(PrivkitError::BadConfig("db_host must not be blank".into()));
        }
        if self.db_host.chars().any(char::is_whitespace) {
            return Err(PrivkitError::BadConfig(format!(
                "db_host must not contain whitespace: {:?}",
                self.db_host
            )));
        }
        Ok(())
    }

    pub fn into_snapshot(self) -> ConfigSnapshot {
        ConfigSnapshot {
            api_key: self.api_key,
            db_host: self.db_host,
            flags: self.flags,
        }
    }
}

fn default_api_key() -> String {
    INTERNAL_API_KEY.into()
}
fn default_db_host() -> String {
    INTERNAL_DB_HOST.into()
}
fn default_true() -> bool {
    true
}

/// Internal feature toggles. All of them default to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub enable_debug_mode: bool,

    #[serde(default = "default_true")]
    pub internal_monitoring: bool,

    #[serde(default = "default_true")]
    pub admin_panel_access: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_debug_mode: true,
            internal_monitoring: true,
            admin_panel_access: true,
        }
    }
}

impl FeatureFlags {
    pub const NAMES: [&'static str; 3] =
        ["enable_debug_mode", "internal_monitoring", "admin_panel_access"];

    /// Look a flag up by its config name.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.iter().find(|(n, _)| *n == name).map(|(_, on)| on)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        Self::NAMES.into_iter().zip([
            self.enable_debug_mode,
            self.internal_monitoring,
            self.admin_panel_access,
        ])
    }

    /// Name -> value view, one entry per flag.
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.iter().map(|(n, on)| (n.to_string(), on)).collect()
    }

    pub fn enabled_count(&self) -> usize {
        self.iter().filter(|(_, on)| *on).count()
    }
}

/// Immutable internal configuration.
///
/// Built once (from the built-in values or a config document) and only read
/// afterwards. The API key is redacted from `Debug` and serialized output; use
/// [`ConfigSnapshot::api_key`] to read it.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSnapshot {
    #[serde(serialize_with = "serialize_redacted")]
    api_key: String,
    db_host: String,
    flags: FeatureFlags,
}

impl ConfigSnapshot {
    /// Snapshot made of the built-in internal values.
    pub fn builtin() -> Self {
        Self {
            api_key: default_api_key(),
            db_host: default_db_host(),
            flags: FeatureFlags::default(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn db_host(&self) -> &str {
        &self.db_host
    }

    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for ConfigSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigSnapshot")
            .field("api_key", &REDACTED)
            .field("db_host", &self.db_host)
            .field("flags", &self.flags)
            .finish()
    }
}

fn serialize_redacted<S: Serializer>(_: &str, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(REDACTED)
}
