//! Internal config: built-in snapshot plus a strict YAML loader.

pub mod schema;

use std::fs;
use std::path::Path;

use privkit_core::error::{PrivkitError, Result};

pub use schema::{ConfigSnapshot, FeatureFlags, InternalConfigFile, CONFIG_VERSION};

/// The built-in internal configuration. Every call yields an equal value.
pub fn get_internal_config() -> ConfigSnapshot {
    ConfigSnapshot::builtin()
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ConfigSnapshot> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        PrivkitError::Internal(format!("read config failed ({}): {e}", path.display()))
    })?;
    let cfg = load_from_str(&s)?;
    tracing::info!(path = %path.display(), db_host = %cfg.db_host(), "internal config loaded");
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<ConfigSnapshot> {
    let file: InternalConfigFile = serde_yaml::from_str(s)
        .map_err(|e| PrivkitError::BadConfig(format!("invalid yaml: {e}")))?;
    file.validate()?;
    Ok(file.into_snapshot())
}
