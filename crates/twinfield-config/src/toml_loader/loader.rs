//! Reading the config file, and seeding it on first use.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::info;
use twinfield_common::ConfigError;

use super::template::default_config_toml;
use crate::schema::TwinfieldConfig;

/// Parse a TOML config file.
///
/// Missing fields take their serde defaults. Values are not validated here:
/// the environment overlay may still replace them, so `load_config` and
/// `load_config_from` validate once the overlay is applied.
pub fn load_from_path(path: &Path) -> Result<TwinfieldConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TwinfieldConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `twinfield/config.toml` under the platform config directory,
/// seeding it with the commented template when it does not exist yet.
pub fn load_default() -> Result<TwinfieldConfig, ConfigError> {
    let path = default_config_path()?;
    if create_default_config(&path)? {
        return Ok(TwinfieldConfig::default());
    }
    load_from_path(&path)
}

/// `<config dir>/twinfield/config.toml`, e.g. `~/.config/twinfield/config.toml`
/// on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("twinfield").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented template to `path` unless a file is already there.
///
/// Returns whether the template was written. An existing file is never
/// touched, so credentials a user has filled in cannot be clobbered.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!("no config found, wrote template to {}", path.display());
    Ok(true)
}
