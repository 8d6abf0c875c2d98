//! Reads config from an explicit path or the platform default.

use crate::schema::GripConfig;
use crate::validation;
use grip_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. A config that fails validation
/// is logged and returned as parsed; [`crate::load_config`] is the strict
/// entry point.
pub fn load_from_path(path: &Path) -> Result<GripConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config: GripConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// On Linux: `~/.config/grip-render/config.toml`
/// On macOS: `~/Library/Application Support/grip-render/config.toml`
///
/// A missing file is created from the commented template and defaults are
/// returned.
pub fn load_default() -> Result<GripConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(GripConfig::default())
        }
        Err(e) => Err(e),
    }
}
