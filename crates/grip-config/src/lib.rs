//! grip-render configuration.
//!
//! TOML-based configuration for render defaults, style limits and logging.
//! All sections use serde defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use grip_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GripConfig, CONFIG_SCHEMA_VERSION};

use grip_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created if it does not exist yet. The loaded config
/// must pass validation.
pub fn load_config(path: Option<&Path>) -> Result<GripConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GripConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = GripConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"render\""));
        assert!(json.contains("\"style\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = GripConfig::default();
        let json = config_to_json(&config);
        let parsed: GripConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.style.max_declaration_length, 4096);
        assert!(parsed.render.use_quotes);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[style]\nmax_declaration_length = 100000\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\nmode = \"short\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.render.mode, grip_common::RenderMode::Short);
    }
}
