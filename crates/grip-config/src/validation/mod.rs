//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod style;


use crate::schema::GripConfig;
use grip_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GripConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    style::validate_style(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
