//! Defaults applied to every render request.

use grip_common::RenderMode;
use serde::{Deserialize, Serialize};

/// Render defaults. Command-line flags override these per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub mode: RenderMode,
    pub use_quotes: bool,
    pub escape_whitespace: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            mode: RenderMode::Long,
            use_quotes: true,
            escape_whitespace: true,
        }
    }
}
