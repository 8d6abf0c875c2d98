//! Inline style sanitization limits.

use serde::{Deserialize, Serialize};

/// Style settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Longest user style text accepted, in bytes (valid range: 0-65536).
    /// Longer text is dropped whole.
    pub max_declaration_length: u32,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            max_declaration_length: 4096,
        }
    }
}
