//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod render;
mod style;
mod system;

pub use render::*;
pub use style::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GripConfig {
    pub render: RenderSettings,
    pub style: StyleSettings,
    pub logging: LoggingConfig,
}
