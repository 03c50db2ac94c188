//! Generated texture settings.

use serde::{Deserialize, Serialize};

/// Sizes and colors for the procedurally generated textures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TexturesConfig {
    /// Side length of the radial gradient disc in pixels (valid range: 1-4096).
    pub gradient_size: u32,
    /// Fraction of the radius that stays fully opaque (valid range: 0.0-1.0).
    pub gradient_inner_stop: f32,
    /// Solid fill color as hex string.
    pub solid_color: String,
    /// Solid fill width in pixels (valid range: 1-4096).
    pub solid_width: u32,
    /// Solid fill height in pixels (valid range: 1-4096).
    pub solid_height: u32,
}

impl Default for TexturesConfig {
    fn default() -> Self {
        Self {
            gradient_size: 256,
            gradient_inner_stop: 0.9,
            solid_color: "#ff0000".into(),
            solid_width: 64,
            solid_height: 64,
        }
    }
}
