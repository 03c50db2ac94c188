//! Smooth-scroll configuration.

use serde::{Deserialize, Serialize};

/// Smooth-scroll engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Seconds the smoothed position takes to catch up with the target
    /// (valid range: 0.0-10.0, 0 disables smoothing).
    pub smooth: f64,
    /// Total scrollable content height in pixels.
    pub content_height: f64,
    /// Pixels scrolled per mouse wheel line.
    pub line_height: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth: 2.0,
            content_height: 4000.0,
            line_height: 120.0,
        }
    }
}
