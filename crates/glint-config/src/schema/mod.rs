//! Configuration schema types for glint.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bloom;
mod scroll;
mod system;
mod textures;
mod window;

pub use bloom::*;
pub use scroll::*;
pub use system::*;
pub use textures::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for glint.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GlintConfig {
    pub bloom: BloomConfig,
    pub textures: TexturesConfig,
    pub scroll: ScrollConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: GlintConfig = toml::from_str("").unwrap();
        assert_eq!(config.bloom.radius, 50);
        assert_eq!(config.textures.gradient_size, 256);
        assert_eq!(config.window.title, "glint");
    }

    #[test]
    fn full_toml() {
        let toml_str = r##"
[bloom]
radius = 32
threshold = 0.6

[textures]
solid_color = "#0000ff"

[scroll]
smooth = 1.0

[window]
title = "demo"
width = 640
height = 480

[logging]
level = "DEBUG"
"##;
        let config: GlintConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bloom.radius, 32);
        assert!((config.bloom.threshold - 0.6).abs() < f32::EPSILON);
        assert!((config.bloom.steepness - 0.08).abs() < f32::EPSILON);
        assert_eq!(config.textures.solid_color, "#0000ff");
        assert!((config.scroll.smooth - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.window.title, "demo");
        assert_eq!(config.window.width, 640);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let config: GlintConfig = toml::from_str("[unknown]\nkey = 1\n").unwrap();
        assert_eq!(config.bloom.radius, 50);
    }
}
