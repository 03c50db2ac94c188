//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window settings for the `glint` binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 64-8192).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 64-8192).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glint".into(),
            width: 1280,
            height: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "glint");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
    }
}
