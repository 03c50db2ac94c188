//! glint configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glint_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("bloom radius: {}", config.bloom.radius);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::GlintConfig;

use glint_common::ConfigError;
use std::path::Path;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<GlintConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<GlintConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
