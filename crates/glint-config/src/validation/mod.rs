//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod bloom;
mod helpers;
mod misc;


use crate::schema::GlintConfig;
use glint_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlintConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    bloom::validate_bloom(&mut errors, config);
    misc::validate_textures(&mut errors, config);
    misc::validate_scroll(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
