//! Validation for the bloom section.

use crate::schema::GlintConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate bloom kernel and tone-map constants.
pub(crate) fn validate_bloom(errors: &mut Vec<String>, config: &GlintConfig) {
    let bloom = &config.bloom;
    validate_range(errors, "bloom.radius", bloom.radius, 1, 128);
    validate_range_f64(
        errors,
        "bloom.steepness",
        bloom.steepness as f64,
        0.001,
        1.0,
    );
    validate_range_f64(errors, "bloom.max", bloom.max as f64, 0.1, 4.0);
    validate_range_f64(errors, "bloom.threshold", bloom.threshold as f64, 0.0, 1.0);
}
