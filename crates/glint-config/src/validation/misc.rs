//! Validation for smaller config sections: textures, scroll, and window.

use glint_common::Color;

use crate::schema::GlintConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate generated texture sizes and the solid fill color.
pub(crate) fn validate_textures(errors: &mut Vec<String>, config: &GlintConfig) {
    let textures = &config.textures;
    validate_range(
        errors,
        "textures.gradient_size",
        textures.gradient_size,
        1,
        4096,
    );
    validate_range_f64(
        errors,
        "textures.gradient_inner_stop",
        textures.gradient_inner_stop as f64,
        0.0,
        1.0,
    );
    validate_range(errors, "textures.solid_width", textures.solid_width, 1, 4096);
    validate_range(
        errors,
        "textures.solid_height",
        textures.solid_height,
        1,
        4096,
    );
    if Color::from_hex(&textures.solid_color).is_none() {
        errors.push(format!(
            "textures.solid_color = {:?} is not a valid hex color",
            textures.solid_color
        ));
    }
}

/// Validate smooth-scroll constraints.
pub(crate) fn validate_scroll(errors: &mut Vec<String>, config: &GlintConfig) {
    validate_range_f64(errors, "scroll.smooth", config.scroll.smooth, 0.0, 10.0);
    validate_range_f64(
        errors,
        "scroll.content_height",
        config.scroll.content_height,
        0.0,
        1.0e7,
    );
    validate_range_f64(
        errors,
        "scroll.line_height",
        config.scroll.line_height,
        1.0,
        1000.0,
    );
}

/// Validate window dimensions.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &GlintConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 8192);
    validate_range(errors, "window.height", config.window.height, 64, 8192);
}
