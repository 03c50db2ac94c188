//! Mouse wheel translation.

/// Convert a wheel delta to a scroll offset change in pixels.
///
/// Line deltas are scaled by `line_height`; pixel deltas pass through.
/// Wheel-up (positive `y`) scrolls toward the top, so the sign flips.
pub fn wheel_to_pixels(lines_y: Option<f32>, pixels_y: Option<f64>, line_height: f64) -> f64 {
    match (lines_y, pixels_y) {
        (Some(lines), _) => -(lines as f64) * line_height,
        (None, Some(pixels)) => -pixels,
        (None, None) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_delta_is_scaled() {
        assert_eq!(wheel_to_pixels(Some(-1.0), None, 120.0), 120.0);
        assert_eq!(wheel_to_pixels(Some(2.0), None, 120.0), -240.0);
    }

    #[test]
    fn pixel_delta_passes_through() {
        assert_eq!(wheel_to_pixels(None, Some(-35.5), 120.0), 35.5);
    }

    #[test]
    fn no_delta_is_zero() {
        assert_eq!(wheel_to_pixels(None, None, 120.0), 0.0);
    }
}
