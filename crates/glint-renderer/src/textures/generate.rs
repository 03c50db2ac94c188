//! CPU-side RGBA8 pixel generation.
//!
//! Every generator returns `None` when the byte length overflows `usize`.

use glint_common::Size;

/// Fraction of the radius that stays fully opaque in the radial gradient.
pub const RADIAL_INNER_STOP: f32 = 0.9;

/// A `size x size` white disc, opaque to 0.9 of the radius and fading
/// linearly to transparent at the radius. Rows are top to bottom.
pub fn radial_gradient_pixels(size: u32) -> Option<Vec<u8>> {
    radial_gradient_pixels_with_stop(size, RADIAL_INNER_STOP)
}

/// [`radial_gradient_pixels`] with a custom opaque stop in `0.0..=1.0`.
pub fn radial_gradient_pixels_with_stop(size: u32, inner_stop: f32) -> Option<Vec<u8>> {
    let len = Size::new(size, size).rgba8_len()?;
    let radius = size as f32 / 2.0;
    let inner = inner_stop.clamp(0.0, 1.0);
    let mut pixels = Vec::with_capacity(len);

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let t = (dx * dx + dy * dy).sqrt() / radius;
            let alpha = gradient_alpha(t, inner);
            pixels.extend_from_slice(&[255, 255, 255, (alpha * 255.0).round() as u8]);
        }
    }
    Some(pixels)
}

/// Alpha at normalized distance `t` from the center.
fn gradient_alpha(t: f32, inner: f32) -> f32 {
    if t <= inner {
        1.0
    } else if t >= 1.0 {
        0.0
    } else {
        1.0 - (t - inner) / (1.0 - inner)
    }
}

/// `width x height` pixels all set to `rgba`.
pub fn solid_pixels(width: u32, height: u32, rgba: [u8; 4]) -> Option<Vec<u8>> {
    let len = Size::new(width, height).rgba8_len()?;
    Some(rgba.repeat(len / 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(pixels: &[u8], size: u32, x: u32, y: u32) -> u8 {
        pixels[((y * size + x) * 4 + 3) as usize]
    }

    #[test]
    fn gradient_has_size_squared_texels() {
        assert_eq!(radial_gradient_pixels(16).unwrap().len(), 16 * 16 * 4);
        assert!(radial_gradient_pixels(0).unwrap().is_empty());
    }

    #[test]
    fn gradient_is_white() {
        let pixels = radial_gradient_pixels(32).unwrap();
        for px in pixels.chunks(4) {
            assert_eq!(&px[..3], &[255, 255, 255]);
        }
    }

    #[test]
    fn gradient_center_opaque_corners_transparent() {
        let size = 64;
        let pixels = radial_gradient_pixels(size).unwrap();
        assert_eq!(alpha_at(&pixels, size, 32, 32), 255);
        assert_eq!(alpha_at(&pixels, size, 0, 0), 0);
        assert_eq!(alpha_at(&pixels, size, size - 1, size - 1), 0);
    }

    #[test]
    fn gradient_fades_between_stops() {
        let size = 200;
        let pixels = radial_gradient_pixels(size).unwrap();
        // along the middle row the distance from center is |x + 0.5 - 100|
        // t = 0.95 lands halfway through the fade
        let x = (100.0 + 0.95 * 100.0 - 0.5) as u32;
        let a = alpha_at(&pixels, size, x, 99);
        assert!((100..=155).contains(&a), "alpha {a}");
        // inside the opaque stop
        assert_eq!(alpha_at(&pixels, size, 100 + 85, 99), 255);
    }

    #[test]
    fn gradient_is_radially_symmetric() {
        let size = 48;
        let pixels = radial_gradient_pixels(size).unwrap();
        for y in 0..size {
            for x in 0..size {
                let a = alpha_at(&pixels, size, x, y);
                assert_eq!(a, alpha_at(&pixels, size, size - 1 - x, y));
                assert_eq!(a, alpha_at(&pixels, size, y, x));
            }
        }
    }

    #[test]
    fn alpha_stops() {
        assert_eq!(gradient_alpha(0.0, 0.9), 1.0);
        assert_eq!(gradient_alpha(0.9, 0.9), 1.0);
        assert_eq!(gradient_alpha(1.0, 0.9), 0.0);
        assert_eq!(gradient_alpha(1.5, 0.9), 0.0);
        assert!((gradient_alpha(0.95, 0.9) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn inner_stop_of_one_is_a_hard_edge() {
        assert_eq!(gradient_alpha(0.999, 1.0), 1.0);
        assert_eq!(gradient_alpha(1.0, 1.0), 1.0);
        assert_eq!(gradient_alpha(1.001, 1.0), 0.0);
    }

    #[test]
    fn solid_fill_repeats_color() {
        let pixels = solid_pixels(3, 2, [255, 0, 0, 255]).unwrap();
        assert_eq!(pixels.len(), 24);
        assert!(pixels.chunks(4).all(|px| px == [255, 0, 0, 255]));
    }

    #[test]
    fn overflowing_dimensions_generate_nothing() {
        assert!(radial_gradient_pixels(u32::MAX).is_none());
        assert!(solid_pixels(u32::MAX, u32::MAX, [255, 0, 0, 255]).is_none());
    }
}
