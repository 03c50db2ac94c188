//! CPU reference for the bloom shader maths.
//!
//! `shaders/blur.wgsl` and `shaders/combine.wgsl` evaluate exactly these
//! functions per texel. Keeping a Rust copy lets the kernel properties be
//! checked without a GPU.

use super::types::BloomSettings;

pub type Rgba = [f32; 4];

/// Triangular tap weight: 1 at the center, 0 at `|i| == radius`.
pub fn blur_weight(i: i32, radius: u32) -> f32 {
    let radius = radius.max(1) as f32;
    1.0 - (i.unsigned_abs() as f32) / radius
}

/// Sum of all tap weights, i.e. the gain applied to a uniform input.
pub fn kernel_integral(radius: u32) -> f32 {
    let r = radius.max(1) as i32;
    (-r..=r).map(|i| blur_weight(i, radius)).sum()
}

/// Exponential soft-clamp: `max - max / exp(steepness * v)`.
pub fn map_to_asymptote(v: f32, max: f32, steepness: f32) -> f32 {
    max - max / (steepness * v).exp()
}

/// Blend `color` toward white by how far it exceeds `threshold`.
pub fn overflow_color(color: [f32; 3], threshold: f32) -> [f32; 3] {
    let overflow = color.map(|c| (c - threshold).max(0.0));
    let length = overflow.iter().map(|c| c * c).sum::<f32>().sqrt();
    let t = length.min(1.0);
    color.map(|c| c + (1.0 - c) * t)
}

/// Tone-map and whiten an accumulated tap sum. Alpha is forced to 1.
pub fn finish_blur(raw: Rgba, settings: &BloomSettings) -> Rgba {
    let mapped = [raw[0], raw[1], raw[2]]
        .map(|c| map_to_asymptote(c, settings.max, settings.steepness));
    let [r, g, b] = overflow_color(mapped, settings.threshold);
    [r, g, b, 1.0]
}

/// One output texel of a blur pass.
///
/// `taps` are the input samples at offsets `-radius..=radius` in order.
pub fn blur_texel(taps: &[Rgba], settings: &BloomSettings) -> Rgba {
    let r = settings.radius.max(1) as i32;
    let mut raw = [0.0f32; 4];
    for (tap, i) in taps.iter().zip(-r..=r) {
        let w = blur_weight(i, settings.radius);
        for c in 0..4 {
            raw[c] += tap[c] * w;
        }
    }
    finish_blur(raw, settings)
}

/// Collapse RGB to `r + g + b` on every channel, keeping alpha.
pub fn desaturate(scene: Rgba) -> Rgba {
    let sum = scene[0] + scene[1] + scene[2];
    [sum, sum, sum, scene[3]]
}

/// Final composite: desaturated scene plus bloom, unclamped.
pub fn composite(scene: Rgba, bloom: Rgba) -> Rgba {
    let s = desaturate(scene);
    [s[0] + bloom[0], s[1] + bloom[1], s[2] + bloom[2], s[3] + bloom[3]]
}

/// Mirrored-repeat texel addressing over `len` texels.
pub fn mirror_index(i: i64, len: usize) -> usize {
    let n = len.max(1) as i64;
    let m = i.rem_euclid(2 * n);
    if m >= n {
        (2 * n - 1 - m) as usize
    } else {
        m as usize
    }
}

/// Round to the nearest 8-bit unorm step, as an `Rgba8Unorm` target stores it.
pub fn quantize_unorm8(v: f32) -> f32 {
    (v.clamp(0.0, 1.0) * 255.0).round() / 255.0
}

/// One blur pass over a `width x height` image on the CPU.
///
/// Taps read with mirrored-repeat addressing and the output is quantized
/// to 8 bits, matching what a GPU target holds after the pass.
pub fn blur_pass_reference(
    image: &[Rgba],
    width: usize,
    height: usize,
    settings: &BloomSettings,
    horizontal: bool,
) -> Vec<Rgba> {
    let r = settings.radius.max(1) as i64;
    let mut out = Vec::with_capacity(image.len());
    let mut taps = Vec::with_capacity((2 * r + 1) as usize);
    for y in 0..height {
        for x in 0..width {
            taps.clear();
            for i in -r..=r {
                let (sx, sy) = if horizontal {
                    (mirror_index(x as i64 + i, width), y)
                } else {
                    (x, mirror_index(y as i64 + i, height))
                };
                taps.push(image[sy * width + sx]);
            }
            out.push(blur_texel(&taps, settings).map(quantize_unorm8));
        }
    }
    out
}

/// Horizontal then vertical pass, i.e. the contents of `blur_b`.
pub fn bloom_reference(
    image: &[Rgba],
    width: usize,
    height: usize,
    settings: &BloomSettings,
) -> Vec<Rgba> {
    let blur_a = blur_pass_reference(image, width, height, settings, true);
    blur_pass_reference(&blur_a, width, height, settings, false)
}
