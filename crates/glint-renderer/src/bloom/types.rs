//! Bloom pipeline types.

use glint_config::schema::BloomConfig;

/// Color format of the three offscreen targets.
pub const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Depth format of the scene target. Scene draw calls must use it.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Blur directions for the two separable passes.
pub const HORIZONTAL: [f32; 2] = [1.0, 0.0];
pub const VERTICAL: [f32; 2] = [0.0, 1.0];

/// Kernel and tone-map constants shared by both blur passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomSettings {
    /// Taps on each side of the center tap.
    pub radius: u32,
    /// Soft-clamp steepness.
    pub steepness: f32,
    /// Soft-clamp asymptote.
    pub max: f32,
    /// Overflow-to-white threshold.
    pub threshold: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            radius: 50,
            steepness: 0.08,
            max: 1.0,
            threshold: 0.5,
        }
    }
}

impl BloomSettings {
    /// Create bloom settings from the application config.
    ///
    /// A zero radius is raised to 1 so the kernel is never empty.
    pub fn from_config(config: &BloomConfig) -> Self {
        Self {
            radius: config.radius.max(1),
            steepness: config.steepness,
            max: config.max,
            threshold: config.threshold,
        }
    }

    /// Total taps per blur pass (`2 * radius + 1`).
    pub fn taps(&self) -> u32 {
        self.radius * 2 + 1
    }

    /// Uniform block for one blur pass over a `width x height` input.
    pub fn blur_uniforms(&self, width: u32, height: u32, direction: [f32; 2]) -> BlurUniforms {
        BlurUniforms {
            resolution: [width.max(1) as f32, height.max(1) as f32],
            direction,
            radius: self.radius.max(1) as i32,
            steepness: self.steepness,
            max: self.max,
            threshold: self.threshold,
        }
    }
}

/// Per-pass uniforms for the blur shader.
///
/// Layout matches the WGSL `BlurUniforms` struct: 32 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlurUniforms {
    /// Input texture size in pixels.
    pub resolution: [f32; 2],
    /// (1, 0) for the horizontal pass, (0, 1) for the vertical pass.
    pub direction: [f32; 2],
    pub radius: i32,
    pub steepness: f32,
    pub max: f32,
    pub threshold: f32,
}

/// Destination rectangle of a scene-pass texture draw, in clip space.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// Lower-left corner (x, y) and upper-right corner (x, y).
    pub rect: [f32; 4],
}

impl SceneUniforms {
    pub const FULLSCREEN: Self = Self {
        rect: [-1.0, -1.0, 1.0, 1.0],
    };

    /// Convert a pixel rectangle (origin top-left) on a `width x height`
    /// target into clip space.
    pub fn from_pixels(x: f32, y: f32, w: f32, h: f32, width: u32, height: u32) -> Self {
        let width = width.max(1) as f32;
        let height = height.max(1) as f32;
        let x0 = x / width * 2.0 - 1.0;
        let x1 = (x + w) / width * 2.0 - 1.0;
        let y0 = 1.0 - (y + h) / height * 2.0;
        let y1 = 1.0 - y / height * 2.0;
        Self {
            rect: [x0, y0, x1, y1],
        }
    }
}

/// One fullscreen-quad vertex: clip-space position and texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub texcoord: [f32; 2],
}

impl QuadVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_uniforms_size_is_32_bytes() {
        assert_eq!(std::mem::size_of::<BlurUniforms>(), 32);
    }

    #[test]
    fn scene_uniforms_size_is_16_bytes() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 16);
    }

    #[test]
    fn quad_vertex_stride_is_16_bytes() {
        assert_eq!(QuadVertex::layout().array_stride, 16);
    }

    #[test]
    fn bloom_settings_default() {
        let s = BloomSettings::default();
        assert_eq!(s.radius, 50);
        assert_eq!(s.taps(), 101);
        assert!((s.steepness - 0.08).abs() < f32::EPSILON);
        assert!((s.max - 1.0).abs() < f32::EPSILON);
        assert!((s.threshold - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn bloom_settings_from_config_matches_defaults() {
        let s = BloomSettings::from_config(&BloomConfig::default());
        assert_eq!(s, BloomSettings::default());
    }

    #[test]
    fn bloom_settings_from_config_raises_zero_radius() {
        let config = BloomConfig {
            radius: 0,
            ..Default::default()
        };
        assert_eq!(BloomSettings::from_config(&config).radius, 1);
    }

    #[test]
    fn blur_uniforms_differ_only_in_direction() {
        let s = BloomSettings::default();
        let h = s.blur_uniforms(800, 600, HORIZONTAL);
        let v = s.blur_uniforms(800, 600, VERTICAL);
        assert_eq!(h.resolution, [800.0, 600.0]);
        assert_eq!(h.direction, [1.0, 0.0]);
        assert_eq!(v.direction, [0.0, 1.0]);
        assert_eq!(
            BlurUniforms {
                direction: v.direction,
                ..h
            },
            v
        );
    }

    #[test]
    fn scene_uniforms_from_pixels_full_target_is_fullscreen() {
        let u = SceneUniforms::from_pixels(0.0, 0.0, 640.0, 480.0, 640, 480);
        assert_eq!(u, SceneUniforms::FULLSCREEN);
    }

    #[test]
    fn scene_uniforms_from_pixels_top_left_quarter() {
        let u = SceneUniforms::from_pixels(0.0, 0.0, 50.0, 50.0, 100, 100);
        assert_eq!(u.rect, [-1.0, 0.0, 0.0, 1.0]);
    }
}
