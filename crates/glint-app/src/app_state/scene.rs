//! Demo scene for the bloom mode: glowing discs laid out down a tall page.

use glint_config::schema::GlintConfig;
use glint_renderer::bloom::{ScenePass, SceneTexture, SceneUniforms};
use glint_renderer::textures::create_radial_gradient_texture_with_stop;
use glint_renderer::{GeneratedTexture, RenderState};

/// Discs spread over the scrollable content.
pub const SPRITE_COUNT: usize = 8;

/// Pixel placement of one disc: top-left corner and side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Lay `count` discs of `size` pixels down `content_height` of page,
/// alternating between the left and right quarter lines, shifted up by the
/// scroll offset `top`.
pub fn sprite_layout(
    count: usize,
    size: f32,
    content_height: f64,
    top: f64,
    viewport_width: f32,
) -> Vec<SpriteRect> {
    let spacing = content_height / count.max(1) as f64;
    (0..count)
        .map(|i| {
            let column = if i % 2 == 0 { 0.25 } else { 0.75 };
            let center_y = spacing * (i as f64 + 0.5) - top;
            SpriteRect {
                x: viewport_width * column - size / 2.0,
                y: center_y as f32 - size / 2.0,
                size,
            }
        })
        .collect()
}

pub struct DemoScene {
    // owns the texture the sprites sample
    _disc: GeneratedTexture,
    sprites: Vec<SceneTexture>,
    size: f32,
    content_height: f64,
}

impl DemoScene {
    /// Upload the disc texture and bind one scene texture per sprite.
    pub fn new(rs: &RenderState, config: &GlintConfig) -> Option<Self> {
        let textures = &config.textures;
        let disc = create_radial_gradient_texture_with_stop(
            &rs.gpu.device,
            &rs.gpu.queue,
            textures.gradient_size,
            textures.gradient_inner_stop,
        )?;
        let sprites = (0..SPRITE_COUNT)
            .map(|_| {
                disc.scene_texture(&rs.gpu.device, &rs.bloom, SceneUniforms::FULLSCREEN)
            })
            .collect();

        Some(Self {
            size: textures.gradient_size as f32,
            content_height: config.scroll.content_height,
            _disc: disc,
            sprites,
        })
    }

    /// Place every sprite for scroll offset `top` on the current surface.
    pub fn update(&mut self, rs: &RenderState, top: f64) {
        let (width, height) = (rs.gpu.size.width, rs.gpu.size.height);
        let layout = sprite_layout(
            self.sprites.len(),
            self.size,
            self.content_height,
            top,
            width as f32,
        );
        for (sprite, rect) in self.sprites.iter_mut().zip(layout) {
            let uniforms =
                SceneUniforms::from_pixels(rect.x, rect.y, rect.size, rect.size, width, height);
            sprite.set_rect(&rs.gpu.queue, uniforms);
        }
    }

    pub fn draw(&self, pass: &mut ScenePass<'_>) {
        for sprite in &self.sprites {
            pass.draw_texture(sprite);
        }
    }
}
