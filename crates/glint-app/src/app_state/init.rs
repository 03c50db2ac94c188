//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use glint_common::{Color, GlintError};
use glint_renderer::textures::{
    create_radial_gradient_texture_with_stop, create_red_texture, create_solid_texture,
};
use glint_renderer::{GeneratedTexture, RenderState};

use super::core::{AppMode, GlintApp};
use super::scene::DemoScene;
use crate::cli::TextureKind;

impl GlintApp {
    /// Create the window and initialize the GPU renderer and the mode's textures.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> glint_common::Result<()> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| GlintError::Window(e.to_string()))?;

        let rs = pollster::block_on(RenderState::new(window.clone(), &self.config))?;

        match self.mode {
            AppMode::Bloom => {
                let scene = DemoScene::new(&rs, &self.config)
                    .ok_or_else(|| GlintError::Renderer("demo disc texture unavailable".into()))?;
                self.scroll.set_extent(
                    self.config.scroll.content_height,
                    rs.gpu.size.height as f64,
                );
                self.scene = Some(scene);
            }
            AppMode::ViewTexture(kind) => {
                let texture = self.create_view_texture(&rs, kind).ok_or_else(|| {
                    GlintError::Renderer(format!("{kind:?} texture unavailable"))
                })?;
                tracing::info!(?kind, size = %texture.size, "Viewing texture");
                self.viewed = Some(rs.viewer.bind(&rs.gpu.device, texture));
            }
        }

        self.render_state = Some(rs);
        self.window = Some(window);
        Ok(())
    }

    fn create_view_texture(
        &self,
        rs: &RenderState,
        kind: TextureKind,
    ) -> Option<GeneratedTexture> {
        let textures = &self.config.textures;
        let (device, queue) = (&rs.gpu.device, &rs.gpu.queue);
        match kind {
            TextureKind::Radial => create_radial_gradient_texture_with_stop(
                device,
                queue,
                textures.gradient_size,
                textures.gradient_inner_stop,
            ),
            TextureKind::Red => {
                create_red_texture(device, queue, textures.solid_width, textures.solid_height)
            }
            TextureKind::Solid => {
                let color = Color::from_hex(&textures.solid_color).unwrap_or_else(|| {
                    tracing::warn!(
                        "Invalid solid_color {:?}, using red",
                        textures.solid_color
                    );
                    Color::RED
                });
                create_solid_texture(
                    device,
                    queue,
                    textures.solid_width,
                    textures.solid_height,
                    color,
                )
            }
        }
    }
}
