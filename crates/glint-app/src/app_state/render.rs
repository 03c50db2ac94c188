//! Per-frame rendering.

use std::time::Instant;

use glint_renderer::RendererError;

use super::core::{AppMode, GlintApp};

impl GlintApp {
    /// Render one frame in the current mode.
    pub(super) fn render_frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        let Some(ref mut rs) = self.render_state else {
            return;
        };

        let result = match self.mode {
            AppMode::Bloom => {
                // publishes the new top to `scroll_top`
                self.scroll.tick(dt);
                match self.scene {
                    Some(ref mut scene) => {
                        scene.update(rs, self.scroll_top.get());
                        rs.render_bloom_frame(|pass| scene.draw(pass))
                    }
                    None => Ok(()),
                }
            }
            AppMode::ViewTexture(_) => match self.viewed {
                Some(ref mut viewed) => rs.render_texture(viewed),
                None => Ok(()),
            },
        };

        match result {
            Ok(()) => {}
            Err(RendererError::SurfaceError(_)) => {
                // lost or outdated surface: reconfigure and try next frame
                let size = rs.gpu.size;
                if let Err(e) = rs.resize(size.width, size.height) {
                    tracing::error!("Surface reconfigure failed: {e}");
                }
                self.request_redraw();
            }
            Err(e) => tracing::error!("Frame failed: {e}"),
        }
    }
}
