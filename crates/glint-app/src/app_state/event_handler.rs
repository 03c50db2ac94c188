//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use glint_scroll::wheel::wheel_to_pixels;

use super::core::{AppMode, GlintApp};

impl ApplicationHandler for GlintApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("Startup failed: {e}");
            self.failed = true;
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        if let Err(e) = rs.resize(size.width, size.height) {
                            tracing::error!("Resize failed: {e}");
                        }
                    }
                    self.scroll
                        .set_extent(self.config.scroll.content_height, size.height as f64);
                    self.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let pixels = match delta {
                    MouseScrollDelta::LineDelta(_, y) => {
                        wheel_to_pixels(Some(y), None, self.config.scroll.line_height)
                    }
                    MouseScrollDelta::PixelDelta(p) => {
                        wheel_to_pixels(None, Some(p.y), self.config.scroll.line_height)
                    }
                };
                self.scroll.scroll_by(pixels);
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if self.handle_keyboard_input(event) {
                    event_loop.exit();
                }
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // keep animating until the smoothed offset reaches its target
        if self.mode == AppMode::Bloom && !self.scroll.is_settled() {
            self.request_redraw();
        }
    }
}

impl GlintApp {
    /// Handle scroll keys. Returns `true` when the app should exit.
    fn handle_keyboard_input(&mut self, event: KeyEvent) -> bool {
        if event.state != ElementState::Pressed {
            return false;
        }
        let line = self.config.scroll.line_height;
        match event.logical_key {
            Key::Named(NamedKey::Escape) => return true,
            Key::Named(NamedKey::Home) => self.scroll.scroll_to(0.0),
            Key::Named(NamedKey::End) => self.scroll.scroll_to(f64::MAX),
            Key::Named(NamedKey::ArrowDown) => self.scroll.scroll_by(line),
            Key::Named(NamedKey::ArrowUp) => self.scroll.scroll_by(-line),
            Key::Named(NamedKey::PageDown) => self.scroll.scroll_by(line * 5.0),
            Key::Named(NamedKey::PageUp) => self.scroll.scroll_by(-line * 5.0),
            _ => return false,
        }
        self.request_redraw();
        false
    }
}
