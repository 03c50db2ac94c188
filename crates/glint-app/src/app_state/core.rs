//! GlintApp struct definition and constructor.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use glint_config::schema::GlintConfig;
use glint_renderer::{RenderState, ViewedTexture};
use glint_scroll::ScrollSession;

use super::scene::DemoScene;
use crate::cli::TextureKind;

/// What the window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Scrolling field of glowing discs through the bloom pipeline.
    Bloom,
    /// A single generated texture in the debug viewer.
    ViewTexture(TextureKind),
}

/// Top-level application state.
pub struct GlintApp {
    pub(super) config: GlintConfig,
    pub(super) mode: AppMode,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Bloom mode
    pub(super) scene: Option<DemoScene>,
    pub(super) scroll: ScrollSession,
    /// Latest top offset published by `scroll`.
    pub(super) scroll_top: Rc<Cell<f64>>,

    // Viewer mode
    pub(super) viewed: Option<ViewedTexture>,

    pub(super) last_frame: Instant,
    pub(super) failed: bool,
}

impl GlintApp {
    pub fn new(config: GlintConfig, mode: AppMode) -> Self {
        let mut scroll = ScrollSession::from_config(&config.scroll, config.window.height as f64);
        let scroll_top = Rc::new(Cell::new(0.0));
        let top = Rc::clone(&scroll_top);
        scroll.subscribe(move |value| top.set(value));

        Self {
            config,
            mode,
            window: None,
            render_state: None,
            scene: None,
            scroll,
            scroll_top,
            viewed: None,
            last_frame: Instant::now(),
            failed: false,
        }
    }

    /// Whether startup failed and the event loop was stopped early.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
