//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, renderer, scroll session and input.

mod core;
mod event_handler;
mod init;
mod render;
mod scene;

pub use self::core::{AppMode, GlintApp};
