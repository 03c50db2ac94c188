mod app_state;
mod cli;

use std::process::ExitCode;

use glint_common::ConfigError;
use glint_config::schema::GlintConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use app_state::{AppMode, GlintApp};

/// Load the config file named on the command line, or the platform default.
fn load_config(args: &cli::Args) -> Result<GlintConfig, ConfigError> {
    match args.config {
        Some(ref path) => glint_config::load_config_from(path),
        None => glint_config::load_config(),
    }
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Config first: it carries the default log level
    let (config, config_error) = match load_config(&args) {
        Ok(config) => (config, None),
        Err(e) => (GlintConfig::default(), Some(e)),
    };

    // Initialize logging
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "glint=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("glint v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let mode = match args.view_texture {
        Some(kind) => AppMode::ViewTexture(kind),
        None => AppMode::Bloom,
    };
    tracing::info!(?mode, radius = config.bloom.radius, "Config loaded");

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = GlintApp::new(config, mode);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");

    if app.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
