use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// GPU bloom post-processing demo and texture viewer.
#[derive(Parser, Debug)]
#[command(name = "glint", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `glint=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Show a generated texture in the debug viewer instead of the bloom demo.
    #[arg(long, value_enum)]
    pub view_texture: Option<TextureKind>,
}

/// Textures the debug viewer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextureKind {
    /// Soft white disc.
    Radial,
    /// Opaque red fill.
    Red,
    /// Fill in `textures.solid_color`.
    Solid,
}

pub fn parse() -> Args {
    Args::parse()
}
