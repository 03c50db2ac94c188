//! WGSL sources for the three bloom programs and up-front validation.
//!
//! Sources are compiled with naga before they reach the device so a broken
//! shader is reported as [`RendererError::ShaderCompile`] carrying the full
//! compiler diagnostic.

use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::gpu::RendererError;

const FULLSCREEN_WGSL: &str = include_str!("../shaders/fullscreen.wgsl");
const SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
const BLUR_WGSL: &str = include_str!("../shaders/blur.wgsl");
const COMBINE_WGSL: &str = include_str!("../shaders/combine.wgsl");

/// Complete WGSL modules (vertex + fragment stage) for each program.
#[derive(Debug, Clone)]
pub struct ShaderSet {
    pub scene: String,
    pub blur: String,
    pub combine: String,
}

impl Default for ShaderSet {
    fn default() -> Self {
        Self {
            scene: SCENE_WGSL.to_string(),
            blur: format!("{FULLSCREEN_WGSL}\n{BLUR_WGSL}"),
            combine: format!("{FULLSCREEN_WGSL}\n{COMBINE_WGSL}"),
        }
    }
}

/// Parse and validate a WGSL module, requiring `vs_main` and `fs_main`.
pub fn check_wgsl(label: &str, source: &str) -> Result<naga::Module, RendererError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| {
        RendererError::ShaderCompile {
            label: label.to_string(),
            diagnostic: e.emit_to_string(source),
        }
    })?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| RendererError::ShaderCompile {
            label: label.to_string(),
            diagnostic: e.emit_to_string(source),
        })?;

    let required = [
        (naga::ShaderStage::Vertex, "vs_main"),
        (naga::ShaderStage::Fragment, "fs_main"),
    ];
    for (stage, name) in required {
        let found = module
            .entry_points
            .iter()
            .any(|ep| ep.stage == stage && ep.name == name);
        if !found {
            return Err(RendererError::ShaderCompile {
                label: label.to_string(),
                diagnostic: format!("missing {stage:?} entry point `{name}`"),
            });
        }
    }

    Ok(module)
}

// =============================================================================
// Tests
// =============================================================================
