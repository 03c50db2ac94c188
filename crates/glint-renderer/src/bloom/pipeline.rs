//! Four-stage bloom pipeline.
//!
//! Stage A: caller draws the scene into `scene`
//! Stage B: horizontal blur (scene → blur_a)
//! Stage C: vertical blur (blur_a → blur_b)
//! Stage D: desaturated scene + blur_b onto the output view

use wgpu::util::DeviceExt;

use crate::gpu::{PhysicalSize, RendererError};

use super::program::{ProgramDesc, ShaderProgram};
use super::quad::FullscreenQuad;
use super::scene::{ScenePass, SceneTexture};
use super::shaders::ShaderSet;
use super::targets::BloomTargets;
use super::types::{
    BloomSettings, BlurUniforms, QuadVertex, SceneUniforms, DEPTH_FORMAT, HORIZONTAL,
    TARGET_FORMAT, VERTICAL,
};

/// Owns every GPU resource of the bloom effect for one output surface.
pub struct BloomPipeline {
    scene_program: ShaderProgram,
    blur_program: ShaderProgram,
    combine_program: ShaderProgram,
    quad: FullscreenQuad,
    sampler: wgpu::Sampler,
    targets: BloomTargets,
    bindings: TargetBindings,
    settings: BloomSettings,
    output_format: wgpu::TextureFormat,
}

/// Everything that references the render targets and is rebuilt with them.
struct TargetBindings {
    // kept alive for the bind groups below
    _uniforms_h: wgpu::Buffer,
    _uniforms_v: wgpu::Buffer,
    blur_h: wgpu::BindGroup,
    blur_v: wgpu::BindGroup,
    combine: wgpu::BindGroup,
}

impl BloomPipeline {
    /// Build the pipeline with the bundled shaders.
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        settings: BloomSettings,
    ) -> Result<Self, RendererError> {
        Self::with_shaders(
            device,
            output_format,
            width,
            height,
            settings,
            &ShaderSet::default(),
        )
    }

    /// Build the pipeline from caller-supplied WGSL.
    ///
    /// Programs are compiled in order (scene, blur, combine) and the first
    /// failure is returned; programs already built are dropped with it.
    pub fn with_shaders(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        settings: BloomSettings,
        shaders: &ShaderSet,
    ) -> Result<Self, RendererError> {
        let quad_layout = [QuadVertex::layout()];

        let scene_program = ShaderProgram::build(
            device,
            &ProgramDesc {
                label: "scene pass",
                source: &shaders.scene,
                uniform: Some((
                    wgpu::ShaderStages::VERTEX,
                    std::mem::size_of::<SceneUniforms>() as u64,
                )),
                texture_count: 1,
                target_format: TARGET_FORMAT,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: false,
                    depth_compare: wgpu::CompareFunction::Always,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                vertex_buffers: &quad_layout,
            },
        )?;

        let blur_program = ShaderProgram::build(
            device,
            &ProgramDesc {
                label: "blur pass",
                source: &shaders.blur,
                uniform: Some((
                    wgpu::ShaderStages::FRAGMENT,
                    std::mem::size_of::<BlurUniforms>() as u64,
                )),
                texture_count: 1,
                target_format: TARGET_FORMAT,
                blend: None,
                depth_stencil: None,
                vertex_buffers: &quad_layout,
            },
        )?;

        let combine_program = ShaderProgram::build(
            device,
            &ProgramDesc {
                label: "combine pass",
                source: &shaders.combine,
                uniform: None,
                texture_count: 2,
                target_format: output_format,
                blend: None,
                depth_stencil: None,
                vertex_buffers: &quad_layout,
            },
        )?;

        let quad = FullscreenQuad::new(device);

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("bloom target sampler"),
            address_mode_u: wgpu::AddressMode::MirrorRepeat,
            address_mode_v: wgpu::AddressMode::MirrorRepeat,
            address_mode_w: wgpu::AddressMode::MirrorRepeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let targets = BloomTargets::new(device, width, height)?;
        let bindings = TargetBindings::new(
            device,
            &blur_program,
            &combine_program,
            &targets,
            &sampler,
            &settings,
        );

        tracing::info!(
            width,
            height,
            radius = settings.radius,
            taps = settings.taps(),
            format = ?output_format,
            "bloom pipeline created"
        );

        Ok(Self {
            scene_program,
            blur_program,
            combine_program,
            quad,
            sampler,
            targets,
            bindings,
            settings,
            output_format,
        })
    }

    /// Reallocate all targets at the new size and rebind them.
    ///
    /// On error the pipeline keeps its previous targets.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> Result<(), RendererError> {
        let size = PhysicalSize::new(width, height);
        if size == self.targets.size() {
            return Ok(());
        }

        let targets = BloomTargets::new(device, width, height)?;
        self.bindings = TargetBindings::new(
            device,
            &self.blur_program,
            &self.combine_program,
            &targets,
            &self.sampler,
            &self.settings,
        );
        self.targets = targets;

        tracing::debug!(%size, "bloom targets resized");
        Ok(())
    }

    /// Record all four stages into `encoder`.
    ///
    /// `draw_scene` runs inside the scene pass. It must not open another
    /// pass; the borrow on `encoder` prevents it anyway.
    pub fn record<F>(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        draw_scene: F,
    ) where
        F: FnOnce(&mut ScenePass<'_>),
    {
        // Stage A: scene capture
        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("bloom scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let mut scene = ScenePass::new(pass, &self.scene_program, &self.quad);
            draw_scene(&mut scene);
        }

        // Stage B: horizontal blur → blur_a
        self.fullscreen_pass(
            encoder,
            "bloom blur h pass",
            &self.targets.blur_a.view,
            &self.blur_program,
            &self.bindings.blur_h,
        );

        // Stage C: vertical blur → blur_b
        self.fullscreen_pass(
            encoder,
            "bloom blur v pass",
            &self.targets.blur_b.view,
            &self.blur_program,
            &self.bindings.blur_v,
        );

        // Stage D: composite → output
        self.fullscreen_pass(
            encoder,
            "bloom combine pass",
            output_view,
            &self.combine_program,
            &self.bindings.combine,
        );
    }

    /// Record and submit one frame.
    pub fn run<F>(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        output_view: &wgpu::TextureView,
        draw_scene: F,
    ) where
        F: FnOnce(&mut ScenePass<'_>),
    {
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("bloom frame encoder"),
        });
        self.record(&mut encoder, output_view, draw_scene);
        queue.submit(std::iter::once(encoder.finish()));
    }

    /// Bind a texture for drawing in the scene pass at `rect`.
    pub fn scene_texture(
        &self,
        device: &wgpu::Device,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        rect: SceneUniforms,
    ) -> SceneTexture {
        SceneTexture::new(device, &self.scene_program, view, sampler, rect)
    }

    pub fn targets(&self) -> &BloomTargets {
        &self.targets
    }

    pub fn size(&self) -> PhysicalSize {
        self.targets.size()
    }

    pub fn settings(&self) -> &BloomSettings {
        &self.settings
    }

    pub fn output_format(&self) -> wgpu::TextureFormat {
        self.output_format
    }

    fn fullscreen_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        label: &str,
        target: &wgpu::TextureView,
        program: &ShaderProgram,
        bind_group: &wgpu::BindGroup,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&program.pipeline);
        pass.set_bind_group(0, bind_group, &[]);
        self.quad.draw(&mut pass);
    }
}

impl TargetBindings {
    fn new(
        device: &wgpu::Device,
        blur_program: &ShaderProgram,
        combine_program: &ShaderProgram,
        targets: &BloomTargets,
        sampler: &wgpu::Sampler,
        settings: &BloomSettings,
    ) -> Self {
        let size = targets.size();
        let uniform_buffer = |label: &str, direction: [f32; 2]| {
            let uniforms = settings.blur_uniforms(size.width, size.height, direction);
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::bytes_of(&uniforms),
                usage: wgpu::BufferUsages::UNIFORM,
            })
        };
        let uniforms_h = uniform_buffer("bloom blur h uniforms", HORIZONTAL);
        let uniforms_v = uniform_buffer("bloom blur v uniforms", VERTICAL);

        let blur_h = blur_program.bind_group(
            device,
            "bloom blur h bind group",
            Some(&uniforms_h),
            &[&targets.scene.view],
            sampler,
        );
        let blur_v = blur_program.bind_group(
            device,
            "bloom blur v bind group",
            Some(&uniforms_v),
            &[&targets.blur_a.view],
            sampler,
        );
        let combine = combine_program.bind_group(
            device,
            "bloom combine bind group",
            None,
            &[&targets.scene.view, &targets.blur_b.view],
            sampler,
        );

        Self {
            _uniforms_h: uniforms_h,
            _uniforms_v: uniforms_v,
            blur_h,
            blur_v,
            combine,
        }
    }
}
