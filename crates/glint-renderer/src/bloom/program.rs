//! Compiled shader programs: render pipeline plus bind group layout.
//!
//! Bind groups follow one convention across programs: an optional uniform
//! block at binding 0, then the sampled textures, then a single filtering
//! sampler in the last slot.

use std::num::NonZeroU64;

use crate::gpu::RendererError;

use super::shaders::check_wgsl;

/// Everything needed to build one program.
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    pub source: &'a str,
    /// Stage visibility and byte size of the uniform block, if any.
    pub uniform: Option<(wgpu::ShaderStages, u64)>,
    pub texture_count: u32,
    pub target_format: wgpu::TextureFormat,
    pub blend: Option<wgpu::BlendState>,
    pub depth_stencil: Option<wgpu::DepthStencilState>,
    pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
}

/// An immutable vertex + fragment pipeline and the layout of its inputs.
pub struct ShaderProgram {
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl ShaderProgram {
    /// Validate the WGSL source, then build the pipeline on the device.
    ///
    /// Parse and validation failures are `ShaderCompile`; anything the device
    /// rejects while creating the pipeline is `ProgramLink`.
    pub fn build(device: &wgpu::Device, desc: &ProgramDesc<'_>) -> Result<Self, RendererError> {
        check_wgsl(desc.label, desc.source)?;

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.label),
            source: wgpu::ShaderSource::Wgsl(desc.source.into()),
        });

        let entries = layout_entries(desc.uniform, desc.texture_count);
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(desc.label),
            entries: &entries,
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(desc.label),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                buffers: desc.vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: desc.target_format,
                    blend: desc.blend,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: desc.depth_stencil.clone(),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(RendererError::ProgramLink {
                label: desc.label.to_string(),
                diagnostic: err.to_string(),
            });
        }

        tracing::debug!(program = desc.label, "shader program built");

        Ok(Self {
            pipeline,
            bind_group_layout,
        })
    }

    /// Build a bind group matching this program's layout.
    ///
    /// `uniform` must be given exactly when the program declares one and
    /// `textures` must match its texture count.
    pub fn bind_group(
        &self,
        device: &wgpu::Device,
        label: &str,
        uniform: Option<&wgpu::Buffer>,
        textures: &[&wgpu::TextureView],
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        let mut entries = Vec::with_capacity(textures.len() + 2);
        if let Some(buffer) = uniform {
            entries.push(wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            });
        }
        let first = entries.len() as u32;
        for (i, view) in textures.iter().enumerate() {
            entries.push(wgpu::BindGroupEntry {
                binding: first + i as u32,
                resource: wgpu::BindingResource::TextureView(view),
            });
        }
        entries.push(wgpu::BindGroupEntry {
            binding: entries.len() as u32,
            resource: wgpu::BindingResource::Sampler(sampler),
        });

        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.bind_group_layout,
            entries: &entries,
        })
    }
}

/// Bind group layout entries for the uniform / textures / sampler convention.
pub fn layout_entries(
    uniform: Option<(wgpu::ShaderStages, u64)>,
    texture_count: u32,
) -> Vec<wgpu::BindGroupLayoutEntry> {
    let mut entries = Vec::with_capacity(texture_count as usize + 2);

    if let Some((visibility, size)) = uniform {
        entries.push(wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(size),
            },
            count: None,
        });
    }

    for _ in 0..texture_count {
        entries.push(wgpu::BindGroupLayoutEntry {
            binding: entries.len() as u32,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        });
    }

    entries.push(wgpu::BindGroupLayoutEntry {
        binding: entries.len() as u32,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_layout_is_uniform_texture_sampler() {
        let entries = layout_entries(Some((wgpu::ShaderStages::FRAGMENT, 32)), 1);
        assert_eq!(entries.len(), 3);
        assert!(matches!(entries[0].ty, wgpu::BindingType::Buffer { .. }));
        assert!(matches!(entries[1].ty, wgpu::BindingType::Texture { .. }));
        assert!(matches!(entries[2].ty, wgpu::BindingType::Sampler(_)));
        let bindings: Vec<u32> = entries.iter().map(|e| e.binding).collect();
        assert_eq!(bindings, vec![0, 1, 2]);
    }

    #[test]
    fn combine_layout_has_two_textures_then_sampler() {
        let entries = layout_entries(None, 2);
        assert_eq!(entries.len(), 3);
        assert!(matches!(entries[0].ty, wgpu::BindingType::Texture { .. }));
        assert!(matches!(entries[1].ty, wgpu::BindingType::Texture { .. }));
        assert!(matches!(entries[2].ty, wgpu::BindingType::Sampler(_)));
        assert_eq!(entries[2].binding, 2);
    }

    #[test]
    fn uniform_visibility_is_preserved() {
        let entries = layout_entries(Some((wgpu::ShaderStages::VERTEX, 16)), 1);
        assert_eq!(entries[0].visibility, wgpu::ShaderStages::VERTEX);
        assert_eq!(entries[1].visibility, wgpu::ShaderStages::FRAGMENT);
    }
}
