use std::path::PathBuf;

use bytemuck::Pod;

use crate::error::RenderError;
use crate::geometry::{IndexBuffer, Vertex, VertexBuffer, UNIT_QUAD_INDICES, UNIT_QUAD_VERTICES};
use crate::shader::{uniform_binding_size, SceneUniform, ShaderProgram, TintUniform};
use crate::texture::Texture;

use super::{RenderCtx, RenderTarget};

/// Mix factor applied when two textures are blended.
const DUAL_TEXTURE_MIX: f32 = 0.5;

/// Renderer configuration.
///
/// The texture list selects the feature variant: empty = untextured (a white
/// placeholder is bound), one path = textured quad, two paths = dual-texture
/// blend. The same pipeline serves all three.
#[derive(Debug, Clone, Default)]
pub struct QuadConfig {
    pub texture_paths: Vec<PathBuf>,
}

/// Textured-quad renderer.
///
/// Owns the pipeline, geometry, uniform buffers and textures for the single
/// draw call issued each frame. All resources are created once in `new`, in
/// dependency order; `Drop` releases them in reverse.
pub struct QuadRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,

    scene_ubo: wgpu::Buffer,
    tint_ubo: wgpu::Buffer,

    vertices: VertexBuffer,
    indices: IndexBuffer,

    /// Kept alive for the texture bind group.
    textures: Vec<Texture>,
}

impl QuadRenderer {
    /// Builds every GPU resource needed for drawing.
    ///
    /// Creation order: shaders → uniform buffers → geometry → textures →
    /// bindings → pipeline. Any failure aborts startup; there is no retry
    /// and no fallback resource (except the white placeholder when the
    /// configuration requests no textures at all).
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        config: &QuadConfig,
    ) -> Result<Self, RenderError> {
        if config.texture_paths.len() > 2 {
            return Err(RenderError::ResourceCreation(format!(
                "at most two textures are supported, got {}",
                config.texture_paths.len()
            )));
        }

        let program = ShaderProgram::compile(
            device,
            include_str!("shaders/quad.vert.wgsl"),
            include_str!("shaders/quad.frag.wgsl"),
        );
        // Unusable shader stages surface here, before any draw is attempted.
        let (vs, fs) = program.modules()?;

        let scene_ubo = create_uniform_buffer::<SceneUniform>(device, "glint scene ubo")?;
        let tint_ubo = create_uniform_buffer::<TintUniform>(device, "glint tint ubo")?;

        let vertices = VertexBuffer::create(device, &UNIT_QUAD_VERTICES)?;
        let indices = IndexBuffer::create(device, &UNIT_QUAD_INDICES)?;

        let mut textures = Vec::with_capacity(config.texture_paths.len().max(1));
        for path in &config.texture_paths {
            textures.push(Texture::load(device, queue, path)?);
        }
        if textures.is_empty() {
            textures.push(Texture::solid_white(device, queue)?);
        }

        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glint quad uniform bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(uniform_binding_size::<SceneUniform>()),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(uniform_binding_size::<TintUniform>()),
                    },
                    count: None,
                },
            ],
        });

        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glint quad texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint quad uniform bind group"),
            layout: &uniform_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: tint_ubo.as_entire_binding(),
                },
            ],
        });

        // With a single texture the overlay slot aliases the base texture;
        // the mix factor is zero so the overlay never contributes.
        let base = &textures[0];
        let overlay = textures.get(1).unwrap_or(base);

        let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint quad texture bind group"),
            layout: &texture_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(base.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(overlay.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(base.sampler()),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glint quad pipeline layout"),
            bind_group_layouts: &[&uniform_bgl, &texture_bgl],
            immediate_size: 0,
        });

        // Both stages compiled cleanly, so a validation failure here means
        // the vertex buffer layout and the shader input signature disagree.
        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glint quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: vs,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: fs,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(RenderError::LayoutMismatch(err.to_string()));
        }

        Ok(Self {
            pipeline,
            uniform_bind_group,
            texture_bind_group,
            scene_ubo,
            tint_ubo,
            vertices,
            indices,
            textures,
        })
    }

    /// Mix factor the frame loop should write into `TintUniform`.
    pub fn blend_factor(&self) -> f32 {
        if self.textures.len() == 2 {
            DUAL_TEXTURE_MIX
        } else {
            0.0
        }
    }

    /// Writes this frame's uniforms and issues the single indexed draw.
    ///
    /// `Queue::write_buffer` stages the upload internally (write-discard
    /// semantics), so the previous frame's in-flight GPU reads are never
    /// corrupted; no explicit fencing is required.
    pub fn render(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        scene: &SceneUniform,
        tint: &TintUniform,
    ) {
        ctx.queue
            .write_buffer(&self.scene_ubo, 0, bytemuck::bytes_of(scene));
        ctx.queue
            .write_buffer(&self.tint_ubo, 0, bytemuck::bytes_of(tint));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("glint quad pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniform_bind_group, &[]);
        rpass.set_bind_group(1, &self.texture_bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertices.raw().slice(..));
        rpass.set_index_buffer(self.indices.raw().slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.indices.count(), 0, 0..1);
    }
}

fn create_uniform_buffer<U: Pod>(
    device: &wgpu::Device,
    label: &str,
) -> Result<wgpu::Buffer, RenderError> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<U>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    if let Some(err) = pollster::block_on(error_scope.pop()) {
        return Err(RenderError::ResourceCreation(err.to_string()));
    }
    Ok(buffer)
}
