//! # wgpu Renderer
//!
//! The on-screen `FrameSink`. Owns the device, the swapchain surface, both
//! pipelines and every buffer the hero draws from.
//!
//! ## Frame
//!
//! ```text
//! write uniforms ─► write particle positions ─► acquire surface texture
//!   ─► clear (theme background) ─► sphere (indexed) ─► particles (instanced quads)
//!   ─► present
//! ```
//!
//! Lost/outdated surfaces are reconfigured and the frame is dropped.

use tracing::{debug, info, warn};
use wgpu::util::DeviceExt;

use sugarfox_shared::constants::SPHERE_RADIUS;
use sugarfox_shared::{SceneConfig, Theme};

use crate::effects::ParticleInstance;
use crate::error::{RenderError, RenderResult};
use crate::geometry::{SphereMesh, SphereVertex};
use crate::input::SurfaceSize;
use crate::integration::FrameSink;
use crate::pipeline::{RenderFrame, SceneUniforms};
use crate::shaders::{
    HERO_SHADER, PARTICLE_FS, PARTICLE_QUAD_VERTICES, PARTICLE_VS, SPHERE_FS, SPHERE_VS,
};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Depth attachment sized to the surface.
struct DepthTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthTarget {
    fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Hero Depth"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// GPU-backed frame sink drawing into a window surface.
pub struct GpuRenderer<'window> {
    surface: wgpu::Surface<'window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    sphere_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,

    sphere_vertices: wgpu::Buffer,
    sphere_indices: wgpu::Buffer,
    index_count: u32,
    particle_buffer: wgpu::Buffer,
    particle_capacity: u32,

    clear_color: wgpu::Color,
    size: SurfaceSize,
    released: bool,
}

impl<'window> GpuRenderer<'window> {
    /// Creates the device, surface, pipelines and buffers for one mount.
    ///
    /// # Errors
    ///
    /// Fails if the surface cannot be created, no adapter can present to
    /// it, or the device request is refused.
    pub fn new(
        target: impl Into<wgpu::SurfaceTarget<'window>>,
        size: SurfaceSize,
        scene: &SceneConfig,
    ) -> RenderResult<Self> {
        let backends = wgpu::util::backend_bits_from_env().unwrap_or(wgpu::Backends::PRIMARY);
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance.create_surface(target)?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(RenderError::NoAdapter)?;

        let adapter_info = adapter.get_info();
        info!(
            adapter = %adapter_info.name,
            backend = ?adapter_info.backend,
            "GPU adapter selected"
        );

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Sugarfox Hero"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        ))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .ok_or(RenderError::UnsupportedSurface)?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        if !size.is_empty() {
            surface.configure(&device, &config);
        }
        let depth = DepthTarget::new(&device, config.width, config.height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Hero Shader"),
            source: wgpu::ShaderSource::Wgsl(HERO_SHADER.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Hero Uniforms"),
            size: SceneUniforms::SIZE as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Hero Uniform Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Hero Uniform Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Hero Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Sphere: opaque, visible from both sides like the page's DoubleSide material.
        let sphere_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Hero Sphere Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: SPHERE_VS,
                buffers: &[SphereVertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: SPHERE_FS,
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                front_face: wgpu::FrontFace::Ccw,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        // Particles: depth-tested against the sphere, never write depth.
        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Hero Particle Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: PARTICLE_VS,
                buffers: &[ParticleInstance::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: PARTICLE_FS,
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let scene = scene.clone().sanitized();
        let mesh = SphereMesh::generate(SPHERE_RADIUS, scene.sphere_segments);
        let sphere_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Hero Sphere Vertices"),
            contents: mesh.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Hero Sphere Indices"),
            contents: mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });
        let index_count = u32::try_from(mesh.indices.len()).unwrap_or(u32::MAX);

        let particle_capacity = u32::try_from(scene.particle_count).unwrap_or(u32::MAX);
        let particle_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Hero Particles"),
            size: (ParticleInstance::SIZE as wgpu::BufferAddress)
                * wgpu::BufferAddress::from(particle_capacity.max(1)),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        info!(
            format = ?format,
            triangles = mesh.triangle_count(),
            particles = particle_capacity,
            "hero renderer ready"
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            uniform_buffer,
            bind_group,
            sphere_pipeline,
            particle_pipeline,
            sphere_vertices,
            sphere_indices,
            index_count,
            particle_buffer,
            particle_capacity,
            clear_color: clear_color(scene.theme),
            size,
            released: false,
        })
    }

    /// Surface texture format in use.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// True once `release` has run.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.released
    }
}

impl FrameSink for GpuRenderer<'_> {
    fn submit(&mut self, frame: &RenderFrame<'_>) -> RenderResult<()> {
        if self.released {
            return Err(RenderError::Released);
        }
        if self.size.is_empty() {
            debug!("surface is zero-sized; frame skipped");
            return Ok(());
        }

        self.queue
            .write_buffer(&self.uniform_buffer, 0, frame.uniform_bytes());

        let particle_count = frame.particle_count().min(self.particle_capacity);
        if particle_count > 0 {
            let bytes = &frame.particle_bytes()[..particle_count as usize * ParticleInstance::SIZE];
            self.queue.write_buffer(&self.particle_buffer, 0, bytes);
        }

        let output = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface lost or outdated; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                debug!("surface acquire timed out; frame skipped");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Hero Frame"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Hero Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_bind_group(0, &self.bind_group, &[]);

            pass.set_pipeline(&self.sphere_pipeline);
            pass.set_vertex_buffer(0, self.sphere_vertices.slice(..));
            pass.set_index_buffer(self.sphere_indices.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..self.index_count, 0, 0..1);

            if particle_count > 0 {
                pass.set_pipeline(&self.particle_pipeline);
                pass.set_vertex_buffer(0, self.particle_buffer.slice(..));
                pass.draw(0..PARTICLE_QUAD_VERTICES, 0..particle_count);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        if size.is_empty() || self.released {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);

        self.depth.texture.destroy();
        self.depth = DepthTarget::new(&self.device, size.width, size.height);
    }

    fn set_theme(&mut self, theme: Theme) {
        self.clear_color = clear_color(theme);
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.uniform_buffer.destroy();
        self.sphere_vertices.destroy();
        self.sphere_indices.destroy();
        self.particle_buffer.destroy();
        self.depth.texture.destroy();
        self.released = true;
        info!("hero GPU resources released");
    }
}

fn clear_color(theme: Theme) -> wgpu::Color {
    let [r, g, b, a] = theme.background_color();
    wgpu::Color { r, g, b, a }
}
