//! wgpu render driver shared by the web and native frontends.
//!
//! Meshes are uploaded once at startup since geometry never changes. Every
//! frame re-reads transforms, materials and point positions from the scene,
//! packs them into uniform and instance buffers and issues one pass.

use crate::constants::FOG_COLOR;
use crate::lights::LightRig;
use crate::scene::{hex_to_linear, Drawable, PointField, Scene};
use crate::state::Camera;
use anyhow::Context;
use image::{Rgba, RgbaImage};
use wgpu::util::DeviceExt;

mod helpers;
mod uniforms;

pub use helpers::{GpuMesh, DEPTH_FORMAT};
pub use uniforms::{
    mesh_draws, point_batches, FrameUniforms, MeshDraw, ObjectUniforms, PointBatches,
    PointInstance,
};

pub struct Renderer<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    encode_srgb: bool,
    clear_color: wgpu::Color,

    depth_view: wgpu::TextureView,

    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,

    opaque_pipeline: wgpu::RenderPipeline,
    blended_pipeline: wgpu::RenderPipeline,
    meshes: Vec<GpuMesh>,
    object_buffer: wgpu::Buffer,
    object_stride: u64,
    object_capacity: usize,
    // one per scene texture, then the plain white fallback
    object_bind_groups: Vec<wgpu::BindGroup>,

    point_alpha_pipeline: wgpu::RenderPipeline,
    point_additive_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_capacity: usize,
}

impl<'w> Renderer<'w> {
    /// Create the device, upload the scene's static resources and configure
    /// the surface at `width` x `height` physical pixels.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'w>>,
        width: u32,
        height: u32,
        scene: &Scene,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let first = caps
            .formats
            .first()
            .copied()
            .context("surface reports no formats")?;
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(first);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let (_, depth_view) = helpers::create_depth_texture(&device, width, height);

        // ---------------- frame uniforms ----------------
        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        // ---------------- meshes ----------------
        let meshes: Vec<GpuMesh> = scene
            .geometries()
            .iter()
            .enumerate()
            .map(|(i, g)| helpers::upload_mesh(&device, &format!("mesh_{i}"), &g.tessellate()))
            .collect();

        let object_size = std::mem::size_of::<ObjectUniforms>() as u64;
        let align = device.limits().min_uniform_buffer_offset_alignment as u64;
        let object_stride = object_size.div_ceil(align) * align;
        let object_capacity = scene
            .nodes()
            .filter(|(_, n)| matches!(n.drawable(), Some(Drawable::Mesh { .. })))
            .count()
            .max(1);
        let object_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("object_uniforms"),
            size: object_stride * object_capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(object_size),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
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
        let repeat_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("repeat_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let white = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let mut texture_views: Vec<wgpu::TextureView> = scene
            .textures()
            .iter()
            .enumerate()
            .map(|(i, img)| helpers::upload_rgba(&device, &queue, &format!("texture_{i}"), img).1)
            .collect();
        texture_views.push(helpers::upload_rgba(&device, &queue, "white", &white).1);
        let object_bind_groups = texture_views
            .iter()
            .map(|view| {
                device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("object_bg"),
                    layout: &object_bgl,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                                buffer: &object_buffer,
                                offset: 0,
                                size: wgpu::BufferSize::new(object_size),
                            }),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::TextureView(view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 2,
                            resource: wgpu::BindingResource::Sampler(&repeat_sampler),
                        },
                    ],
                })
            })
            .collect();

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let mesh_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&frame_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let mesh_buffers = [helpers::vertex_layout()];
        let opaque_pipeline = helpers::make_pipeline(
            &device,
            "opaque_pipeline",
            &mesh_pl,
            &scene_shader,
            &mesh_buffers,
            format,
            None,
            true,
        );
        let blended_pipeline = helpers::make_pipeline(
            &device,
            "blended_pipeline",
            &mesh_pl,
            &scene_shader,
            &mesh_buffers,
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        // ---------------- point sprites ----------------
        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::POINTS_WGSL.into()),
        });
        let points_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[&frame_bgl],
            push_constant_ranges: &[],
        });
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_capacity = scene
            .point_fields()
            .iter()
            .map(PointField::len)
            .sum::<usize>()
            .max(1);
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<PointInstance>() * instance_capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let point_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-sprite position/size and colour
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PointInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 2,
                    },
                ],
            },
        ];
        let point_alpha_pipeline = helpers::make_pipeline(
            &device,
            "point_alpha_pipeline",
            &points_pl,
            &points_shader,
            &point_buffers,
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );
        let point_additive_pipeline = helpers::make_pipeline(
            &device,
            "point_additive_pipeline",
            &points_pl,
            &points_shader,
            &point_buffers,
            format,
            Some(helpers::ADDITIVE),
            false,
        );

        let fog = hex_to_linear(FOG_COLOR);
        log::info!(
            "[gpu] uploaded {} meshes, {} textures, {} sprites",
            meshes.len(),
            scene.textures().len(),
            instance_capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            encode_srgb: !format.is_srgb(),
            clear_color: wgpu::Color {
                r: fog.x as f64,
                g: fog.y as f64,
                b: fog.z as f64,
                a: 1.0,
            },
            depth_view,
            frame_buffer,
            frame_bind_group,
            opaque_pipeline,
            blended_pipeline,
            meshes,
            object_buffer,
            object_stride,
            object_capacity,
            object_bind_groups,
            point_alpha_pipeline,
            point_additive_pipeline,
            quad_vb,
            instance_vb,
            instance_capacity,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = helpers::create_depth_texture(&self.device, width, height).1;
        log::debug!("[gpu] resized to {}x{}", width, height);
    }

    /// Re-apply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        lights: &LightRig,
    ) -> Result<(), wgpu::SurfaceError> {
        let world = scene.world_matrices();

        let frame_uniforms = FrameUniforms::new(camera, lights, self.encode_srgb);
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame_uniforms));

        let mut draws = mesh_draws(scene, &world);
        draws.truncate(self.object_capacity);
        let stride = self.object_stride as usize;
        let mut staging = vec![0u8; stride * draws.len()];
        for (i, d) in draws.iter().enumerate() {
            let bytes = bytemuck::bytes_of(&d.uniforms);
            staging[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
        }
        if !staging.is_empty() {
            self.queue.write_buffer(&self.object_buffer, 0, &staging);
        }

        let mut points = point_batches(scene, &world);
        if points.instances.len() > self.instance_capacity {
            points.instances.truncate(self.instance_capacity);
            let cap = self.instance_capacity as u32;
            points.alpha.end = points.alpha.end.min(cap);
            points.additive = points.additive.start.min(cap)..points.additive.end.min(cap);
        }
        if !points.instances.is_empty() {
            self.queue.write_buffer(
                &self.instance_vb,
                0,
                bytemuck::cast_slice(&points.instances),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);

            let white = self.object_bind_groups.len() - 1;
            let mut transparent = false;
            rpass.set_pipeline(&self.opaque_pipeline);
            for (i, d) in draws.iter().enumerate() {
                let Some(mesh) = self.meshes.get(d.geometry.index()) else {
                    continue;
                };
                if d.transparent && !transparent {
                    rpass.set_pipeline(&self.blended_pipeline);
                    transparent = true;
                }
                let group = d
                    .texture
                    .filter(|t| *t < white)
                    .and_then(|t| self.object_bind_groups.get(t))
                    .unwrap_or(&self.object_bind_groups[white]);
                let offset = (i * stride) as u32;
                rpass.set_bind_group(1, group, &[offset]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            if !points.alpha.is_empty() {
                rpass.set_pipeline(&self.point_alpha_pipeline);
                rpass.draw(0..6, points.alpha.clone());
            }
            if !points.additive.is_empty() {
                rpass.set_pipeline(&self.point_additive_pipeline);
                rpass.draw(0..6, points.additive.clone());
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
