use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec3;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::error::RenderError;
use crate::geometry::{Shape, ShapeDescriptor};
use crate::material::{hex_to_rgb, MaterialDescriptor, MaterialKind};
use crate::mesh::tessellate;
use crate::overlay::OverlayFrame;
use crate::scene::{InstanceId, RenderableInstance};
use crate::traits::{RenderEngine, SceneView};
use crate::types::{CameraUniform, InstanceUniform, ShadingModel, Vertex};

type Result<T> = std::result::Result<T, RenderError>;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub const AMBIENT_COLOR: u32 = 0x404040;
pub const AMBIENT_INTENSITY: f32 = 5.0;
pub const LIGHT_POSITION: Vec3 = Vec3::new(-6.0, 0.0, 10.0);
pub const LIGHT_INTENSITY: f32 = 500.0;

/// Vertex and index buffers for one tessellated shape
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

/// Uniform buffer and bind group for one scene-graph entry
struct GpuInstance {
    shape: Shape,
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Forward renderer on wgpu with an egui overlay pass
pub struct ShowcaseRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    instance_layout: wgpu::BindGroupLayout,
    meshes: HashMap<Shape, GpuMesh>,
    instances: HashMap<InstanceId, GpuInstance>,
    egui_renderer: egui_wgpu::Renderer,
    overlay: Option<OverlayFrame>,
}

impl ShowcaseRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = Self::request_device(&adapter).await?;

        let config = Self::create_surface_config(&surface, &adapter, size.width, size.height)?;
        surface.configure(&device, &config);

        let depth_view = Self::create_depth_view(&device, config.width, config.height);

        let uniform_layout_entry = wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[uniform_layout_entry],
        });
        let instance_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Instance Bind Group Layout"),
            entries: &[uniform_layout_entry],
        });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline =
            Self::create_render_pipeline(&device, &camera_layout, &instance_layout, config.format);

        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!("renderer initialized at {}x{}", config.width, config.height);

        Ok(Self {
            device,
            queue,
            surface,
            config,
            depth_view,
            pipeline,
            camera_buffer,
            camera_bind_group,
            instance_layout,
            meshes: HashMap::new(),
            instances: HashMap::new(),
            egui_renderer,
            overlay: None,
        })
    }

    /// Queue the settings panel for the next drawn frame
    pub fn queue_overlay(&mut self, frame: OverlayFrame) {
        self.overlay = Some(frame);
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        Ok(instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await?)
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        Ok(adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Showcase Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await?)
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<wgpu::SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;

        Ok(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_render_pipeline(
        device: &wgpu::Device,
        camera_layout: &wgpu::BindGroupLayout,
        instance_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Showcase Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("showcase.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Showcase Pipeline Layout"),
            bind_group_layouts: &[camera_layout, instance_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Showcase Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // double-sided; the fragment shader flips back-facing normals
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    fn upload_mesh(&mut self, descriptor: &ShapeDescriptor) {
        if self.meshes.contains_key(&descriptor.shape) {
            return;
        }

        let mesh = tessellate(&descriptor.primitive);
        let vertex_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded {} mesh: {} vertices, {} triangles",
            descriptor.shape,
            mesh.vertices.len(),
            mesh.triangle_count()
        );

        self.meshes.insert(
            descriptor.shape,
            GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: mesh.indices.len() as u32,
            },
        );
    }

    fn camera_uniform(view: &SceneView<'_>) -> CameraUniform {
        let ambient = Vec3::from_array(hex_to_rgb(AMBIENT_COLOR)) * AMBIENT_INTENSITY;
        CameraUniform {
            view_proj: view.view_projection.to_cols_array_2d(),
            eye: view.eye.extend(1.0).to_array(),
            light: LIGHT_POSITION.extend(LIGHT_INTENSITY).to_array(),
            ambient: ambient.extend(1.0).to_array(),
        }
    }

    fn instance_uniform(instance: &RenderableInstance, material: &MaterialDescriptor) -> InstanceUniform {
        let (shading_model, pbr, phong) = match material.kind {
            MaterialKind::Lambert => (ShadingModel::Lambert, [0.0; 4], [0.0; 4]),
            MaterialKind::Standard {
                roughness,
                metalness,
            } => (ShadingModel::Standard, [roughness, metalness, 0.0, 0.0], [0.0; 4]),
            MaterialKind::Physical {
                roughness,
                metalness,
                clearcoat,
                clearcoat_roughness,
            } => (
                ShadingModel::Physical,
                [roughness, metalness, clearcoat, clearcoat_roughness],
                [0.0; 4],
            ),
            MaterialKind::Phong { shininess } => (ShadingModel::Phong, [0.0; 4], [shininess, 0.0, 0.0, 0.0]),
        };

        InstanceUniform {
            model: instance.model_matrix().to_cols_array_2d(),
            color: material.color,
            shading_model: shading_model as u32,
            pbr,
            phong,
        }
    }

    fn draw_overlay(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) -> Vec<wgpu::CommandBuffer> {
        let Some(overlay) = self.overlay.take() else {
            return Vec::new();
        };

        for (id, image_delta) in &overlay.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: overlay.pixels_per_point,
        };

        let command_buffers = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            encoder,
            &overlay.primitives,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &overlay.primitives, &screen_descriptor);
        }

        for id in &overlay.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        command_buffers
    }
}

impl RenderEngine for ShowcaseRenderer {
    type Error = RenderError;

    fn add_instance(&mut self, instance: &RenderableInstance, shape: &ShapeDescriptor) {
        self.upload_mesh(shape);

        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: std::mem::size_of::<InstanceUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Instance Bind Group"),
            layout: &self.instance_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        self.instances.insert(
            instance.id,
            GpuInstance {
                shape: instance.shape,
                buffer,
                bind_group,
            },
        );
    }

    fn remove_instance(&mut self, id: InstanceId) {
        self.instances.remove(&id);
    }

    fn draw(&mut self, view: &SceneView<'_>) -> Result<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // skip this frame; the next one renders against the new configuration
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[Self::camera_uniform(view)]),
        );
        for instance in view.instances {
            if let Some(gpu) = self.instances.get(&instance.id) {
                let uniform = Self::instance_uniform(instance, view.materials.get(instance.material));
                self.queue
                    .write_buffer(&gpu.buffer, 0, bytemuck::cast_slice(&[uniform]));
            }
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

            for instance in view.instances {
                let Some(gpu) = self.instances.get(&instance.id) else {
                    continue;
                };
                let Some(mesh) = self.meshes.get(&gpu.shape) else {
                    continue;
                };
                render_pass.set_bind_group(1, &gpu.bind_group, &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        let overlay_commands = self.draw_overlay(&mut encoder, &frame_view);

        self.queue
            .submit(overlay_commands.into_iter().chain(std::iter::once(encoder.finish())));
        frame.present();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = Self::create_depth_view(&self.device, width, height);
    }
}
