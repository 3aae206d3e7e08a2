use anyhow::{anyhow, Result};
use bytemuck::Zeroable;
use log::info;
use std::collections::HashMap;
use std::num::NonZeroU64;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::Camera;
use crate::scene::{DrawItem, Light, Scene};
use crate::texture::TextureHandle;

/// Dynamic-offset stride for per-draw uniforms.
const LOCALS_STRIDE: u64 = 256;
const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Global uniforms shared by every draw in a frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    ambient: [f32; 4],
    sun_dir: [f32; 4],
    sun_color: [f32; 4],
    point_pos: [f32; 4],
    point_color: [f32; 4],
    params: [f32; 4],
}

/// Per-draw uniforms, written at 256-byte offsets.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Locals {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    flags: [f32; 4],
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

/// Forward renderer over the scene's draw list: one pipeline, a depth
/// buffer, Lambert shading from the scene lights, and per-material textures
/// that start as a white placeholder until their image resolves.
pub struct Renderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    pipeline: wgpu::RenderPipeline,
    depth_view: wgpu::TextureView,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    locals_layout: wgpu::BindGroupLayout,
    locals_buffer: wgpu::Buffer,
    locals_bind_group: wgpu::BindGroup,
    locals_capacity: usize,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    placeholder_bind_group: wgpu::BindGroup,
    texture_bind_groups: HashMap<u64, wgpu::BindGroup>,
    mesh_buffers: HashMap<usize, MeshBuffers>,
    scene_revision: Option<u64>,
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
    show_overlay: bool,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, show_overlay: bool) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| anyhow!("no suitable GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await?;

        let config = Self::create_surface_config(&surface, &adapter, size);
        surface.configure(&device, &config);

        let depth_view = Self::create_depth_view(&device, size);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Layout"),
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

        let locals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Locals Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(LOCALS_STRIDE),
                },
                count: None,
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Texture Layout"),
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
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&globals_layout, &locals_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: 32,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 0,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 12,
                            shader_location: 1,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 24,
                            shader_location: 2,
                        },
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Surfaces are double sided, like the grapher's plot.
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
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
        });

        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Globals Buffer"),
            contents: bytemuck::cast_slice(&[Globals::zeroed()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let locals_capacity = 64;
        let (locals_buffer, locals_bind_group) =
            Self::create_locals(&device, &locals_layout, locals_capacity);

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Base Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let placeholder_view = Self::create_rgba_texture(&device, &queue, 1, 1, &[255; 4]);
        let placeholder_bind_group =
            Self::create_texture_bind_group(&device, &texture_layout, &placeholder_view, &sampler);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            config.format,
            egui_wgpu::RendererOptions::default(),
        );

        info!("renderer initialized at {}x{}", size.width, size.height);

        Ok(Self {
            device,
            queue,
            surface,
            config,
            size,
            pipeline,
            depth_view,
            globals_buffer,
            globals_bind_group,
            locals_layout,
            locals_buffer,
            locals_bind_group,
            locals_capacity,
            texture_layout,
            sampler,
            placeholder_bind_group,
            texture_bind_groups: HashMap::new(),
            mesh_buffers: HashMap::new(),
            scene_revision: None,
            egui_renderer,
            egui_state,
            egui_ctx,
            show_overlay,
        })
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_depth_view(
        device: &wgpu::Device,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
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

    fn create_locals(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        capacity: usize,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Locals Buffer"),
            size: LOCALS_STRIDE * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Locals Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: NonZeroU64::new(LOCALS_STRIDE),
                }),
            }],
        });
        (buffer, bind_group)
    }

    fn create_rgba_texture(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Material Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_texture_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Texture Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = Self::create_depth_view(&self.device, new_size);
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.size
    }

    /// Drop and rebuild geometry buffers when the scene's meshes changed;
    /// removed meshes release their GPU buffers here.
    fn refresh_meshes(&mut self, scene: &Scene, draws: &[DrawItem]) {
        if self.scene_revision != Some(scene.revision()) {
            self.mesh_buffers.clear();
            self.scene_revision = Some(scene.revision());
        }
        for draw in draws {
            let key = draw.mesh.index();
            if self.mesh_buffers.contains_key(&key) {
                continue;
            }
            let Some(mesh) = scene.mesh(draw.mesh) else {
                continue;
            };
            let vertex = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Mesh Vertex Buffer"),
                    contents: bytemuck::cast_slice(&mesh.vertex_data()),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            let index = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Mesh Index Buffer"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
            self.mesh_buffers.insert(
                key,
                MeshBuffers {
                    vertex,
                    index,
                    index_count: mesh.indices.len() as u32,
                },
            );
        }
    }

    /// Upload any textures whose background load has resolved since the
    /// last frame. Pending and failed handles keep the white placeholder.
    fn refresh_textures(&mut self, draws: &[DrawItem]) {
        for draw in draws {
            let Some(handle) = &draw.material.texture else {
                continue;
            };
            if self.texture_bind_groups.contains_key(&handle.id()) || !handle.is_loaded() {
                continue;
            }
            if let Some(view) = handle.with_image(|img| {
                Self::create_rgba_texture(&self.device, &self.queue, img.width, img.height, &img.rgba)
            }) {
                let bind_group = Self::create_texture_bind_group(
                    &self.device,
                    &self.texture_layout,
                    &view,
                    &self.sampler,
                );
                self.texture_bind_groups.insert(handle.id(), bind_group);
            }
        }
    }

    fn texture_bind_group(&self, texture: Option<&TextureHandle>) -> &wgpu::BindGroup {
        texture
            .and_then(|t| self.texture_bind_groups.get(&t.id()))
            .unwrap_or(&self.placeholder_bind_group)
    }

    fn write_globals(&self, scene: &Scene, camera: &Camera) {
        let mut globals = Globals::zeroed();
        globals.view_proj = camera.view_projection().to_cols_array_2d();
        for light in &scene.lights {
            match light {
                Light::Ambient { color, intensity } => {
                    globals.ambient = [
                        color[0] * intensity,
                        color[1] * intensity,
                        color[2] * intensity,
                        0.0,
                    ];
                }
                Light::Directional {
                    direction,
                    color,
                    intensity,
                } => {
                    globals.sun_dir = [direction.x, direction.y, direction.z, *intensity];
                    globals.sun_color = [color[0], color[1], color[2], 0.0];
                }
                Light::Point {
                    position,
                    color,
                    intensity,
                    distance,
                    decay,
                } => {
                    globals.point_pos = [position.x, position.y, position.z, *intensity];
                    globals.point_color = [color[0], color[1], color[2], *distance];
                    globals.params[0] = *decay;
                }
            }
        }
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::cast_slice(&[globals]));
    }

    fn write_locals(&mut self, draws: &[DrawItem]) {
        if draws.len() > self.locals_capacity {
            self.locals_capacity = draws.len().next_power_of_two();
            let (buffer, bind_group) =
                Self::create_locals(&self.device, &self.locals_layout, self.locals_capacity);
            self.locals_buffer = buffer;
            self.locals_bind_group = bind_group;
        }

        let mut bytes = vec![0u8; LOCALS_STRIDE as usize * draws.len().max(1)];
        for (i, draw) in draws.iter().enumerate() {
            let textured = draw
                .material
                .texture
                .as_ref()
                .is_some_and(|t| self.texture_bind_groups.contains_key(&t.id()));
            let locals = Locals {
                model: draw.model.to_cols_array_2d(),
                color: [
                    draw.material.base_color[0],
                    draw.material.base_color[1],
                    draw.material.base_color[2],
                    1.0,
                ],
                flags: [
                    if textured { 1.0 } else { 0.0 },
                    if draw.material.normal_shading { 1.0 } else { 0.0 },
                    0.0,
                    0.0,
                ],
            };
            let offset = i * LOCALS_STRIDE as usize;
            bytes[offset..offset + std::mem::size_of::<Locals>()]
                .copy_from_slice(bytemuck::bytes_of(&locals));
        }
        self.queue.write_buffer(&self.locals_buffer, 0, &bytes);
    }

    /// Render one frame; `overlay` draws the egui UI when enabled.
    pub fn render(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        window: &Window,
        mut overlay: impl FnMut(&egui::Context),
    ) -> Result<()> {
        let draws = scene.draw_list();
        self.refresh_meshes(scene, &draws);
        self.refresh_textures(&draws);
        self.write_globals(scene, camera);
        self.write_locals(&draws);

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
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
                label: Some("Scene Encoder"),
            });

        {
            let [r, g, b] = scene.background;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
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
            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);

            for (i, draw) in draws.iter().enumerate() {
                let Some(buffers) = self.mesh_buffers.get(&draw.mesh.index()) else {
                    continue;
                };
                let offset = (i as u64 * LOCALS_STRIDE) as u32;
                render_pass.set_bind_group(1, &self.locals_bind_group, &[offset]);
                render_pass.set_bind_group(
                    2,
                    self.texture_bind_group(draw.material.texture.as_ref()),
                    &[],
                );
                render_pass.set_vertex_buffer(0, buffers.vertex.slice(..));
                render_pass.set_index_buffer(buffers.index.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..buffers.index_count, 0, 0..1);
            }
        }

        if self.show_overlay {
            self.render_overlay(window, &view, &mut encoder, &mut overlay);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn render_overlay(
        &mut self,
        window: &Window,
        view: &wgpu::TextureView,
        encoder: &mut wgpu::CommandEncoder,
        overlay: &mut impl FnMut(&egui::Context),
    ) {
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| overlay(ctx));

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.size.width, self.size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
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
            });

            // SAFETY: The render pass lifetime is actually tied to the encoder,
            // but egui-wgpu requires 'static. This is safe because we drop the
            // render pass before using the encoder again.
            let render_pass_static = unsafe {
                std::mem::transmute::<&mut wgpu::RenderPass<'_>, &mut wgpu::RenderPass<'static>>(
                    &mut render_pass,
                )
            };

            self.egui_renderer
                .render(render_pass_static, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }
}
