use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::FreeLookCamera;
use crate::core::clock::FrameInfo;
use crate::core::gpu_context::GpuContext;
use crate::lighting::LightingUniform;
use crate::scene::{self, CUBE_VERTICES};
use crate::texture::{Fallback, Texture, DIFFUSE_MAP, SPECULAR_MAP};
use crate::types::{CameraUniform, InstanceRaw, Vertex};

/// Draws the lit cubes and the lamp markers into the window surface
pub struct SceneRenderer {
    gpu: GpuContext,
    depth_view: wgpu::TextureView,
    lit_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    cube_instance_buffer: wgpu::Buffer,
    lamp_instance_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    lighting_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    material_bind_group: wgpu::BindGroup,
    lighting: LightingUniform,
    clear_color: wgpu::Color,
    num_cubes: u32,
    num_lamps: u32,
}

impl SceneRenderer {
    pub async fn new(
        window: Arc<Window>,
        camera: &FreeLookCamera,
        assets: &Path,
        clear_color: [f32; 3],
    ) -> Result<Self> {
        let gpu = GpuContext::new(window).await?;
        let device = gpu.device();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let cube_instances = scene::cube_instances(0.0);
        let cube_instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Instance Buffer"),
            contents: bytemuck::cast_slice(&cube_instances),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let lamp_instances = scene::lamp_instances();
        let lamp_instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lamp Instance Buffer"),
            contents: bytemuck::cast_slice(&lamp_instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::from_camera(camera, gpu.aspect_ratio())]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let lighting = LightingUniform::new(camera);
        let lighting_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lighting Buffer"),
            contents: bytemuck::cast_slice(&[lighting]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let diffuse = Texture::load(device, gpu.queue(), assets, DIFFUSE_MAP, Fallback::Checker);
        let specular = Texture::load(device, gpu.queue(), assets, SPECULAR_MAP, Fallback::Grey);

        let frame_layout = Self::create_frame_layout(device);
        let material_layout = Self::create_material_layout(device);

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lighting_buffer.as_entire_binding(),
                },
            ],
        });

        let material_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Material Bind Group"),
            layout: &material_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&diffuse.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&specular.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&specular.sampler),
                },
            ],
        });

        let format = gpu.config().format;

        let lit_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Lit Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/lit.wgsl").into()),
        });
        let lit_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Lit Pipeline Layout"),
            bind_group_layouts: &[&frame_layout, &material_layout],
            push_constant_ranges: &[],
        });
        let lit_pipeline = Self::create_pipeline(device, "Lit Pipeline", &lit_layout, &lit_shader, format);

        let lamp_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Lamp Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/lamp.wgsl").into()),
        });
        let lamp_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Lamp Pipeline Layout"),
            bind_group_layouts: &[&frame_layout],
            push_constant_ranges: &[],
        });
        let lamp_pipeline =
            Self::create_pipeline(device, "Lamp Pipeline", &lamp_layout, &lamp_shader, format);

        let depth_view = Texture::create_depth(device, gpu.config());

        log::info!(
            "Scene uploaded: {} cubes, {} lamps, {} vertices each",
            cube_instances.len(),
            lamp_instances.len(),
            CUBE_VERTICES.len()
        );

        Ok(Self {
            depth_view,
            lit_pipeline,
            lamp_pipeline,
            vertex_buffer,
            cube_instance_buffer,
            lamp_instance_buffer,
            camera_buffer,
            lighting_buffer,
            frame_bind_group,
            material_bind_group,
            lighting,
            clear_color: wgpu::Color {
                r: clear_color[0] as f64,
                g: clear_color[1] as f64,
                b: clear_color[2] as f64,
                a: 1.0,
            },
            num_cubes: cube_instances.len() as u32,
            num_lamps: lamp_instances.len() as u32,
            gpu,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.gpu.resize(width, height) {
            self.depth_view = Texture::create_depth(self.gpu.device(), self.gpu.config());
        }
    }

    /// Reconfigure after `SurfaceError::Lost` / `Outdated`
    pub fn reconfigure(&self) {
        self.gpu.reconfigure();
    }

    pub fn render(&mut self, camera: &FreeLookCamera, frame: &FrameInfo) -> Result<(), wgpu::SurfaceError> {
        let queue = self.gpu.queue();

        let camera_uniform = CameraUniform::from_camera(camera, self.gpu.aspect_ratio());
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[camera_uniform]));

        self.lighting.follow_camera(camera);
        queue.write_buffer(&self.lighting_buffer, 0, bytemuck::cast_slice(&[self.lighting]));

        let cube_instances = scene::cube_instances(frame.time);
        queue.write_buffer(&self.cube_instance_buffer, 0, bytemuck::cast_slice(&cube_instances));

        let output = self.gpu.surface().get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
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

            let vertex_count = CUBE_VERTICES.len() as u32;

            render_pass.set_pipeline(&self.lit_pipeline);
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
            render_pass.set_bind_group(1, &self.material_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.cube_instance_buffer.slice(..));
            render_pass.draw(0..vertex_count, 0..self.num_cubes);

            render_pass.set_pipeline(&self.lamp_pipeline);
            render_pass.set_vertex_buffer(1, self.lamp_instance_buffer.slice(..));
            render_pass.draw(0..vertex_count, 0..self.num_lamps);
        }

        queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn create_frame_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        })
    }

    fn create_material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                multisampled: false,
                view_dimension: wgpu::TextureViewDimension::D2,
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };

        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Bind Group Layout"),
            entries: &[
                texture_entry(0),
                sampler_entry(1),
                texture_entry(2),
                sampler_entry(3),
            ],
        })
    }

    fn create_pipeline(
        device: &wgpu::Device,
        label: &str,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout(), InstanceRaw::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: Texture::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }
}
