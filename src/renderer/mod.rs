//! Forward renderer for the folding scene.
//!
//! One pass per frame, drawn in three layers: opaque atom spheres (depth
//! write on), bond lines, then the translucent backbone tube (depth test
//! only, both faces).

pub mod lighting;
pub mod mesh;
pub(crate) mod pipeline_util;

use wgpu::util::DeviceExt;

use self::lighting::LightingUniform;
use self::mesh::{LineVertex, MeshInstance};
use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::render_context::RenderContext;
use crate::options::Options;
use crate::scene::{MeshVertex, Scene};

/// GPU state for drawing a [`Scene`].
pub struct SceneRenderer {
    camera_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    sphere_pipeline: wgpu::RenderPipeline,
    tube_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    sphere_vertices: wgpu::Buffer,
    sphere_indices: wgpu::Buffer,
    sphere_index_count: u32,
    sphere_instances: DynamicBuffer<MeshInstance>,
    tube_vertices: DynamicBuffer<MeshVertex>,
    tube_indices: DynamicBuffer<u32>,
    tube_instance: DynamicBuffer<MeshInstance>,
    line_vertices: DynamicBuffer<LineVertex>,
    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,
    emissive: f32,
}

impl SceneRenderer {
    /// Create pipelines and buffers for the context's surface format.
    pub fn new(context: &RenderContext, options: &Options) -> Self {
        let device = &context.device;

        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Uniform"),
                contents: bytemuck::cast_slice(&[CameraUniform::default()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let lighting_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Uniform"),
                contents: bytemuck::cast_slice(&[LightingUniform::from_options(
                    &options.lighting,
                )]),
                usage: wgpu::BufferUsages::UNIFORM,
            });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Frame Bind Group Layout"),
                entries: &[
                    pipeline_util::uniform_entry(0),
                    pipeline_util::uniform_entry(1),
                ],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &bind_group_layout,
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
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../assets/shaders/mesh.wgsl").into(),
            ),
        });
        let line_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../assets/shaders/line.wgsl").into(),
            ),
        });

        let format = context.format();
        let sphere_pipeline = create_pipeline(
            device,
            &PipelineSpec {
                label: "Sphere Pipeline",
                layout: &layout,
                shader: &mesh_shader,
                buffers: &[mesh::mesh_vertex_layout(), mesh::mesh_instance_layout()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                format,
                translucent: false,
            },
        );
        let tube_pipeline = create_pipeline(
            device,
            &PipelineSpec {
                label: "Tube Pipeline",
                layout: &layout,
                shader: &mesh_shader,
                buffers: &[mesh::mesh_vertex_layout(), mesh::mesh_instance_layout()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                format,
                translucent: true,
            },
        );
        let line_pipeline = create_pipeline(
            device,
            &PipelineSpec {
                label: "Line Pipeline",
                layout: &layout,
                shader: &line_shader,
                buffers: &[mesh::line_vertex_layout()],
                topology: wgpu::PrimitiveTopology::LineList,
                format,
                translucent: true,
            },
        );

        let (sphere_mesh, sphere_mesh_indices) =
            mesh::unit_sphere(options.geometry.sphere_segments);
        let sphere_vertices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sphere Vertices"),
                contents: bytemuck::cast_slice(&sphere_mesh),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let sphere_indices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sphere Indices"),
                contents: bytemuck::cast_slice(&sphere_mesh_indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let vertex = wgpu::BufferUsages::VERTEX;
        let [r, g, b] = options.lighting.background.to_linear();
        log::debug!("scene renderer ready ({format:?})");

        Self {
            camera_buffer,
            bind_group,
            sphere_pipeline,
            tube_pipeline,
            line_pipeline,
            sphere_vertices,
            sphere_indices,
            sphere_index_count: sphere_mesh_indices.len() as u32,
            sphere_instances: DynamicBuffer::new(
                device,
                "Sphere Instances",
                64,
                vertex,
            ),
            tube_vertices: DynamicBuffer::new(
                device,
                "Tube Vertices",
                1024,
                vertex,
            ),
            tube_indices: DynamicBuffer::new(
                device,
                "Tube Indices",
                4096,
                wgpu::BufferUsages::INDEX,
            ),
            tube_instance: DynamicBuffer::new(
                device,
                "Tube Instance",
                1,
                vertex,
            ),
            line_vertices: DynamicBuffer::new(
                device,
                "Line Vertices",
                64,
                vertex,
            ),
            depth_view: pipeline_util::create_depth_view(device, context.size()),
            clear_color: wgpu::Color {
                r: f64::from(r),
                g: f64::from(g),
                b: f64::from(b),
                a: 1.0,
            },
            emissive: options.lighting.emissive,
        }
    }

    /// Recreate the depth buffer after the surface was resized.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth_view =
            pipeline_util::create_depth_view(&context.device, context.size());
    }

    /// Upload the scene's primitives.
    pub fn upload_scene(&mut self, context: &RenderContext, scene: &Scene) {
        let (device, queue) = (&context.device, &context.queue);

        let instances: Vec<MeshInstance> = scene
            .spheres()
            .iter()
            .map(|s| MeshInstance::sphere(s, self.emissive))
            .collect();
        let _ = self.sphere_instances.write(device, queue, &instances);

        let _ = self
            .line_vertices
            .write(device, queue, &mesh::line_vertices(scene.lines()));

        if let Some(tube) = scene.tube() {
            let _ = self.tube_vertices.write(device, queue, &tube.vertices);
            let _ = self.tube_indices.write(device, queue, &tube.indices);
            let _ = self
                .tube_instance
                .write(device, queue, &[MeshInstance::tube(tube)]);
        } else {
            self.tube_vertices.clear();
            self.tube_indices.clear();
            self.tube_instance.clear();
        }
    }

    /// Upload the camera matrices.
    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::from_camera(camera)]),
        );
    }

    /// Draw one frame to the surface.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture could not be
    /// acquired.
    pub fn render(&self, context: &RenderContext) -> Result<(), wgpu::SurfaceError> {
        let frame = context.acquire()?;
        let mut encoder =
            context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Scene Encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
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
                ..Default::default()
            });
            pass.set_bind_group(0, &self.bind_group, &[]);

            if !self.sphere_instances.is_empty() {
                pass.set_pipeline(&self.sphere_pipeline);
                pass.set_vertex_buffer(0, self.sphere_vertices.slice(..));
                pass.set_vertex_buffer(1, self.sphere_instances.slice());
                pass.set_index_buffer(
                    self.sphere_indices.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(
                    0..self.sphere_index_count,
                    0,
                    0..self.sphere_instances.count(),
                );
            }

            if !self.line_vertices.is_empty() {
                pass.set_pipeline(&self.line_pipeline);
                pass.set_vertex_buffer(0, self.line_vertices.slice());
                pass.draw(0..self.line_vertices.count(), 0..1);
            }

            if !self.tube_indices.is_empty() {
                pass.set_pipeline(&self.tube_pipeline);
                pass.set_vertex_buffer(0, self.tube_vertices.slice());
                pass.set_vertex_buffer(1, self.tube_instance.slice());
                pass.set_index_buffer(
                    self.tube_indices.slice(),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(0..self.tube_indices.count(), 0, 0..1);
            }
        }

        context.present(encoder, frame);
        Ok(())
    }
}

struct PipelineSpec<'a> {
    label: &'a str,
    layout: &'a wgpu::PipelineLayout,
    shader: &'a wgpu::ShaderModule,
    buffers: &'a [wgpu::VertexBufferLayout<'static>],
    topology: wgpu::PrimitiveTopology,
    format: wgpu::TextureFormat,
    translucent: bool,
}

fn create_pipeline(
    device: &wgpu::Device,
    spec: &PipelineSpec<'_>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(spec.layout),
        vertex: wgpu::VertexState {
            module: spec.shader,
            entry_point: Some("vs_main"),
            buffers: spec.buffers,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: spec.shader,
            entry_point: Some("fs_main"),
            targets: &pipeline_util::color_target(spec.format, spec.translucent),
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: spec.topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(pipeline_util::depth_stencil_state(!spec.translucent)),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
