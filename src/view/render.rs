use wgpu::*;

use crate::controller::{CameraUniform, FrameData};
use crate::error::{AppError, Result};
use crate::model::{CullMode, Scene, Vertex};
use crate::view::GpuContext;

pub const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;

pub fn create_depth_texture(device: &Device, width: u32, height: u32) -> (Texture, TextureView) {
    let depth_texture = device.create_texture(&TextureDescriptor {
        label: Some("depth_texture"),
        size: Extent3d { width: width.max(1), height: height.max(1), depth_or_array_layers: 1 },
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let depth_view = depth_texture.create_view(&TextureViewDescriptor::default());
    (depth_texture, depth_view)
}

pub struct CameraResources {
    pub camera_buffer: Buffer,
    pub bind_group_layout: BindGroupLayout,
    pub camera_bind_group: BindGroup,
}

pub fn create_camera_resources(device: &Device) -> CameraResources {
    let camera_buffer = device.create_buffer(&BufferDescriptor {
        label: Some("camera_buffer"),
        size: std::mem::size_of::<CameraUniform>() as BufferAddress,
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("camera_bind_group_layout"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let camera_bind_group = device.create_bind_group(&BindGroupDescriptor {
        label: Some("camera_bind_group"),
        layout: &bind_group_layout,
        entries: &[BindGroupEntry { binding: 0, resource: camera_buffer.as_entire_binding() }],
    });

    CameraResources { camera_buffer, bind_group_layout, camera_bind_group }
}

fn create_colored_pipeline(
    device: &Device,
    label: &str,
    layout: &PipelineLayout,
    shader: &ShaderModule,
    format: TextureFormat,
    topology: PrimitiveTopology,
    cull_mode: Option<Face>,
) -> RenderPipeline {
    device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState { format, blend: Some(BlendState::REPLACE), write_mask: ColorWrites::ALL })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode,
            polygon_mode: PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: CompareFunction::Less,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
        }),
        multisample: MultisampleState { count: 1, mask: !0, alpha_to_coverage_enabled: false },
        multiview: None,
        cache: None,
    })
}

/// One triangle pipeline per cull mode, built up front so switching is free
pub struct CullPipelines {
    by_mode: [RenderPipeline; 3],
}

impl CullPipelines {
    pub fn get(&self, mode: CullMode) -> &RenderPipeline {
        &self.by_mode[mode.index()]
    }
}

pub struct PipelineResources {
    pub triangles: CullPipelines,
    pub lines: RenderPipeline,
}

pub fn create_pipelines(device: &Device, format: TextureFormat, bind_group_layout: &BindGroupLayout) -> PipelineResources {
    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("colored_shader"),
        source: ShaderSource::Wgsl(include_str!("shaders/colored.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("pipeline_layout"),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    let triangle = |mode: CullMode| {
        let label = format!("triangle_pipeline_{mode}");
        create_colored_pipeline(device, &label, &pipeline_layout, &shader, format, PrimitiveTopology::TriangleList, mode.face())
    };

    PipelineResources {
        triangles: CullPipelines { by_mode: CullMode::ALL.map(triangle) },
        lines: create_colored_pipeline(device, "line_pipeline", &pipeline_layout, &shader, format, PrimitiveTopology::LineList, None),
    }
}

/// egui output for one frame, ready to upload
pub struct OverlayFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

pub struct Renderer {
    pub clear_color: Color,
    camera: CameraResources,
    pipelines: PipelineResources,
    scene: Scene,
    depth_texture: Texture,
    depth_view: TextureView,
    egui_renderer: egui_wgpu::Renderer,
}

impl Renderer {
    pub fn new(gpu: &GpuContext, clear_color: Color) -> Self {
        let device = gpu.device.as_ref();
        let camera = create_camera_resources(device);
        let pipelines = create_pipelines(device, gpu.format, &camera.bind_group_layout);
        let (depth_texture, depth_view) = create_depth_texture(device, gpu.config.width, gpu.config.height);
        let egui_renderer = egui_wgpu::Renderer::new(device, gpu.format, egui_wgpu::RendererOptions::default());

        Self {
            clear_color,
            camera,
            pipelines,
            scene: Scene::new(device),
            depth_texture,
            depth_view,
            egui_renderer,
        }
    }

    /// Recreate the depth buffer to match the surface
    pub fn resize(&mut self, device: &Device, width: u32, height: u32) {
        let (depth_texture, depth_view) = create_depth_texture(device, width, height);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;
    }

    pub fn draw_frame(&mut self, gpu: &GpuContext, frame_data: &FrameData, overlay: OverlayFrame) -> Result<()> {
        let frame = match gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                gpu.reconfigure();
                return Ok(());
            }
            Err(SurfaceError::OutOfMemory) => return Err(AppError::SurfaceOutOfMemory),
            Err(e) => {
                tracing::warn!("skipping frame: {e}");
                return Ok(());
            }
        };

        let device = gpu.device.as_ref();
        let queue = gpu.queue.as_ref();

        queue.write_buffer(
            &self.camera.camera_buffer,
            0,
            bytemuck::bytes_of(&CameraUniform::from_matrix(frame_data.view_proj)),
        );

        let view = frame.texture.create_view(&TextureViewDescriptor::default());
        let mut encoder = device.create_command_encoder(&CommandEncoderDescriptor { label: Some("encoder") });

        {
            let mut rp = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations { load: LoadOp::Clear(self.clear_color), store: StoreOp::Store },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(Operations { load: LoadOp::Clear(1.0), store: StoreOp::Store }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rp.set_bind_group(0, &self.camera.camera_bind_group, &[]);

            rp.set_pipeline(self.pipelines.triangles.get(frame_data.cull_mode));
            rp.set_vertex_buffer(0, self.scene.triangle.vertex_buffer.slice(..));
            rp.draw(0..self.scene.triangle.vertex_count, 0..1);

            rp.set_pipeline(&self.pipelines.lines);
            rp.set_vertex_buffer(0, self.scene.indicator.vertex_buffer.slice(..));
            rp.draw(0..self.scene.indicator.vertex_count, 0..1);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: overlay.pixels_per_point,
        };

        for (id, image_delta) in &overlay.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }
        let mut command_buffers =
            self.egui_renderer
                .update_buffers(device, queue, &mut encoder, &overlay.primitives, &screen_descriptor);

        {
            let egui_pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("egui_render_pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations { load: LoadOp::Load, store: StoreOp::Store },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut egui_pass.forget_lifetime(), &overlay.primitives, &screen_descriptor);
        }

        for id in &overlay.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        command_buffers.push(encoder.finish());
        queue.submit(command_buffers);
        frame.present();
        Ok(())
    }
}
