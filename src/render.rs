use crate::constants::{CLEAR_COLOR, LINE_COLOR};
use folio_core::{line_vertices, node_instances, Camera, NetworkGraph, SectionNode};
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod pipelines;
use pipelines::{create_network_pipelines, Globals, NetworkPipelines};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    network: NetworkPipelines,
    node_buffer: wgpu::Buffer,
    node_count: u32,
    line_buffer: wgpu::Buffer,
    line_vertex_count: u32,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    view_proj: Mat4,
    cam_right: Vec3,
    cam_up: Vec3,
    opacity: f32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        graph: &NetworkGraph,
        sections: &[SectionNode],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
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
                    // Default limits on web avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
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

        let network = create_network_pipelines(&device, format);

        // Geometry is static; fading is a uniform.
        let nodes = node_instances(graph, sections, 1.0);
        let node_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("network_nodes"),
            contents: bytemuck::cast_slice(&nodes),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let lines = line_vertices(graph, 1.0);
        let line_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("network_lines"),
            contents: bytemuck::cast_slice(&lines),
            usage: wgpu::BufferUsages::VERTEX,
        });
        log::info!(
            "[gpu] {:?} surface {}x{}, {} nodes, {} link vertices",
            format,
            width,
            height,
            nodes.len(),
            lines.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            network,
            node_buffer,
            node_count: nodes.len() as u32,
            line_buffer,
            line_vertex_count: lines.len() as u32,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            view_proj: Mat4::IDENTITY,
            cam_right: Vec3::X,
            cam_up: Vec3::Y,
            opacity: 1.0,
        })
    }

    pub fn set_camera(&mut self, camera: &Camera) {
        self.view_proj = camera.view_projection();
        let forward = (camera.target - camera.eye).normalize_or_zero();
        self.cam_right = forward.cross(camera.up).try_normalize().unwrap_or(Vec3::X);
        self.cam_up = self.cam_right.cross(forward);
    }

    #[inline]
    pub fn set_network_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let globals = Globals {
            view_proj: self.view_proj.to_cols_array_2d(),
            cam_right: self.cam_right.extend(0.0).to_array(),
            cam_up: self.cam_up.extend(0.0).to_array(),
            line_color: LINE_COLOR,
            fade: [self.opacity, 0.0, 0.0, 0.0],
        };
        self.queue.write_buffer(
            &self.network.uniform_buffer,
            0,
            bytemuck::bytes_of(&globals),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("network_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if self.opacity > 0.0 {
                rpass.set_bind_group(0, &self.network.bind_group, &[]);
                rpass.set_pipeline(&self.network.lines);
                rpass.set_vertex_buffer(0, self.line_buffer.slice(..));
                rpass.draw(0..self.line_vertex_count, 0..1);
                rpass.set_pipeline(&self.network.nodes);
                rpass.set_vertex_buffer(0, self.node_buffer.slice(..));
                rpass.draw(0..4, 0..self.node_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
