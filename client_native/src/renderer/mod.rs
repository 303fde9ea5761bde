pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::mesh::{create_cube, create_quad, Mesh};
use draw::FrameScene;
use resources::{DepthTexture, GameBuffers};
use std::sync::Arc;
use wgpu::*;
use winit::window::Window;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),

    // Pipelines
    pub scene_pipeline: RenderPipeline,
    pub overlay_pipeline: RenderPipeline,

    // Bind groups
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub depth: DepthTexture,
    pub cube_mesh: Mesh,
    pub quad_mesh: Mesh,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, String> {
        let ctx = init::init_wgpu(window).await?;

        let buffers = resources::create_buffers(&ctx.device);
        let depth = resources::create_depth_texture(&ctx.device, &ctx.config);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let (cube_vertices, cube_indices) = create_cube();
        let cube_mesh = Mesh::new(&ctx.device, &ctx.queue, &cube_vertices, &cube_indices);
        let (quad_vertices, quad_indices) = create_quad();
        let quad_mesh = Mesh::new(&ctx.device, &ctx.queue, &quad_vertices, &quad_indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            scene_pipeline: pipes.scene_pipeline,
            overlay_pipeline: pipes.overlay_pipeline,
            camera_bind_group,
            buffers,
            depth,
            cube_mesh,
            quad_mesh,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth = resources::create_depth_texture(&self.device, &self.surface_config);
    }

    /// Reconfigure after a lost surface
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, scene: &FrameScene) -> Result<(), SurfaceError> {
        draw::draw_frame(self, scene)
    }
}
