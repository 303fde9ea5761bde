use crate::camera::{Camera, CameraUniform};
use game_core::CameraView;
use glam::Vec3;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Scene instance data (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneInstance {
    pub model: [[f32; 4]; 4],
    pub tint: [f32; 4],
}

/// Screen-space marker instance (score blocks)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerInstance {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],
}

/// Scene objects: two paddles, the ball, four boundary walls
pub const SCENE_INSTANCE_CAPACITY: u64 = 7;
/// At most five markers per side
pub const MARKER_INSTANCE_CAPACITY: u64 = 10;

pub struct GameBuffers {
    pub camera: Buffer,
    pub scene_instances: Buffer,
    pub marker_instances: Buffer,
}

pub fn create_buffers(device: &Device) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(&Camera::for_view(
        CameraView::default(),
        Vec3::ZERO,
        Vec3::ZERO,
        Vec3::ZERO,
        1.0,
    ));

    let camera = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let scene_instances = device.create_buffer(&BufferDescriptor {
        label: Some("Scene Instance Buffer"),
        size: SCENE_INSTANCE_CAPACITY * std::mem::size_of::<SceneInstance>() as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let marker_instances = device.create_buffer(&BufferDescriptor {
        label: Some("Marker Instance Buffer"),
        size: MARKER_INSTANCE_CAPACITY * std::mem::size_of::<MarkerInstance>() as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera,
        scene_instances,
        marker_instances,
    }
}

#[allow(dead_code)]
pub struct DepthTexture {
    pub texture: Texture,
    pub view: TextureView,
}

pub const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;

pub fn create_depth_texture(device: &Device, config: &SurfaceConfiguration) -> DepthTexture {
    let texture = device.create_texture(&TextureDescriptor {
        label: Some("Depth Texture"),
        size: Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&TextureViewDescriptor::default());

    DepthTexture { texture, view }
}
