use super::resources::{MarkerInstance, SceneInstance};
use super::Renderer;
use crate::camera::{Camera, CameraUniform};
use game_core::CameraView;
use glam::{Mat4, Quat, Vec3};
use wgpu::*;

/// Everything the render adapter needs for one frame
pub struct FrameScene {
    pub red_pos: Vec3,
    pub blue_pos: Vec3,
    pub ball_pos: Vec3,
    pub ball_spin: f32,
    pub camera_mode: CameraView,
    pub red_score: u8,
    pub blue_score: u8,
}

const RED_TINT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const BLUE_TINT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const BALL_TINT: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const SIDE_WALL_TINT: [f32; 4] = [0.0, 0.5, 0.7, 1.0];
const GOAL_WALL_TINT: [f32; 4] = [0.2, 0.2, 0.2, 1.0];

// Paddle boxes are centered between their contact plane and the goal side
const RED_PADDLE_Z: f32 = -2.4;
const BLUE_PADDLE_Z: f32 = 2.4;
const PADDLE_SCALE: Vec3 = Vec3::new(1.0, 0.5, 0.2);
const BALL_SCALE: Vec3 = Vec3::splat(0.2);
const WALL_Y: f32 = 0.125;

pub fn draw_frame(renderer: &mut Renderer, scene: &FrameScene) -> Result<(), SurfaceError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let marker_count = update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: 0.2,
                        g: 0.0,
                        b: 0.2,
                        a: 1.0,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                view: &renderer.depth.view,
                depth_ops: Some(Operations {
                    load: LoadOp::Clear(1.0),
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        // Court objects: cubes, instanced
        pass.set_pipeline(&renderer.scene_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
        pass.set_vertex_buffer(0, renderer.cube_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(renderer.cube_mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.scene_instances.slice(..));
        pass.draw_indexed(0..renderer.cube_mesh.index_count, 0, 0..7);

        // Score markers on top
        if marker_count > 0 {
            pass.set_pipeline(&renderer.overlay_pipeline);
            pass.set_vertex_buffer(0, renderer.quad_mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(renderer.quad_mesh.index_buffer.slice(..), IndexFormat::Uint16);
            pass.set_vertex_buffer(1, renderer.buffers.marker_instances.slice(..));
            pass.draw_indexed(0..renderer.quad_mesh.index_count, 0, 0..marker_count);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, scene: &FrameScene) -> u32 {
    // Camera follows the active view mode
    let aspect = renderer.size.0 as f32 / renderer.size.1 as f32;
    let camera = Camera::for_view(
        scene.camera_mode,
        scene.red_pos,
        scene.blue_pos,
        scene.ball_pos,
        aspect,
    );
    let camera_uniform = CameraUniform::from_camera(&camera);
    renderer.queue.write_buffer(
        &renderer.buffers.camera,
        0,
        bytemuck::cast_slice(&[camera_uniform]),
    );

    let instances = scene_instances(scene);
    renderer.queue.write_buffer(
        &renderer.buffers.scene_instances,
        0,
        bytemuck::cast_slice(&instances),
    );

    let markers = marker_instances(scene.red_score, scene.blue_score);
    if !markers.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.marker_instances,
            0,
            bytemuck::cast_slice(&markers),
        );
    }
    markers.len() as u32
}

fn scene_instances(scene: &FrameScene) -> [SceneInstance; 7] {
    let red_model = Mat4::from_scale_rotation_translation(
        PADDLE_SCALE,
        Quat::IDENTITY,
        scene.red_pos + Vec3::new(0.0, 0.0, RED_PADDLE_Z),
    );
    let blue_model = Mat4::from_scale_rotation_translation(
        PADDLE_SCALE,
        Quat::IDENTITY,
        scene.blue_pos + Vec3::new(0.0, 0.0, BLUE_PADDLE_Z),
    );
    // Continuous rotation about a diagonal axis, accumulated in the sim
    let ball_model = Mat4::from_scale_rotation_translation(
        BALL_SCALE,
        Quat::from_axis_angle(Vec3::ONE.normalize(), scene.ball_spin),
        scene.ball_pos,
    );

    let side_wall_scale = Vec3::new(0.1, 0.75, 6.0);
    let goal_wall_scale = Vec3::new(5.0, 0.75, 0.2);
    let wall = |scale: Vec3, pos: Vec3, tint: [f32; 4]| SceneInstance {
        model: Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, pos)
            .to_cols_array_2d(),
        tint,
    };

    [
        SceneInstance {
            model: red_model.to_cols_array_2d(),
            tint: RED_TINT,
        },
        SceneInstance {
            model: blue_model.to_cols_array_2d(),
            tint: BLUE_TINT,
        },
        SceneInstance {
            model: ball_model.to_cols_array_2d(),
            tint: BALL_TINT,
        },
        wall(
            side_wall_scale,
            Vec3::new(-2.5, WALL_Y, 0.0),
            SIDE_WALL_TINT,
        ),
        wall(side_wall_scale, Vec3::new(2.5, WALL_Y, 0.0), SIDE_WALL_TINT),
        wall(
            goal_wall_scale,
            Vec3::new(0.0, WALL_Y, -3.0),
            GOAL_WALL_TINT,
        ),
        wall(goal_wall_scale, Vec3::new(0.0, WALL_Y, 3.0), GOAL_WALL_TINT),
    ]
}

/// Two rows of small squares growing inward from the top screen corners,
/// one block per point.
fn marker_instances(red_score: u8, blue_score: u8) -> Vec<MarkerInstance> {
    let mut markers = Vec::with_capacity((red_score + blue_score) as usize);

    let mut x = -0.95;
    for _ in 0..red_score.min(5) {
        markers.push(MarkerInstance {
            transform: [x, 0.95, 0.05, 0.05],
            tint: RED_TINT,
        });
        x += 0.08;
    }

    let mut x = 0.95;
    for _ in 0..blue_score.min(5) {
        markers.push(MarkerInstance {
            transform: [x, 0.95, 0.05, 0.05],
            tint: BLUE_TINT,
        });
        x -= 0.08;
    }

    markers
}
