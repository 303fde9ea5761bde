//! Camera for the 3D court
//!
//! Five fixed view/projection parameter sets, selected by the simulation's
//! `CameraView` mode.

use game_core::CameraView;
use glam::{Mat4, Vec3};

pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Build the view for the active mode from current object positions.
    ///
    /// The chase views anchor behind their paddle and look along the court;
    /// the ball view hovers above and to the side of the ball.
    pub fn for_view(
        mode: CameraView,
        red_pos: Vec3,
        blue_pos: Vec3,
        ball_pos: Vec3,
        aspect: f32,
    ) -> Self {
        let up = Vec3::Y;
        let view = match mode {
            CameraView::BehindBlue => {
                Mat4::look_at_rh(Vec3::new(0.0, 1.5, 4.0), Vec3::ZERO, up)
            }
            CameraView::TopDown => Mat4::look_at_rh(Vec3::new(2.0, 3.5, 0.0), Vec3::ZERO, up),
            CameraView::ChaseRed => Mat4::look_at_rh(
                Vec3::new(red_pos.x, red_pos.y + 1.5, red_pos.z - 4.0),
                red_pos,
                up,
            ),
            CameraView::ChaseBlue => Mat4::look_at_rh(
                Vec3::new(blue_pos.x, blue_pos.y + 1.5, blue_pos.z + 4.0),
                blue_pos,
                up,
            ),
            CameraView::FollowBall => Mat4::look_at_rh(
                Vec3::new(ball_pos.x + 2.0, ball_pos.y + 3.5, ball_pos.z),
                ball_pos,
                up,
            ),
        };

        let projection = Mat4::perspective_rh(90.0_f32.to_radians(), aspect, 0.1, 100.0);

        Self { view, projection }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // pad to 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
