/// Game tuning parameters for the 3D court
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court. Side walls sit on x, goal lines on z.
    pub const COURT_HALF_WIDTH: f32 = 2.5;
    pub const GOAL_LINE_Z: f32 = 3.0;
    pub const PADDLE_PLANE_Z: f32 = 2.3;

    // Paddle
    pub const PADDLE_HALF_WIDTH: f32 = 0.5;
    pub const PADDLE_HALF_HEIGHT: f32 = 0.25;
    pub const PADDLE_SPEED: f32 = 3.0;
    // Where a paddle is snapped back to after running into a side wall.
    // Deliberately a fixed spot inside the court, not the exact contact point.
    pub const PADDLE_SNAP_X: f32 = 2.0;

    // Ball
    pub const BALL_HALF_EXTENT: f32 = 0.1;
    pub const BALL_SERVE_VX: f32 = 2.0;
    pub const BALL_SERVE_VZ: f32 = 1.0;
    pub const BALL_RETURN_SPEED_Z: f32 = 1.0;
    pub const BALL_SPIN_RATE: f32 = 2.0;

    // Score
    pub const WIN_SCORE: u8 = 5;

    // Physics: fixed nominal timestep, not measured from wall time
    pub const FIXED_DT: f32 = 0.02;
}
