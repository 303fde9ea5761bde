use glam::Vec3;

/// Which end of the court a paddle defends.
/// Red defends the z = -2.3 plane, blue defends z = +2.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Red,
    Blue,
}

/// Paddle component - a player's paddle, sliding along x
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec3,
    pub vel: Vec3,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
        }
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Accumulated rotation angle, consumed by the renderer
    pub spin: f32,
}

impl Ball {
    pub fn new(pos: Vec3, vel: Vec3) -> Self {
        Self {
            pos,
            vel,
            spin: 0.0,
        }
    }

    /// Serve from center with the fixed opening velocity
    pub fn serve() -> Self {
        Self::new(
            Vec3::ZERO,
            Vec3::new(crate::Params::BALL_SERVE_VX, 0.0, crate::Params::BALL_SERVE_VZ),
        )
    }

    /// Recenter after a point: x/z back to 0, y and velocity untouched
    pub fn recenter(&mut self) {
        self.pos.x = 0.0;
        self.pos.z = 0.0;
    }
}

/// Movement intent for a paddle, derived each frame from the held-key set
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = left, 0 = stop, 1 = right
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_recenter_leaves_y_and_velocity() {
        let mut ball = Ball::new(Vec3::new(1.2, 0.3, -2.8), Vec3::new(-2.0, 0.0, 1.0));
        ball.recenter();
        assert_eq!(ball.pos.x, 0.0);
        assert_eq!(ball.pos.z, 0.0);
        assert_eq!(ball.pos.y, 0.3, "y is untouched by a recenter");
        assert_eq!(ball.vel, Vec3::new(-2.0, 0.0, 1.0));
    }

    #[test]
    fn test_serve_velocity() {
        let ball = Ball::serve();
        assert_eq!(ball.pos, Vec3::ZERO);
        assert_eq!(ball.vel, Vec3::new(2.0, 0.0, 1.0));
    }
}
