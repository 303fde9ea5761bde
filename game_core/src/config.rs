use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_half_width: f32,
    pub goal_line_z: f32,
    pub paddle_plane_z: f32,
    pub paddle_half_width: f32,
    pub paddle_half_height: f32,
    pub paddle_speed: f32,
    pub paddle_snap_x: f32,
    pub ball_half_extent: f32,
    pub ball_return_speed_z: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_half_width: Params::COURT_HALF_WIDTH,
            goal_line_z: Params::GOAL_LINE_Z,
            paddle_plane_z: Params::PADDLE_PLANE_Z,
            paddle_half_width: Params::PADDLE_HALF_WIDTH,
            paddle_half_height: Params::PADDLE_HALF_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_snap_x: Params::PADDLE_SNAP_X,
            ball_half_extent: Params::BALL_HALF_EXTENT,
            ball_return_speed_z: Params::BALL_RETURN_SPEED_Z,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Z position of the contact plane each side defends
    pub fn paddle_plane(&self, side: Side) -> f32 {
        match side {
            Side::Red => -self.paddle_plane_z,
            Side::Blue => self.paddle_plane_z,
        }
    }

    /// Z position of the goal line behind each side's paddle
    pub fn goal_line(&self, side: Side) -> f32 {
        match side {
            Side::Red => -self.goal_line_z,
            Side::Blue => self.goal_line_z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_planes() {
        let config = Config::new();
        assert_eq!(config.paddle_plane(Side::Red), -2.3, "Red contact plane");
        assert_eq!(config.paddle_plane(Side::Blue), 2.3, "Blue contact plane");
    }

    #[test]
    fn test_config_goal_lines() {
        let config = Config::new();
        assert_eq!(config.goal_line(Side::Red), -3.0);
        assert_eq!(config.goal_line(Side::Blue), 3.0);
    }
}
