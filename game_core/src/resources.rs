use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub red: u8,
    pub blue: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Red => self.red += 1,
            Side::Blue => self.blue += 1,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.red >= win_score {
            Some(Side::Red)
        } else if self.blue >= win_score {
            Some(Side::Blue)
        } else {
            None
        }
    }
}

/// Round state. `game_over` is terminal: nothing clears it short of a
/// process restart.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchState {
    pub game_over: bool,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The five fixed viewpoints, cycled forward with wrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraView {
    #[default]
    BehindBlue,
    TopDown,
    ChaseRed,
    ChaseBlue,
    FollowBall,
}

impl CameraView {
    pub fn cycle(self) -> Self {
        match self {
            CameraView::BehindBlue => CameraView::TopDown,
            CameraView::TopDown => CameraView::ChaseRed,
            CameraView::ChaseRed => CameraView::ChaseBlue,
            CameraView::ChaseBlue => CameraView::FollowBall,
            CameraView::FollowBall => CameraView::BehindBlue,
        }
    }

    /// Sign multiplier applied to a side's key-to-velocity mapping.
    ///
    /// The chase view behind the red paddle looks back down the court, so
    /// its left/right keys are mirrored while that view is active.
    pub fn control_sign(self, side: Side) -> f32 {
        match (self, side) {
            (CameraView::ChaseRed, Side::Red) => -1.0,
            _ => 1.0,
        }
    }
}

/// Per-frame paddle intents pushed by the platform layer
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub intents: Vec<(Side, i8)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_intent(&mut self, side: Side, dir: i8) {
        self.intents.push((side, dir));
    }

    pub fn clear(&mut self) {
        self.intents.clear();
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub red_scored: bool,
    pub blue_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.red_scored = false;
        self.blue_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_is_per_side() {
        let mut score = Score::new();
        score.increment(Side::Red);
        assert_eq!(score.red, 1);
        assert_eq!(score.blue, 0);
        score.increment(Side::Blue);
        assert_eq!(score.red, 1);
        assert_eq!(score.blue, 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment(Side::Blue);
        }
        assert_eq!(score.has_winner(5), Some(Side::Blue));
        assert_eq!(score.has_winner(6), None);
    }

    #[test]
    fn test_camera_view_cycle_wraps() {
        let mut view = CameraView::BehindBlue;
        for _ in 0..5 {
            view = view.cycle();
        }
        assert_eq!(view, CameraView::BehindBlue, "five cycles return to start");
    }

    #[test]
    fn test_chase_red_inverts_red_controls_only() {
        assert_eq!(CameraView::ChaseRed.control_sign(Side::Red), -1.0);
        assert_eq!(CameraView::ChaseRed.control_sign(Side::Blue), 1.0);
        assert_eq!(CameraView::TopDown.control_sign(Side::Red), 1.0);
        assert_eq!(CameraView::FollowBall.control_sign(Side::Red), 1.0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.red_scored = true;
        events.ball_hit_wall = true;
        events.clear();
        assert!(!events.red_scored);
        assert!(!events.blue_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_input_queue_push_and_clear() {
        let mut queue = InputQueue::new();
        queue.push_intent(Side::Red, -1);
        queue.push_intent(Side::Blue, 1);
        assert_eq!(queue.intents.len(), 2);
        queue.clear();
        assert!(queue.intents.is_empty());
    }
}
