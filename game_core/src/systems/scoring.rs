use crate::components::Side;
use crate::{Ball, Config, Events, MatchState, Score};
use hecs::World;

/// Check whether the ball crossed a goal line this step.
///
/// Crossing z = +3.0 is a point for red, z = -3.0 a point for blue. At
/// normal speeds at most one can fire in a single step.
pub fn check_goals(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    match_state: &mut MatchState,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.z + config.ball_half_extent > config.goal_line_z {
            award_point(Side::Red, ball, config, score, match_state, events);
        } else if ball.pos.z - config.ball_half_extent < -config.goal_line_z {
            award_point(Side::Blue, ball, config, score, match_state, events);
        }
    }
}

/// Score a point and reset the round.
///
/// The ball is always recentered, even if this is (erroneously) invoked
/// after the match has ended. Reaching the win score freezes the ball and
/// marks the match over; there is no path back.
pub fn award_point(
    side: Side,
    ball: &mut Ball,
    config: &Config,
    score: &mut Score,
    match_state: &mut MatchState,
    events: &mut Events,
) {
    score.increment(side);
    match side {
        Side::Red => events.red_scored = true,
        Side::Blue => events.blue_scored = true,
    }

    if score.has_winner(config.win_score).is_some() {
        match_state.game_over = true;
        ball.vel.x = 0.0;
        ball.vel.z = 0.0;
    }

    ball.recenter();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec3;

    fn setup() -> (World, Config, Score, MatchState, Events) {
        (
            World::new(),
            Config::new(),
            Score::new(),
            MatchState::new(),
            Events::new(),
        )
    }

    #[test]
    fn test_red_scores_past_far_goal_line() {
        let (mut world, config, mut score, mut match_state, mut events) = setup();
        // z + 0.1 > 3.0 fires at z = 2.97
        let entity = create_ball(
            &mut world,
            Vec3::new(0.0, 0.0, 2.97),
            Vec3::new(0.0, 0.0, 1.0),
        );

        check_goals(&mut world, &config, &mut score, &mut match_state, &mut events);

        assert_eq!(score.red, 1, "far goal line is red's point");
        assert_eq!(score.blue, 0);
        assert!(events.red_scored);
        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos.x, 0.0);
        assert_eq!(ball.pos.z, 0.0);
    }

    #[test]
    fn test_blue_scores_past_near_goal_line() {
        let (mut world, config, mut score, mut match_state, mut events) = setup();
        let entity = create_ball(
            &mut world,
            Vec3::new(0.5, 0.0, -2.95),
            Vec3::new(0.0, 0.0, -1.0),
        );

        check_goals(&mut world, &config, &mut score, &mut match_state, &mut events);

        assert_eq!(score.blue, 1);
        assert_eq!(score.red, 0);
        assert!(events.blue_scored);
        assert_eq!(world.get::<&Ball>(entity).unwrap().pos.z, 0.0);
    }

    #[test]
    fn test_no_goal_inside_court() {
        let (mut world, config, mut score, mut match_state, mut events) = setup();
        create_ball(&mut world, Vec3::new(0.0, 0.0, 2.8), Vec3::new(0.0, 0.0, 1.0));

        check_goals(&mut world, &config, &mut score, &mut match_state, &mut events);

        assert_eq!(score.red, 0);
        assert_eq!(score.blue, 0);
        assert!(!match_state.game_over);
    }

    #[test]
    fn test_fifth_point_ends_match_and_freezes_ball() {
        let (mut world, config, mut score, mut match_state, mut events) = setup();
        score.red = 4;
        let entity = create_ball(
            &mut world,
            Vec3::new(0.0, 0.0, 3.1),
            Vec3::new(2.0, 0.0, 1.0),
        );

        check_goals(&mut world, &config, &mut score, &mut match_state, &mut events);

        assert_eq!(score.red, 5);
        assert!(match_state.game_over);
        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel.x, 0.0);
        assert_eq!(ball.vel.z, 0.0);
        assert_eq!(ball.pos.z, 0.0, "ball left motionless at center");
    }

    #[test]
    fn test_award_after_game_over_still_recenters() {
        // Flagged ambiguity: award_point after the match ends still bumps
        // the counter and recenters. Preserved from the source.
        let (_world, config, mut score, mut match_state, mut events) = setup();
        score.blue = 5;
        match_state.game_over = true;
        let mut ball = Ball::new(Vec3::new(1.0, 0.0, -3.2), Vec3::ZERO);

        award_point(
            Side::Blue,
            &mut ball,
            &config,
            &mut score,
            &mut match_state,
            &mut events,
        );

        assert_eq!(score.blue, 6);
        assert_eq!(ball.pos.x, 0.0);
        assert_eq!(ball.pos.z, 0.0);
        assert!(match_state.game_over);
    }
}
