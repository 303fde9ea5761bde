use crate::components::Side;
use crate::{Ball, Config, Events, Paddle};
use hecs::World;

/// Keep paddles inside the side walls.
///
/// This is a positional correction only: when a paddle edge crosses a wall
/// the paddle is snapped back to a fixed x inside the court and its velocity
/// is left alone. Stopping is the player's job (release the key).
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.pos.x + config.paddle_half_width > config.court_half_width {
            paddle.pos.x = config.paddle_snap_x;
        } else if paddle.pos.x - config.paddle_half_width < -config.court_half_width {
            paddle.pos.x = -config.paddle_snap_x;
        }
    }
}

/// Elastic reflection of the ball off the side walls: invert vel.x, no
/// positional correction. The ball may overlap a wall for one step; the
/// reversed velocity pulls it back on the next integration.
pub fn bounce_side_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x + config.ball_half_extent > config.court_half_width
            || ball.pos.x - config.ball_half_extent < -config.court_half_width
        {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        }
    }
}

/// Ball vs paddle contact planes.
///
/// Axis-aligned overlap on x, plus the ball having crossed the defending
/// plane on z. A hit sets vel.z to a fixed absolute return speed rather
/// than flipping its sign, so repeated overlap while already returning is
/// harmless and return volleys never accelerate.
pub fn paddle_return(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.pos.x))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_x) in &paddles {
            let x_overlap = ball.pos.x + config.ball_half_extent
                > paddle_x - config.paddle_half_width
                && ball.pos.x - config.ball_half_extent < paddle_x + config.paddle_half_width;
            if !x_overlap {
                continue;
            }

            match side {
                Side::Red => {
                    if ball.pos.z - config.ball_half_extent < config.paddle_plane(Side::Red) {
                        ball.vel.z = config.ball_return_speed_z;
                        events.ball_hit_paddle = true;
                    }
                }
                Side::Blue => {
                    if ball.pos.z + config.ball_half_extent > config.paddle_plane(Side::Blue) {
                        ball.vel.z = -config.ball_return_speed_z;
                        events.ball_hit_paddle = true;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec3;

    fn setup() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    #[test]
    fn test_paddle_snaps_back_from_right_wall() {
        let (mut world, config, _events) = setup();
        let entity = create_paddle(&mut world, Side::Red);
        {
            let mut paddle = world.get::<&mut Paddle>(entity).unwrap();
            paddle.pos.x = 2.36; // edge at 2.86, past the wall at 2.5
            paddle.vel.x = 3.0;
        }

        clamp_paddles(&mut world, &config);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.pos.x, 2.0, "snapped to the fixed recovery x");
        assert_eq!(paddle.vel.x, 3.0, "velocity untouched by the clamp");
    }

    #[test]
    fn test_paddle_snaps_back_from_left_wall() {
        let (mut world, config, _events) = setup();
        let entity = create_paddle(&mut world, Side::Blue);
        world.get::<&mut Paddle>(entity).unwrap().pos.x = -2.4;

        clamp_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(entity).unwrap().pos.x, -2.0);
    }

    #[test]
    fn test_paddle_inside_court_is_untouched() {
        let (mut world, config, _events) = setup();
        let entity = create_paddle(&mut world, Side::Red);
        world.get::<&mut Paddle>(entity).unwrap().pos.x = 1.9;

        clamp_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(entity).unwrap().pos.x, 1.9);
    }

    #[test]
    fn test_ball_reflects_off_right_wall() {
        let (mut world, config, mut events) = setup();
        let entity = create_ball(
            &mut world,
            Vec3::new(2.45, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 1.0),
        );

        bounce_side_walls(&mut world, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel.x, -2.0, "vel.x sign flipped exactly once");
        assert_eq!(ball.vel.z, 1.0, "vel.z unchanged");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_away_from_walls_is_unchanged() {
        let (mut world, config, mut events) = setup();
        let entity = create_ball(&mut world, Vec3::ZERO, Vec3::new(2.0, 0.0, 1.0));

        bounce_side_walls(&mut world, &config, &mut events);

        assert_eq!(world.get::<&Ball>(entity).unwrap().vel.x, 2.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_double_flip_when_still_overlapping() {
        // No positional correction, so a second call while the ball still
        // overlaps the wall flips vel.x again. One flip per step is
        // guaranteed by step() calling this exactly once.
        let (mut world, config, mut events) = setup();
        let entity = create_ball(
            &mut world,
            Vec3::new(2.45, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 1.0),
        );

        bounce_side_walls(&mut world, &config, &mut events);
        bounce_side_walls(&mut world, &config, &mut events);

        assert_eq!(world.get::<&Ball>(entity).unwrap().vel.x, 2.0);
    }

    #[test]
    fn test_red_paddle_returns_ball() {
        // Scenario: ball at (0.3, y, -2.35) moving -z, red paddle at x=0.
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, Side::Red);
        let entity = create_ball(
            &mut world,
            Vec3::new(0.3, 0.0, -2.35),
            Vec3::new(0.0, 0.0, -1.0),
        );

        paddle_return(&mut world, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel.z, 1.0, "red return sets vel.z to +1");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_blue_paddle_returns_ball() {
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, Side::Blue);
        let entity = create_ball(
            &mut world,
            Vec3::new(-0.2, 0.0, 2.25),
            Vec3::new(0.0, 0.0, 1.0),
        );

        paddle_return(&mut world, &config, &mut events);

        assert_eq!(world.get::<&Ball>(entity).unwrap().vel.z, -1.0);
    }

    #[test]
    fn test_miss_outside_paddle_x_extent() {
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, Side::Red); // at x = 0
        let entity = create_ball(
            &mut world,
            Vec3::new(0.7, 0.0, -2.35),
            Vec3::new(0.0, 0.0, -1.0),
        );

        paddle_return(&mut world, &config, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel.z, -1.0, "ball sails past the paddle");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_repeat_overlap_does_not_accelerate() {
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, Side::Red);
        let entity = create_ball(
            &mut world,
            Vec3::new(0.0, 0.0, -2.35),
            Vec3::new(0.0, 0.0, -1.0),
        );

        paddle_return(&mut world, &config, &mut events);
        paddle_return(&mut world, &config, &mut events);

        assert_eq!(
            world.get::<&Ball>(entity).unwrap().vel.z,
            1.0,
            "absolute set, not a sign flip: speed stays fixed"
        );
    }
}
