use crate::{Ball, Paddle, Params, Time};
use hecs::World;

/// Explicit Euler integration for paddles and ball. No sub-stepping: the
/// step always advances by the fixed nominal timestep.
pub fn integrate(world: &mut World, time: &Time) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos += paddle.vel * time.dt;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
        ball.spin += Params::BALL_SPIN_RATE * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::{create_ball, create_paddle};
    use glam::Vec3;

    #[test]
    fn test_paddle_integration() {
        let mut world = World::new();
        let entity = create_paddle(&mut world, Side::Red);
        world.get::<&mut Paddle>(entity).unwrap().vel.x = 3.0;

        integrate(&mut world, &Time::new(0.02, 0.0));

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert!((paddle.pos.x - 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_ball_integration_and_spin() {
        let mut world = World::new();
        let entity = create_ball(&mut world, Vec3::ZERO, Vec3::new(2.0, 0.0, 1.0));

        integrate(&mut world, &Time::new(0.02, 0.0));

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!((ball.pos.x - 0.04).abs() < 1e-6);
        assert!((ball.pos.z - 0.02).abs() < 1e-6);
        assert!((ball.spin - 0.04).abs() < 1e-6, "spin accumulates at 2 rad/s");
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let mut world = World::new();
        let entity = create_ball(&mut world, Vec3::new(1.0, 0.0, 1.0), Vec3::new(2.0, 0.0, 1.0));

        integrate(&mut world, &Time::new(0.0, 0.0));

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, Vec3::new(1.0, 0.0, 1.0));
    }
}
