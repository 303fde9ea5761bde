use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::{CameraView, InputQueue};
use crate::Config;

/// Drain the input queue and turn intents into paddle velocities.
///
/// The camera view is an input here, not an independent concern: the chase
/// view behind the red paddle mirrors red's key-to-velocity sign.
pub fn apply_intents(
    world: &mut World,
    queue: &mut InputQueue,
    camera: CameraView,
    config: &Config,
) {
    for &(side, dir) in &queue.intents {
        for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
            if paddle.side == side {
                intent.dir = dir;
                paddle.vel.x = dir as f32 * config.paddle_speed * camera.control_sign(side);
            }
        }
    }
    queue.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::create_paddle;

    #[test]
    fn test_intent_sets_velocity_while_held() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Red);

        let mut queue = InputQueue::new();
        queue.push_intent(Side::Red, 1);
        apply_intents(&mut world, &mut queue, CameraView::BehindBlue, &config);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.vel.x, config.paddle_speed);
        assert!(queue.intents.is_empty(), "queue is drained");
    }

    #[test]
    fn test_zero_intent_stops_paddle() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Blue);

        let mut queue = InputQueue::new();
        queue.push_intent(Side::Blue, -1);
        apply_intents(&mut world, &mut queue, CameraView::BehindBlue, &config);
        queue.push_intent(Side::Blue, 0);
        apply_intents(&mut world, &mut queue, CameraView::BehindBlue, &config);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.vel.x, 0.0);
    }

    #[test]
    fn test_chase_red_view_mirrors_red_keys() {
        let mut world = World::new();
        let config = Config::new();
        let red = create_paddle(&mut world, Side::Red);
        let blue = create_paddle(&mut world, Side::Blue);

        let mut queue = InputQueue::new();
        queue.push_intent(Side::Red, 1);
        queue.push_intent(Side::Blue, 1);
        apply_intents(&mut world, &mut queue, CameraView::ChaseRed, &config);

        assert_eq!(world.get::<&Paddle>(red).unwrap().vel.x, -config.paddle_speed);
        assert_eq!(world.get::<&Paddle>(blue).unwrap().vel.x, config.paddle_speed);
    }
}
