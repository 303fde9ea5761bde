pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the deterministic court simulation by one fixed step.
///
/// Ordering matters at boundary frames: intents, integration, paddle
/// clamp, side-wall bounce, goal-line test, then the paddle contact
/// test. The goal test runs before the paddle test
/// so a ball that is simultaneously in scoring range and paddle range
/// scores, with the reset overriding the contact's velocity change.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    match_state: &mut MatchState,
    events: &mut Events,
    input_queue: &mut InputQueue,
    camera: CameraView,
) {
    events.clear();

    // 1. Ingest intents (apply to paddle velocities)
    apply_intents(world, input_queue, camera, config);

    // 2. Integrate paddles and ball
    integrate(world, time);

    // 3. Keep paddles inside the side walls
    clamp_paddles(world, config);

    // 4. Bounce the ball off the side walls
    bounce_side_walls(world, config, events);

    // 5. Goal lines (scoring, round reset)
    check_goals(world, config, score, match_state, events);

    // 6. Paddle contact planes
    paddle_return(world, config, events);

    time.now += time.dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side) -> hecs::Entity {
    world.spawn((Paddle::new(side), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec3, vel: glam::Vec3) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
