pub mod components;
pub mod config;
pub mod math;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one frame.
///
/// Order is fixed: paddle motion (clamped), ball motion, bounce
/// resolution, goal detection. Non-positive or NaN deltas are scheduler
/// anomalies and produce a no-op frame.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    mode: Mode,
    input: PlayerInput,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    if !(time.dt > 0.0) {
        return;
    }

    apply_input(world, input);
    move_paddles(world, time, config, mode);
    move_ball(world, config);
    resolve_bounce(world, config, mode, events);
    check_goals(world, config, score, events, rng);
}

/// Spawn the human (left) paddle at center court
pub fn create_player_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    let y = config.game_height / 2.0;
    world.spawn((Paddle::new(Side::Left, y), PaddleIntent::new()))
}

/// Spawn the model-driven (right) paddle at center court
pub fn create_ai_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    let y = config.game_height / 2.0;
    world.spawn((Paddle::new(Side::Right, y), SteerTarget { y }))
}

/// Spawn the ball at center court, moving toward the right paddle
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let vel = glam::Vec2::new(config.ball_base_speed, 0.0);
    world.spawn((Ball::new(config.ball_start(), vel),))
}

/// Point the model-driven paddle's steering target at `y`
pub fn steer_ai(world: &mut World, y: f32) {
    for (_entity, target) in world.query_mut::<&mut SteerTarget>() {
        target.y = y;
    }
}

/// Read-only view of the frame's state, consumed by renderers and the
/// learning pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_x_vel: f32,
    pub ball_y_vel: f32,
    pub player_y: f32,
    pub ai_y: f32,
    pub score_left: u32,
    pub score_right: u32,
}

/// Capture the current state. Returns `None` until the ball and both
/// paddles have been spawned.
pub fn snapshot(world: &World, score: &Score) -> Option<GameSnapshot> {
    let mut ball = None;
    for (_entity, b) in world.query::<&Ball>().iter() {
        ball = Some(*b);
    }
    let ball = ball?;

    let mut player_y = None;
    let mut ai_y = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => player_y = Some(paddle.y),
            Side::Right => ai_y = Some(paddle.y),
        }
    }

    Some(GameSnapshot {
        ball_x: ball.pos.x,
        ball_y: ball.pos.y,
        ball_x_vel: ball.vel.x,
        ball_y_vel: ball.vel.y,
        player_y: player_y?,
        ai_y: ai_y?,
        score_left: score.left,
        score_right: score.right,
    })
}
