use crate::{Ball, Config, Mode, Paddle, PaddleIntent, SteerTarget, Time};
use hecs::World;

/// Apply paddle movement: the human paddle follows its intent, the
/// model-driven paddle walks toward its steering target in autonomous mode.
/// Both are clamped into court bounds after moving, before collision tests.
pub fn move_paddles(world: &mut World, time: &Time, config: &Config, mode: Mode) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * config.paddle_speed * time.dt;
        }
    }

    if mode == Mode::Autonomous {
        for (_entity, (paddle, target)) in world.query_mut::<(&mut Paddle, &SteerTarget)>() {
            let max_step = config.paddle_speed * time.dt;
            paddle.y += (target.y - paddle.y).clamp(-max_step, max_step);
        }
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Move the ball one frame step. The step is scaled by the base speed
/// constant rather than the elapsed delta, so ball pace is tied to frame
/// cadence while paddle pace is tied to wall-clock time.
pub fn move_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * config.ball_base_speed;
    }
}
