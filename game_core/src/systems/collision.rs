use crate::math::lerp;
use crate::{Ball, Config, Events, Mode, Paddle, Side};
use hecs::World;

/// Resolve ball bounces against paddles and walls. Tested in priority
/// order: right paddle, left paddle, top/bottom wall. First match wins, at
/// most one bounce per frame.
///
/// In training mode the right paddle's hit test is waived: the ball always
/// returns from the right plane and keeps its vertical velocity, so rallies
/// continue while play data is captured on the left side.
pub fn resolve_bounce(world: &mut World, config: &Config, mode: Mode, events: &mut Events) {
    let mut left_y = None;
    let mut right_y = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left_y = Some(paddle.y),
            Side::Right => right_y = Some(paddle.y),
        }
    }

    let reach = config.paddle_height / 2.0 + config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let right_hit = ball.vel.x > 0.0
            && ball.pos.x >= config.right_bounce_plane()
            && (mode == Mode::Training
                || right_y.is_some_and(|y| (ball.pos.y - y).abs() < reach));
        let left_hit = ball.vel.x < 0.0
            && ball.pos.x <= config.left_bounce_plane()
            && left_y.is_some_and(|y| (ball.pos.y - y).abs() < reach);

        if right_hit {
            ball.vel.x = (-(ball.vel.x + config.ball_speed_gain))
                .clamp(-config.ball_max_speed, config.ball_max_speed);
            if mode != Mode::Training {
                if let Some(y) = right_y {
                    ball.vel.y = return_angle(ball.pos.y, y, config);
                }
            }
            events.ball_hit_paddle = true;
        } else if left_hit {
            ball.vel.x = (-(ball.vel.x - config.ball_speed_gain))
                .clamp(-config.ball_max_speed, config.ball_max_speed);
            if let Some(y) = left_y {
                ball.vel.y = return_angle(ball.pos.y, y, config);
            }
            events.ball_hit_paddle = true;
        } else if (ball.pos.y <= config.ball_radius && ball.vel.y < 0.0)
            || (ball.pos.y >= config.game_height - config.ball_radius && ball.vel.y > 0.0)
        {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Return angle keyed by where on the paddle the ball struck: the top edge
/// returns at `+base`, the center flat, the bottom edge at `-base`.
fn return_angle(ball_y: f32, paddle_y: f32, config: &Config) -> f32 {
    let top = paddle_y - config.paddle_height / 2.0;
    let t = ((ball_y - top) / config.paddle_height).clamp(0.0, 1.0);
    lerp(config.ball_base_speed, -config.ball_base_speed, t)
}
