use glam::Vec2;

use crate::config::Config;
use crate::resources::GameRng;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Movement intent for the input-driven paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Steering goal for the model-driven paddle. The movement system walks the
/// paddle toward this Y at paddle speed rather than snapping to it.
#[derive(Debug, Clone, Copy)]
pub struct SteerTarget {
    pub y: f32,
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset to center court, serving toward `toward` at base speed with a
    /// randomized vertical component.
    pub fn serve(&mut self, toward: Side, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = config.ball_start();

        let x_vel = match toward {
            Side::Left => -config.ball_base_speed,
            Side::Right => config.ball_base_speed,
        };
        let y_mag = rng
            .0
            .gen_range(config.serve_y_speed_min..=config.serve_y_speed_max);
        let y_vel = if rng.0.gen_bool(0.5) { y_mag } else { -y_mag };

        self.vel = Vec2::new(x_vel, y_vel);
    }
}
