use crate::components::Side;

/// Game tuning parameters for the court, paddles, and ball
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 700.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PLAYER_X: f32 = 20.0;
    pub const AI_X: f32 = 780.0;
    pub const PADDLE_SPEED: f32 = 0.5; // px per ms

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 400.0;
    pub const BALL_START_Y: f32 = 350.0;
    pub const BALL_BASE_SPEED: f32 = 1.2;
    pub const BALL_SPEED_GAIN: f32 = 0.02; // Added to |xVel| on paddle hit
    pub const BALL_MAX_SPEED: f32 = 2.0;

    // Serve (vertical speed magnitude after a goal)
    pub const SERVE_Y_SPEED_MIN: f32 = 0.2;
    pub const SERVE_Y_SPEED_MAX: f32 = 0.8;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub game_width: f32,
    pub game_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_x: f32,
    pub ai_x: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_start_x: f32,
    pub ball_start_y: f32,
    pub ball_base_speed: f32,
    pub ball_speed_gain: f32,
    pub ball_max_speed: f32,
    pub serve_y_speed_min: f32,
    pub serve_y_speed_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_width: Params::GAME_WIDTH,
            game_height: Params::GAME_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_x: Params::PLAYER_X,
            ai_x: Params::AI_X,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_start_x: Params::BALL_START_X,
            ball_start_y: Params::BALL_START_Y,
            ball_base_speed: Params::BALL_BASE_SPEED,
            ball_speed_gain: Params::BALL_SPEED_GAIN,
            ball_max_speed: Params::BALL_MAX_SPEED,
            serve_y_speed_min: Params::SERVE_Y_SPEED_MIN,
            serve_y_speed_max: Params::SERVE_Y_SPEED_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle by side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.player_x,
            Side::Right => self.ai_x,
        }
    }

    /// Clamp paddle Y to court bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.game_height - half_height)
    }

    /// Collision threshold for the left (human) paddle
    pub fn left_bounce_plane(&self) -> f32 {
        self.player_x + self.paddle_width / 2.0 - self.ball_radius
    }

    /// Collision threshold for the right (model-driven) paddle
    pub fn right_bounce_plane(&self) -> f32 {
        self.ai_x - self.paddle_width / 2.0 + self.ball_radius
    }

    /// Center-court serve position
    pub fn ball_start(&self) -> glam::Vec2 {
        glam::Vec2::new(self.ball_start_x, self.ball_start_y)
    }
}
