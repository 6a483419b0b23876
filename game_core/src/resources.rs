/// Time resource for tracking simulation time, in milliseconds
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this frame
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 16.7, now: 0.0 }
    }
}

/// Which control scheme drives the right paddle this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Right paddle is inert; no samples are captured
    #[default]
    Manual,
    /// Right paddle is out of play and its hit test is waived, so rallies
    /// continue indefinitely while samples are captured
    Training,
    /// Right paddle steers toward the model's predicted target
    Autonomous,
}

/// Key state sampled once per frame, no debouncing
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
}

impl PlayerInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    /// -1 = up, 0 = stop (or both keys held), 1 = down
    pub fn dir(&self) -> i8 {
        (self.down as i8) - (self.up as i8)
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,  // Human player
    pub right: u32, // Model-driven opponent
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Random number generator for serves
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
