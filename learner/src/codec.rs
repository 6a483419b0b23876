//! Pure mappings between game state and the model's normalized feature
//! space.
//!
//! Positions normalize by the court dimensions. Velocity ranges are
//! symmetric about zero, so they are offset by the speed cap before
//! scaling, landing in [0, 1] like everything else.

use game_core::{Config, GameSnapshot};

use crate::dataset::Sample;

/// Width of the model's input vector
pub const FEATURE_COUNT: usize = 4;

/// Snapshot → labeled sample, everything normalized to [0, 1]
pub fn encode(snap: &GameSnapshot, config: &Config) -> Sample {
    Sample {
        ball_x: snap.ball_x / config.game_width,
        ball_y: snap.ball_y / config.game_height,
        ball_x_vel: normalize_vel(snap.ball_x_vel, config),
        ball_y_vel: normalize_vel(snap.ball_y_vel, config),
        player_y: snap.player_y / config.game_height,
    }
}

/// Inverse of the `player_y` normalization: scalar prediction → paddle Y
pub fn decode(prediction: f32, config: &Config) -> f32 {
    prediction * config.game_height
}

/// Split a sample log into parallel feature and target arrays, insertion
/// order preserved
pub fn to_arrays(samples: &[Sample]) -> (Vec<[f32; FEATURE_COUNT]>, Vec<f32>) {
    let mut features = Vec::with_capacity(samples.len());
    let mut targets = Vec::with_capacity(samples.len());
    for s in samples {
        features.push([s.ball_x, s.ball_y, s.ball_x_vel, s.ball_y_vel]);
        targets.push(s.player_y);
    }
    (features, targets)
}

/// Feature vector for steering the right paddle. The model is fitted on
/// left-paddle play, so the ball's X coordinate is mirrored across the
/// court before prediction.
pub fn steering_features(snap: &GameSnapshot, config: &Config) -> [f32; FEATURE_COUNT] {
    [
        (config.game_width - snap.ball_x) / config.game_width,
        snap.ball_y / config.game_height,
        normalize_vel(snap.ball_x_vel, config),
        normalize_vel(snap.ball_y_vel, config),
    ]
}

fn normalize_vel(vel: f32, config: &Config) -> f32 {
    (vel + config.ball_max_speed) / (2.0 * config.ball_max_speed)
}
