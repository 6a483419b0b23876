//! Prediction-driven steering for the opponent paddle.

use game_core::{Config, GameSnapshot};

use crate::codec;
use crate::trainer::Model;

/// Shorter than the recording interval, so steering updates more often
/// than samples are logged.
pub const DEFAULT_PREDICT_INTERVAL_MS: f32 = 200.0;

/// Queries the model on a fixed cadence and holds the latest decoded
/// steering target between predictions. The paddle chases the held
/// target at its normal speed every frame, which low-pass-filters the
/// raw predictions instead of teleporting to them.
#[derive(Debug, Clone)]
pub struct PredictionController {
    interval_ms: f32,
    acc: f32,
    target_y: f32,
}

impl PredictionController {
    pub fn new(interval_ms: f32, initial_target: f32) -> Self {
        Self {
            interval_ms,
            acc: 0.0,
            target_y: initial_target,
        }
    }

    /// Advance the prediction clock by `dt_ms` and return the current
    /// steering target. The accumulator keeps fractional carry-over like
    /// the recorder's.
    pub fn tick(
        &mut self,
        dt_ms: f32,
        snap: &GameSnapshot,
        model: &Model,
        config: &Config,
    ) -> f32 {
        self.acc += dt_ms;
        if self.acc >= self.interval_ms {
            while self.acc >= self.interval_ms {
                self.acc -= self.interval_ms;
            }
            let features = codec::steering_features(snap, config);
            self.target_y = codec::decode(model.predict(&features), config);
        }
        self.target_y
    }

    pub fn target_y(&self) -> f32 {
        self.target_y
    }
}
