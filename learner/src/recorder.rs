//! Periodic capture of game state into the training log.

use game_core::{Config, GameSnapshot};

use crate::codec;
use crate::dataset::SampleLog;

pub const DEFAULT_SAMPLE_INTERVAL_MS: f32 = 500.0;

/// Accumulates elapsed time and appends one encoded sample per full
/// interval. The accumulator subtracts the interval instead of zeroing,
/// so fractional remainders carry over and the long-run sampling rate
/// stays exact under frame-rate jitter.
#[derive(Debug, Clone)]
pub struct Recorder {
    interval_ms: f32,
    acc: f32,
}

impl Recorder {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            acc: 0.0,
        }
    }

    /// Advance the sampling clock by `dt_ms` and append any due samples.
    /// Returns how many samples were appended this frame.
    pub fn tick(
        &mut self,
        dt_ms: f32,
        snap: &GameSnapshot,
        config: &Config,
        log: &mut SampleLog,
    ) -> usize {
        self.acc += dt_ms;
        let mut appended = 0;
        while self.acc >= self.interval_ms {
            self.acc -= self.interval_ms;
            log.push(codec::encode(snap, config));
            appended += 1;
        }
        appended
    }

    /// Drop any partial interval, for when recording restarts
    pub fn reset(&mut self) {
        self.acc = 0.0;
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            ball_x: 400.0,
            ball_y: 350.0,
            ball_x_vel: 1.2,
            ball_y_vel: 0.0,
            player_y: 350.0,
            ai_y: 350.0,
            score_left: 0,
            score_right: 0,
        }
    }

    #[test]
    fn test_sampling_rate_is_frame_rate_independent() {
        let config = Config::new();
        let snap = snapshot();

        // 2000 ms delivered as a single frame
        let mut recorder = Recorder::new(500.0);
        let mut log = SampleLog::new();
        recorder.tick(2000.0, &snap, &config, &mut log);
        assert_eq!(log.len(), 4);

        // The same 2000 ms delivered as five 400 ms frames
        let mut recorder = Recorder::new(500.0);
        let mut log = SampleLog::new();
        for _ in 0..5 {
            recorder.tick(400.0, &snap, &config, &mut log);
        }
        assert_eq!(log.len(), 4);

        // And as 125 frames of 16 ms
        let mut recorder = Recorder::new(500.0);
        let mut log = SampleLog::new();
        for _ in 0..125 {
            recorder.tick(16.0, &snap, &config, &mut log);
        }
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn test_fractional_carry_over() {
        let config = Config::new();
        let snap = snapshot();
        let mut recorder = Recorder::new(500.0);
        let mut log = SampleLog::new();

        assert_eq!(recorder.tick(499.0, &snap, &config, &mut log), 0);
        assert_eq!(recorder.tick(2.0, &snap, &config, &mut log), 1);
        // The 1 ms remainder counts toward the next interval
        assert_eq!(recorder.tick(499.0, &snap, &config, &mut log), 1);
    }

    #[test]
    fn test_reset_drops_partial_interval() {
        let config = Config::new();
        let snap = snapshot();
        let mut recorder = Recorder::new(500.0);
        let mut log = SampleLog::new();

        recorder.tick(499.0, &snap, &config, &mut log);
        recorder.reset();
        assert_eq!(recorder.tick(2.0, &snap, &config, &mut log), 0);
    }
}
