//! Off-thread training with a one-shot result handoff, so a large log
//! never stalls the frame loop.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::codec::FEATURE_COUNT;
use crate::trainer::{train, Model, TrainError, TrainerParams};

/// A training run on a worker thread. The finished model (or error)
/// arrives through a one-shot channel; polling never blocks.
pub struct TrainingTask {
    rx: Receiver<Result<Model, TrainError>>,
}

impl TrainingTask {
    pub fn spawn(
        features: Vec<[f32; FEATURE_COUNT]>,
        targets: Vec<f32>,
        params: TrainerParams,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver may have been dropped; nothing to do then
            let _ = tx.send(train(&features, &targets, &params));
        });
        Self { rx }
    }

    /// Take the result if the worker has finished
    pub fn poll(&mut self) -> Option<Result<Model, TrainError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(TrainError::WorkerLost)),
        }
    }
}
