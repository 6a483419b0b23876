//! Frame-callback orchestration: one `update` per scheduled frame drives
//! the simulation, then the recorder or the steering controller,
//! depending on mode.

use game_core::{
    create_ai_paddle, create_ball, create_player_paddle, snapshot, steer_ai, step, Config, Events,
    GameRng, GameSnapshot, Mode, PlayerInput, Score, Time,
};
use hecs::World;

use crate::background::TrainingTask;
use crate::codec;
use crate::controller::{PredictionController, DEFAULT_PREDICT_INTERVAL_MS};
use crate::dataset::{ImportReport, SampleLog};
use crate::recorder::Recorder;
use crate::trainer::{train, Model, TrainError, TrainerParams};

/// A live game with its training log, optional trained model, and the
/// machinery that connects them. The session owns the world; renderers
/// read it through `snapshot`.
pub struct Session {
    world: World,
    time: Time,
    config: Config,
    mode: Mode,
    score: Score,
    events: Events,
    rng: GameRng,
    log: SampleLog,
    recorder: Recorder,
    controller: PredictionController,
    params: TrainerParams,
    model: Option<Model>,
    pending: Option<TrainingTask>,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        create_player_paddle(&mut world, &config);
        create_ai_paddle(&mut world, &config);
        create_ball(&mut world, &config);

        let center = config.game_height / 2.0;
        Self {
            world,
            time: Time::new(0.0, 0.0),
            config,
            mode: Mode::Manual,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            log: SampleLog::new(),
            recorder: Recorder::default(),
            controller: PredictionController::new(DEFAULT_PREDICT_INTERVAL_MS, center),
            params: TrainerParams::default(),
            model: None,
            pending: None,
        }
    }

    /// One frame of the update contract: advance the simulation, then
    /// capture a sample or refresh the steering target. Irregular deltas
    /// are tolerated; non-positive ones are no-op frames.
    pub fn update(&mut self, dt_ms: f32, input: PlayerInput) {
        self.time.dt = dt_ms;
        step(
            &mut self.world,
            &self.time,
            &self.config,
            self.mode,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if dt_ms > 0.0 {
            self.time.now += dt_ms;
            if let Some(snap) = snapshot(&self.world, &self.score) {
                match self.mode {
                    Mode::Training => {
                        self.recorder
                            .tick(dt_ms, &snap, &self.config, &mut self.log);
                    }
                    Mode::Autonomous => {
                        if let Some(model) = &self.model {
                            let target =
                                self.controller.tick(dt_ms, &snap, model, &self.config);
                            steer_ai(&mut self.world, target);
                        }
                    }
                    Mode::Manual => {}
                }
            }
        }

        self.poll_training();
    }

    /// Enter record mode; the right paddle leaves play and samples of the
    /// human's positioning accumulate in the log.
    pub fn start_recording(&mut self) {
        self.recorder.reset();
        self.mode = Mode::Training;
        log::debug!("recording started");
    }

    pub fn stop_recording(&mut self) {
        if self.mode == Mode::Training {
            self.mode = Mode::Manual;
            log::debug!("recording stopped with {} samples", self.log.len());
        }
    }

    /// Hand the right paddle to the trained model. Refused until a model
    /// exists, so prediction is never reached without one.
    pub fn enable_autopilot(&mut self) -> Result<(), TrainError> {
        if self.model.is_none() {
            return Err(TrainError::NoModel);
        }
        self.mode = Mode::Autonomous;
        Ok(())
    }

    pub fn disable_autopilot(&mut self) {
        if self.mode == Mode::Autonomous {
            self.mode = Mode::Manual;
        }
    }

    /// Fit a model on the current log, synchronously on this thread. On
    /// failure any previously trained model stays in effect.
    pub fn train_now(&mut self) -> Result<(), TrainError> {
        let (features, targets) = codec::to_arrays(self.log.samples());
        let model = train(&features, &targets, &self.params)?;
        self.model = Some(model);
        Ok(())
    }

    /// Fit on a worker thread; the result is collected by later `update`
    /// calls and swapped in only on success.
    pub fn train_in_background(&mut self) {
        let (features, targets) = codec::to_arrays(self.log.samples());
        self.pending = Some(TrainingTask::spawn(features, targets, self.params));
    }

    pub fn training_in_progress(&self) -> bool {
        self.pending.is_some()
    }

    fn poll_training(&mut self) {
        let Some(task) = &mut self.pending else {
            return;
        };
        if let Some(result) = task.poll() {
            self.pending = None;
            match result {
                Ok(model) => {
                    self.model = Some(model);
                    log::info!("background training finished");
                }
                Err(err) => log::warn!("background training failed: {err}"),
            }
        }
    }

    /// Serialize the training log to the exchange format
    pub fn export_log(&self) -> String {
        self.log.to_csv()
    }

    /// Replace the training log wholesale with an imported one
    pub fn import_log(&mut self, text: &str) -> ImportReport {
        let (log, report) = SampleLog::from_csv(text);
        self.log = log;
        report
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        snapshot(&self.world, &self.score)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn log(&self) -> &SampleLog {
        &self.log
    }

    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_trainer_params(&mut self, params: TrainerParams) {
        self.params = params;
    }
}
