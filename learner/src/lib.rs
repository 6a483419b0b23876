//! Learning-control pipeline for the Pong opponent: training-data
//! capture, regression models fitted on recorded play, and the
//! prediction-driven paddle controller.

pub mod background;
pub mod codec;
pub mod controller;
pub mod dataset;
pub mod forest;
pub mod recorder;
pub mod session;
pub mod trainer;
pub mod tree;

pub use background::TrainingTask;
pub use controller::PredictionController;
pub use dataset::{ImportReport, Sample, SampleLog};
pub use forest::{ForestParams, RandomForest};
pub use recorder::Recorder;
pub use session::Session;
pub use trainer::{train, Model, ModelKind, TrainError, TrainerParams};
pub use tree::{DecisionTree, TreeParams};
