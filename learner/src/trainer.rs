//! Training entry point and the shared prediction surface.

use thiserror::Error;

use crate::codec::FEATURE_COUNT;
use crate::forest::{ForestParams, RandomForest};
use crate::tree::{DecisionTree, TreeParams};

/// Which regression strategy to fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    #[default]
    DecisionTree,
    RandomForest,
}

/// Full trainer configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainerParams {
    pub kind: ModelKind,
    pub tree: TreeParams,
    pub forest: ForestParams,
}

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("not enough training samples: have {got}, need at least {needed}")]
    InsufficientData { needed: usize, got: usize },
    #[error("no trained model is available")]
    NoModel,
    #[error("training worker disconnected before sending a result")]
    WorkerLost,
}

/// A fitted regressor. Both strategies expose the same prediction
/// surface, so callers never branch on which one was trained.
#[derive(Debug, Clone)]
pub enum Model {
    Tree(DecisionTree),
    Forest(RandomForest),
}

impl Model {
    pub fn predict(&self, features: &[f32; FEATURE_COUNT]) -> f32 {
        match self {
            Model::Tree(tree) => tree.predict(features),
            Model::Forest(forest) => forest.predict(features),
        }
    }
}

/// Fit a model on parallel feature/target arrays. Fails without producing
/// a model when the log holds fewer samples than a single leaf requires;
/// mismatched array lengths are a caller contract violation.
pub fn train(
    features: &[[f32; FEATURE_COUNT]],
    targets: &[f32],
    params: &TrainerParams,
) -> Result<Model, TrainError> {
    debug_assert_eq!(features.len(), targets.len());

    let needed = params.tree.min_samples_leaf.max(1);
    if targets.len() < needed {
        return Err(TrainError::InsufficientData {
            needed,
            got: targets.len(),
        });
    }

    let model = match params.kind {
        ModelKind::DecisionTree => {
            Model::Tree(DecisionTree::fit(features, targets, &params.tree))
        }
        ModelKind::RandomForest => Model::Forest(RandomForest::fit(
            features,
            targets,
            &params.tree,
            &params.forest,
        )),
    };
    log::info!("trained {:?} on {} samples", params.kind, targets.len());
    Ok(model)
}
