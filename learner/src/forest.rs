//! Random-forest regression: decision trees fitted on bootstrap
//! resamples, each seeing a random subset of the features, aggregated by
//! mean.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::codec::FEATURE_COUNT;
use crate::tree::{DecisionTree, TreeParams};

/// Ensemble hyperparameters
#[derive(Debug, Clone, Copy)]
pub struct ForestParams {
    pub n_estimators: usize,
    /// Fraction of the feature set each tree may split on
    pub feature_ratio: f32,
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 25,
            feature_ratio: 0.75,
            seed: 42,
        }
    }
}

/// A fitted ensemble of regression trees
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Fit the ensemble. Each estimator draws its own bootstrap resample
    /// (with replacement) and feature subset from a seed derived from the
    /// ensemble seed, so the result is reproducible regardless of how the
    /// estimators are scheduled across threads.
    pub fn fit(
        features: &[[f32; FEATURE_COUNT]],
        targets: &[f32],
        tree_params: &TreeParams,
        params: &ForestParams,
    ) -> Self {
        let n = targets.len();
        let subset_len = ((FEATURE_COUNT as f32 * params.feature_ratio).ceil() as usize)
            .clamp(1, FEATURE_COUNT);

        let trees = (0..params.n_estimators.max(1))
            .into_par_iter()
            .map(|estimator| {
                let mut rng = StdRng::seed_from_u64(params.seed.wrapping_add(estimator as u64));

                let mut boot_features = Vec::with_capacity(n);
                let mut boot_targets = Vec::with_capacity(n);
                for _ in 0..n {
                    let pick = rng.gen_range(0..n);
                    boot_features.push(features[pick]);
                    boot_targets.push(targets[pick]);
                }

                let mut allowed: Vec<usize> = (0..FEATURE_COUNT).collect();
                allowed.shuffle(&mut rng);
                allowed.truncate(subset_len);
                allowed.sort_unstable();

                DecisionTree::fit_on(&boot_features, &boot_targets, &allowed, tree_params)
            })
            .collect();

        Self { trees }
    }

    /// Mean of the constituent trees' predictions
    pub fn predict(&self, features: &[f32; FEATURE_COUNT]) -> f32 {
        let sum: f32 = self.trees.iter().map(|tree| tree.predict(features)).sum();
        sum / self.trees.len() as f32
    }

    pub fn n_estimators(&self) -> usize {
        self.trees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_data() -> (Vec<[f32; FEATURE_COUNT]>, Vec<f32>) {
        let mut features = Vec::new();
        let mut targets = Vec::new();
        for i in 0..25 {
            let x = i as f32 / 25.0;
            features.push([x, x, 0.5, 0.5]);
            targets.push(if x < 0.5 { 0.2 } else { 0.8 });
        }
        (features, targets)
    }

    #[test]
    fn test_forest_learns_step_function() {
        let (features, targets) = step_data();
        let forest = RandomForest::fit(
            &features,
            &targets,
            &TreeParams::default(),
            &ForestParams::default(),
        );

        assert_eq!(forest.n_estimators(), 25);
        assert!(forest.predict(&[0.1, 0.1, 0.5, 0.5]) < 0.5);
        assert!(forest.predict(&[0.9, 0.9, 0.5, 0.5]) > 0.5);
    }

    #[test]
    fn test_prediction_stays_within_target_range() {
        let (features, targets) = step_data();
        let forest = RandomForest::fit(
            &features,
            &targets,
            &TreeParams::default(),
            &ForestParams::default(),
        );

        for i in 0..50 {
            let x = i as f32 / 50.0;
            let pred = forest.predict(&[x, x, 0.5, 0.5]);
            assert!((0.2..=0.8).contains(&pred), "Means of means stay in range");
        }
    }

    #[test]
    fn test_same_seed_same_forest() {
        let (features, targets) = step_data();
        let params = ForestParams {
            n_estimators: 5,
            ..ForestParams::default()
        };
        let a = RandomForest::fit(&features, &targets, &TreeParams::default(), &params);
        let b = RandomForest::fit(&features, &targets, &TreeParams::default(), &params);

        for i in 0..20 {
            let x = i as f32 / 20.0;
            let point = [x, 1.0 - x, 0.5, 0.5];
            assert_eq!(a.predict(&point), b.predict(&point));
        }
    }

    #[test]
    fn test_zero_estimators_still_yields_one_tree() {
        let (features, targets) = step_data();
        let params = ForestParams {
            n_estimators: 0,
            ..ForestParams::default()
        };
        let forest = RandomForest::fit(&features, &targets, &TreeParams::default(), &params);
        assert_eq!(forest.n_estimators(), 1);
    }
}
