//! Decision-tree regression fitted by recursive variance-reduction
//! splitting.

use crate::codec::FEATURE_COUNT;

/// Hyperparameters for a single regression tree
#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_leaf: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 6,
            min_samples_leaf: 3,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f32,
    },
}

/// A fitted regression tree. Nodes live in an arena with the root at
/// index 0; leaves predict the mean target of the samples routed to them.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Fit on the full feature set
    pub fn fit(features: &[[f32; FEATURE_COUNT]], targets: &[f32], params: &TreeParams) -> Self {
        const ALL: [usize; FEATURE_COUNT] = [0, 1, 2, 3];
        Self::fit_on(features, targets, &ALL, params)
    }

    /// Fit considering only `allowed` feature indices for splits. The
    /// forest uses this for its per-tree feature subsampling.
    pub(crate) fn fit_on(
        features: &[[f32; FEATURE_COUNT]],
        targets: &[f32],
        allowed: &[usize],
        params: &TreeParams,
    ) -> Self {
        let mut builder = Builder {
            features,
            targets,
            allowed,
            params,
            nodes: Vec::new(),
        };
        builder.build((0..targets.len()).collect(), 0);
        Self {
            nodes: builder.nodes,
        }
    }

    /// Route a feature vector to its leaf
    pub fn predict(&self, features: &[f32; FEATURE_COUNT]) -> f32 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

struct Builder<'a> {
    features: &'a [[f32; FEATURE_COUNT]],
    targets: &'a [f32],
    allowed: &'a [usize],
    params: &'a TreeParams,
    nodes: Vec<Node>,
}

impl Builder<'_> {
    /// Build the subtree over `indices`, returning its arena index
    fn build(&mut self, indices: Vec<usize>, depth: usize) -> usize {
        let (mean, sse) = moments(self.targets, &indices);

        let splittable = depth < self.params.max_depth
            && indices.len() >= 2 * self.params.min_samples_leaf
            && sse > f64::EPSILON;
        let split = if splittable {
            self.best_split(&indices)
        } else {
            None
        };

        let Some((feature, threshold)) = split else {
            let slot = self.nodes.len();
            self.nodes.push(Node::Leaf {
                value: mean as f32,
            });
            return slot;
        };

        let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| self.features[i][feature] <= threshold);

        // Reserve the parent's slot before descending so the root stays at 0
        let slot = self.nodes.len();
        self.nodes.push(Node::Leaf {
            value: mean as f32,
        });
        let left = self.build(left_indices, depth + 1);
        let right = self.build(right_indices, depth + 1);
        self.nodes[slot] = Node::Split {
            feature,
            threshold,
            left,
            right,
        };
        slot
    }

    /// Best (feature, threshold) by minimal summed child squared error,
    /// which is equivalent to maximal variance reduction
    fn best_split(&self, indices: &[usize]) -> Option<(usize, f32)> {
        let n = indices.len();
        let min_leaf = self.params.min_samples_leaf;
        let mut best: Option<(f64, usize, f32)> = None;

        for &feature in self.allowed {
            let mut pairs: Vec<(f32, f64)> = indices
                .iter()
                .map(|&i| (self.features[i][feature], self.targets[i] as f64))
                .collect();
            pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

            let total: f64 = pairs.iter().map(|p| p.1).sum();
            let total_sq: f64 = pairs.iter().map(|p| p.1 * p.1).sum();

            let mut sum = 0.0;
            let mut sum_sq = 0.0;
            for i in 1..n {
                sum += pairs[i - 1].1;
                sum_sq += pairs[i - 1].1 * pairs[i - 1].1;

                // No boundary between equal feature values
                if pairs[i].0 == pairs[i - 1].0 {
                    continue;
                }
                if i < min_leaf || n - i < min_leaf {
                    continue;
                }

                let threshold = (pairs[i - 1].0 + pairs[i].0) / 2.0;
                // Adjacent floats can round the midpoint onto the upper value
                if threshold >= pairs[i].0 {
                    continue;
                }

                let left_sse = sum_sq - sum * sum / i as f64;
                let right_sum = total - sum;
                let right_sse =
                    (total_sq - sum_sq) - right_sum * right_sum / (n - i) as f64;
                let sse = left_sse + right_sse;

                if best.map_or(true, |(b, _, _)| sse < b) {
                    best = Some((sse, feature, threshold));
                }
            }
        }

        best.map(|(_, feature, threshold)| (feature, threshold))
    }
}

fn moments(targets: &[f32], indices: &[usize]) -> (f64, f64) {
    if indices.is_empty() {
        return (0.0, 0.0);
    }
    let n = indices.len() as f64;
    let sum: f64 = indices.iter().map(|&i| targets[i] as f64).sum();
    let mean = sum / n;
    let sse: f64 = indices
        .iter()
        .map(|&i| {
            let d = targets[i] as f64 - mean;
            d * d
        })
        .sum();
    (mean, sse)
}
