//! CART regression tree with variance-reduction splits.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::Regressor;

/// Growth limits for one tree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 16,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A fitted regression tree stored as a node arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Fit over the rows selected by `indices` (callers pass bootstrap
    /// samples or the full index range).
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>, indices: &[usize], params: &TreeParams) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        let mut scratch = indices.to_vec();
        tree.build(x, y, &mut scratch, 0, params);
        tree
    }

    /// Recursively grow a subtree; returns the index of its root node.
    fn build(
        &mut self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        indices: &mut [usize],
        depth: usize,
        params: &TreeParams,
    ) -> usize {
        let n = indices.len();
        let sum: f64 = indices.iter().map(|&i| y[i]).sum();
        let mean = sum / n as f64;

        if depth >= params.max_depth || n < params.min_samples_split {
            return self.push(Node::Leaf { value: mean });
        }

        match best_split(x, y, indices, params.min_samples_leaf) {
            Some(split) if split.gain > 1e-12 => {
                // Partition indices around the threshold in place.
                let pivot = partition(x, indices, split.feature, split.threshold);
                let (left_idx, right_idx) = indices.split_at_mut(pivot);
                if left_idx.is_empty() || right_idx.is_empty() {
                    return self.push(Node::Leaf { value: mean });
                }

                let left = self.build(x, y, left_idx, depth + 1, params);
                let right = self.build(x, y, right_idx, depth + 1, params);
                self.push(Node::Split {
                    feature: split.feature,
                    threshold: split.threshold,
                    left,
                    right,
                })
            }
            _ => self.push(Node::Leaf { value: mean }),
        }
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Regressor for RegressionTree {
    fn predict_row(&self, features: &[f64]) -> f64 {
        // The root is pushed last.
        let mut current = self.nodes.len() - 1;
        loop {
            match &self.nodes[current] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    current = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    gain: f64,
}

/// Exhaustive split search: for every feature, sweep the sorted sample
/// values and score candidate thresholds by sum-of-squared-error reduction
/// using running sums.
fn best_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    indices: &[usize],
    min_samples_leaf: usize,
) -> Option<BestSplit> {
    let n = indices.len();
    let total_sum: f64 = indices.iter().map(|&i| y[i]).sum();
    let total_sq: f64 = indices.iter().map(|&i| y[i] * y[i]).sum();
    let parent_sse = total_sq - total_sum * total_sum / n as f64;

    let mut best: Option<BestSplit> = None;
    let mut order = indices.to_vec();

    for feature in 0..x.ncols() {
        order.sort_by(|&a, &b| x[[a, feature]].total_cmp(&x[[b, feature]]));

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;
        for pos in 1..n {
            let prev = order[pos - 1];
            left_sum += y[prev];
            left_sq += y[prev] * y[prev];

            let value_prev = x[[prev, feature]];
            let value_here = x[[order[pos], feature]];
            if value_prev == value_here {
                continue;
            }
            if pos < min_samples_leaf || n - pos < min_samples_leaf {
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let left_n = pos as f64;
            let right_n = (n - pos) as f64;
            let sse = (left_sq - left_sum * left_sum / left_n)
                + (right_sq - right_sum * right_sum / right_n);
            let gain = parent_sse - sse;

            if best.as_ref().map_or(true, |b| gain > b.gain) {
                best = Some(BestSplit {
                    feature,
                    threshold: (value_prev + value_here) / 2.0,
                    gain,
                });
            }
        }
    }

    best
}

/// Partition `indices` so rows with feature value <= threshold come first;
/// returns the boundary position.
fn partition(x: &Array2<f64>, indices: &mut [usize], feature: usize, threshold: f64) -> usize {
    let mut boundary = 0;
    for i in 0..indices.len() {
        if x[[indices[i], feature]] <= threshold {
            indices.swap(i, boundary);
            boundary += 1;
        }
    }
    boundary
}
