//! Isolation Forest: an ensemble of partition trees over random subsamples.
//!
//! Subsamples are drawn **with replacement**, so a tree may see the same
//! process more than once. Textbook Isolation Forest samples without
//! replacement; scores here are comparable only to forests built the same way.

use super::path::c_factor;
use super::tree::PartitionTree;
use crate::config::ForestConfig;
use crate::error::{HidsError, InvalidInput};
use crate::features::FeatureVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Score returned when `c(subsample_size)` is zero and no normalization is possible.
pub const DEGENERATE_SCORE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct IsolationForest {
    config: ForestConfig,
    trees: Vec<PartitionTree>,
    /// Effective subsample size after clamping; zero until trained
    subsample_size: usize,
}

impl IsolationForest {
    pub fn new(config: ForestConfig) -> Result<Self, HidsError> {
        config.validate()?;
        Ok(Self {
            config,
            trees: Vec::new(),
            subsample_size: 0,
        })
    }

    /// Build and train in one step using `config.seed` (or entropy).
    pub fn fit(config: ForestConfig, data: &[FeatureVector]) -> Result<Self, HidsError> {
        let mut forest = Self::new(config)?;
        forest.train_seeded(data)?;
        Ok(forest)
    }

    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    pub fn trees(&self) -> &[PartitionTree] {
        &self.trees
    }

    pub fn subsample_size(&self) -> usize {
        self.subsample_size
    }

    pub fn is_trained(&self) -> bool {
        !self.trees.is_empty()
    }

    fn check(&self, data: &[FeatureVector]) -> Result<(), InvalidInput> {
        if data.is_empty() {
            return Err(InvalidInput::EmptyTrainingSet);
        }
        let expected = self.config.max_syscalls;
        if let Some((index, v)) = data.iter().enumerate().find(|(_, v)| v.len() != expected) {
            if v.is_empty() {
                return Err(InvalidInput::ZeroWidth);
            }
            return Err(InvalidInput::DimensionMismatch {
                index,
                expected,
                actual: v.len(),
            });
        }
        Ok(())
    }

    /// Replace the ensemble with `num_trees` trees, each built over
    /// `min(subsample_size, data.len())` indices drawn uniformly with replacement.
    ///
    /// Input is fully validated first; on error the forest is left unchanged.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        data: &[FeatureVector],
        rng: &mut R,
    ) -> Result<(), HidsError> {
        self.check(data)?;

        let ForestConfig {
            max_syscalls,
            num_trees,
            max_depth,
            ..
        } = self.config;
        let subsample_size = self.config.subsample_size.min(data.len());

        info!(
            num_trees,
            subsample_size,
            max_depth,
            samples = data.len(),
            "building isolation forest"
        );

        let mut trees = Vec::with_capacity(num_trees);
        let mut indices = Vec::with_capacity(subsample_size);
        for t in 0..num_trees {
            indices.clear();
            indices.extend((0..subsample_size).map(|_| rng.gen_range(0..data.len())));

            let tree = PartitionTree::build(data, &indices, max_syscalls, max_depth, rng);
            debug!(
                tree = t + 1,
                depth = tree.root().depth(),
                leaves = tree.root().leaf_count(),
                "tree built"
            );
            trees.push(tree);
        }

        if c_factor(subsample_size) == 0.0 {
            warn!(
                subsample_size,
                score = DEGENERATE_SCORE,
                "subsample too small to normalize; scores are constant"
            );
        }
        self.trees = trees;
        self.subsample_size = subsample_size;
        info!("isolation forest training complete");
        Ok(())
    }

    /// Train with a generator seeded from `config.seed`, or from entropy when unset.
    pub fn train_seeded(&mut self, data: &[FeatureVector]) -> Result<(), HidsError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.train(data, &mut rng)
    }

    /// Mean path length of `vector` across all trees; zero for an untrained forest.
    pub fn average_path_length(&self, vector: &FeatureVector) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        let total: f64 = self.trees.iter().map(|t| t.path_length(vector)).sum();
        total / self.trees.len() as f64
    }

    /// Anomaly score `2^(-E[h(x)] / c(subsample_size))`.
    ///
    /// Near 1 for points isolated in few splits, around 0.5 or below for points
    /// that need long paths. Returns [`DEGENERATE_SCORE`] when `c` is zero,
    /// which includes an untrained forest.
    pub fn score(&self, vector: &FeatureVector) -> f64 {
        let c = c_factor(self.subsample_size);
        if c == 0.0 {
            return DEGENERATE_SCORE;
        }
        2f64.powf(-self.average_path_length(vector) / c)
    }

    pub fn score_batch(&self, vectors: &[FeatureVector]) -> Vec<f64> {
        vectors.iter().map(|v| self.score(v)).collect()
    }
}
