//! Labeled process behaviours and synthetic generators for training and evaluation.

mod synthetic;

pub use synthetic::{generate_anomalous, generate_normal, test_set, training_set};

use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// One process's syscall profile with its ground-truth label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessBehavior {
    pub name: String,
    pub features: FeatureVector,
    pub is_anomaly: bool,
}

impl ProcessBehavior {
    pub fn total_calls(&self) -> u64 {
        self.features.total()
    }
}

/// Strip labels for training.
pub fn feature_vectors(processes: &[ProcessBehavior]) -> Vec<FeatureVector> {
    processes.iter().map(|p| p.features.clone()).collect()
}
