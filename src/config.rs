//! Detector configuration. Defaults: 20 syscalls, 10 trees, subsample 8, depth 10, threshold 0.6.

use crate::error::{HidsError, InvalidInput};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HidsConfig {
    /// Isolation forest shape
    pub forest: ForestConfig,
    /// Score classification
    pub detection: DetectionConfig,
    /// Synthetic dataset sizes used by the driver
    pub dataset: DatasetConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Width of every feature vector (number of tracked syscalls)
    pub max_syscalls: usize,
    pub num_trees: usize,
    /// Upper bound on samples drawn per tree; clamped to the training set size
    pub subsample_size: usize,
    pub max_depth: usize,
    /// Fixed seed for reproducible forests; entropy when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Score at or above this is anomalous (0.0–1.0)
    pub anomaly_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub train_size: usize,
    pub test_normal: usize,
    pub test_anomalous: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            max_syscalls: 20,
            num_trees: 10,
            subsample_size: 8,
            max_depth: 10,
            seed: None,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            anomaly_threshold: 0.6,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            train_size: 20,
            test_normal: 6,
            test_anomalous: 4,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Upper bound on `num_trees`; the ensemble is allocated up front.
pub const MAX_TREES: usize = 100_000;

fn positive(name: &'static str, value: usize) -> Result<(), InvalidInput> {
    if value == 0 {
        Err(InvalidInput::NonPositive { name, value })
    } else {
        Ok(())
    }
}

impl ForestConfig {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.max_syscalls == 0 {
            return Err(InvalidInput::ZeroWidth);
        }
        positive("num_trees", self.num_trees)?;
        positive("subsample_size", self.subsample_size)?;
        positive("max_depth", self.max_depth)?;
        if self.num_trees > MAX_TREES {
            return Err(InvalidInput::TooLarge {
                name: "num_trees",
                value: self.num_trees,
                max: MAX_TREES,
            });
        }
        Ok(())
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !(0.0..=1.0).contains(&self.anomaly_threshold) {
            return Err(InvalidInput::ThresholdOutOfRange(self.anomaly_threshold));
        }
        Ok(())
    }
}

impl HidsConfig {
    /// Load from JSON file if present and valid JSON; otherwise return default
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<HidsConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }

    /// Strict load: I/O and parse failures are returned instead of falling back.
    pub fn try_load(path: &Path) -> Result<Self, HidsError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn validate(&self) -> Result<(), HidsError> {
        self.forest.validate()?;
        self.detection.validate()?;
        Ok(())
    }
}
