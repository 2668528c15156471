//! Turns an anomaly score into a verdict with a single threshold.

use crate::config::DetectionConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Normal,
    Anomalous,
}

impl Verdict {
    pub fn is_anomalous(self) -> bool {
        self == Verdict::Anomalous
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Normal => "normal",
            Verdict::Anomalous => "anomalous",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreClassifier {
    threshold: f64,
}

impl ScoreClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(config.anomaly_threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// `score >= threshold` is anomalous.
    pub fn classify(&self, score: f64) -> Verdict {
        if score >= self.threshold {
            Verdict::Anomalous
        } else {
            Verdict::Normal
        }
    }
}

impl Default for ScoreClassifier {
    fn default() -> Self {
        Self::from_config(&DetectionConfig::default())
    }
}
