//! Scoring processes against a trained forest and classifying the result.

mod classifier;
mod metrics;

pub use classifier::{ScoreClassifier, Verdict};
pub use metrics::DetectionMetrics;

use crate::dataset::ProcessBehavior;
use crate::model::IsolationForest;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome for a single process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub process: String,
    pub score: f64,
    pub verdict: Verdict,
    /// Ground truth when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<bool>,
    pub ts: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRun {
    pub detections: Vec<Detection>,
    pub metrics: DetectionMetrics,
}

#[derive(Debug)]
pub struct Detector {
    forest: IsolationForest,
    classifier: ScoreClassifier,
}

impl Detector {
    pub fn new(forest: IsolationForest, classifier: ScoreClassifier) -> Self {
        Self { forest, classifier }
    }

    pub fn forest(&self) -> &IsolationForest {
        &self.forest
    }

    pub fn classifier(&self) -> &ScoreClassifier {
        &self.classifier
    }

    pub fn inspect(&self, process: &ProcessBehavior) -> Detection {
        let score = self.forest.score(&process.features);
        let verdict = self.classifier.classify(score);
        debug!(process = %process.name, score, verdict = verdict.as_str(), "scored");
        Detection {
            process: process.name.clone(),
            score,
            verdict,
            expected: Some(process.is_anomaly),
            ts: Utc::now().timestamp_millis(),
        }
    }

    /// Score every process and tally the verdicts against their labels.
    pub fn evaluate(&self, processes: &[ProcessBehavior]) -> DetectionRun {
        let mut metrics = DetectionMetrics::default();
        let detections = processes
            .iter()
            .map(|p| {
                let d = self.inspect(p);
                metrics.record(d.verdict.is_anomalous(), p.is_anomaly);
                d
            })
            .collect();
        DetectionRun {
            detections,
            metrics,
        }
    }
}
