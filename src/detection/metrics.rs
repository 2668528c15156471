//! Confusion-matrix counts and derived rates against ground truth.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionMetrics {
    pub true_positive: usize,
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
}

impl DetectionMetrics {
    pub fn record(&mut self, predicted_anomaly: bool, actual_anomaly: bool) {
        match (predicted_anomaly, actual_anomaly) {
            (true, true) => self.true_positive += 1,
            (false, false) => self.true_negative += 1,
            (true, false) => self.false_positive += 1,
            (false, true) => self.false_negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    /// Zero when nothing was recorded.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.true_positive + self.true_negative) as f64 / total as f64
    }

    /// `None` when nothing was flagged.
    pub fn precision(&self) -> Option<f64> {
        let flagged = self.true_positive + self.false_positive;
        (flagged > 0).then(|| self.true_positive as f64 / flagged as f64)
    }

    /// `None` when there were no actual anomalies.
    pub fn recall(&self) -> Option<f64> {
        let positives = self.true_positive + self.false_negative;
        (positives > 0).then(|| self.true_positive as f64 / positives as f64)
    }
}
