//! Error types. Every domain failure is an input rejection raised before any tree is built.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HidsError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse: {0}")]
    Json(#[from] serde_json::Error),
}

impl HidsError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, HidsError::InvalidInput(_))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("training set is empty")]
    EmptyTrainingSet,
    #[error("feature vectors must have at least one syscall slot")]
    ZeroWidth,
    #[error("feature vector {index} has width {actual}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: usize },
    #[error("{name} is {value}, at most {max} allowed")]
    TooLarge {
        name: &'static str,
        value: usize,
        max: usize,
    },
    #[error("anomaly threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
}
