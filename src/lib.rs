//! Host intrusion detection over system-call frequency profiles.
//!
//! Processes are flagged when their syscall-frequency vector isolates quickly
//! in an Isolation Forest trained on normal behaviour.
//!
//! Modular structure:
//! - [`features`] — Fixed-width syscall frequency vectors
//! - [`model`] — Partition trees, path length, Isolation Forest scoring
//! - [`detection`] — Threshold classification and confusion-matrix metrics
//! - [`dataset`] — Labeled process behaviours and synthetic generators
//! - [`logging`] — tracing setup and ndjson report lines
//!
//! A score is only meaningful against the threshold it is compared to:
//! `score >= anomaly_threshold` means anomalous.

pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod detection;
pub mod dataset;
pub mod logging;

pub use config::HidsConfig;
pub use error::{HidsError, InvalidInput};
pub use features::FeatureVector;
pub use model::{IsolationForest, PartitionNode, PartitionTree};
pub use detection::{Detector, ScoreClassifier, Verdict};
pub use dataset::ProcessBehavior;
pub use logging::StructuredLogger;
