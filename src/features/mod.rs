//! Syscall-frequency feature vectors handed to the isolation forest.

mod trace;

pub use trace::{SyscallCounter, TraceProfile};

use serde::{Deserialize, Serialize};

/// Fixed-width per-syscall frequency counts for one process.
///
/// Index `i` always means the same syscall across training and scoring.
/// The vector is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    counts: Vec<u32>,
}

impl FeatureVector {
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    pub fn zeros(width: usize) -> Self {
        Self {
            counts: vec![0; width],
        }
    }

    /// Count syscall numbers from a raw trace into a vector of `width` slots.
    pub fn from_trace(trace: &[usize], width: usize) -> Self {
        SyscallCounter::new(width).profile(trace).features
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for syscall `index`; slots past the end read as zero.
    pub fn get(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Total number of calls across all tracked syscalls
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}

impl From<Vec<u32>> for FeatureVector {
    fn from(counts: Vec<u32>) -> Self {
        Self::new(counts)
    }
}
