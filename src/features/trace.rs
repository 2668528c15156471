//! Raw syscall trace → frequency vector.

use super::FeatureVector;

/// Result of counting one trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceProfile {
    pub features: FeatureVector,
    /// Calls whose syscall number fell outside the tracked width
    pub dropped: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct SyscallCounter {
    width: usize,
}

impl SyscallCounter {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn profile(&self, trace: &[usize]) -> TraceProfile {
        let mut counts = vec![0u32; self.width];
        let mut dropped = 0u64;
        for &nr in trace {
            match counts.get_mut(nr) {
                Some(slot) => *slot = slot.saturating_add(1),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            tracing::debug!(dropped, width = self.width, "untracked syscalls in trace");
        }
        TraceProfile {
            features: FeatureVector::new(counts),
            dropped,
        }
    }
}
