//! Synthetic syscall profiles.
//!
//! Slots 0–4 stand for common calls (read, write, open, close, fork), 5–9 for
//! occasional ones, and 10 onward for rarely used calls. Normal processes lean on
//! the common calls; anomalous ones barely touch them and hammer the rare ones.

use super::ProcessBehavior;
use crate::features::FeatureVector;
use rand::Rng;

fn around<R: Rng + ?Sized>(rng: &mut R, base: i64, lo: i64, hi: i64) -> u32 {
    (base + rng.gen_range(lo..=hi)).max(0) as u32
}

pub fn generate_normal<R: Rng + ?Sized>(
    name: impl Into<String>,
    width: usize,
    rng: &mut R,
) -> ProcessBehavior {
    let counts = (0..width)
        .map(|i| match i {
            0..=4 => around(rng, 50, -10, 10),
            5..=9 => around(rng, 10, -5, 5),
            _ => around(rng, 0, 0, 3),
        })
        .collect();
    ProcessBehavior {
        name: name.into(),
        features: FeatureVector::new(counts),
        is_anomaly: false,
    }
}

pub fn generate_anomalous<R: Rng + ?Sized>(
    name: impl Into<String>,
    width: usize,
    rng: &mut R,
) -> ProcessBehavior {
    let counts = (0..width)
        .map(|i| match i {
            0..=4 => around(rng, 5, -2, 3),
            5..=9 => around(rng, 0, 0, 10),
            _ => around(rng, 30, -5, 15),
        })
        .collect();
    ProcessBehavior {
        name: name.into(),
        features: FeatureVector::new(counts),
        is_anomaly: true,
    }
}

/// `n` normal processes named `train_proc_{i}`.
pub fn training_set<R: Rng + ?Sized>(n: usize, width: usize, rng: &mut R) -> Vec<ProcessBehavior> {
    (0..n)
        .map(|i| generate_normal(format!("train_proc_{}", i), width, rng))
        .collect()
}

/// `normal` normal processes followed by `anomalous` anomalous ones, named `test_proc_{i}`.
pub fn test_set<R: Rng + ?Sized>(
    normal: usize,
    anomalous: usize,
    width: usize,
    rng: &mut R,
) -> Vec<ProcessBehavior> {
    (0..normal + anomalous)
        .map(|i| {
            let name = format!("test_proc_{}", i);
            if i < normal {
                generate_normal(name, width, rng)
            } else {
                generate_anomalous(name, width, rng)
            }
        })
        .collect()
}
