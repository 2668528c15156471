//! Path length through a partition tree and the `c(n)` normalization.

use super::tree::PartitionNode;
use crate::features::FeatureVector;

/// Euler–Mascheroni constant, truncated as in the standard Isolation Forest formula.
pub const EULER_GAMMA: f64 = 0.5772156649;

/// `H(k) ≈ ln(k) + γ`; zero for `k == 0`.
pub fn harmonic(k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    (k as f64).ln() + EULER_GAMMA
}

/// Average path length of an unsuccessful search in a random BST of `n` nodes:
/// `2 H(n-1) - 2 (n-1) / n`, and `0` for `n <= 1`.
pub fn c_factor(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let n_f = n as f64;
    2.0 * harmonic(n - 1) - 2.0 * (n_f - 1.0) / n_f
}

/// Depth at which `vector` terminates, adjusted at leaves by `c_factor(size)`.
///
/// An absent node counts as an empty leaf. When the side the vector routes to
/// was never built, the current depth is returned without adjustment; the
/// vector does not fall through to the other child.
pub fn path_length(node: Option<&PartitionNode>, vector: &FeatureVector, depth: usize) -> f64 {
    match node {
        None => depth as f64 + c_factor(0),
        Some(PartitionNode::Leaf { size }) => depth as f64 + c_factor(*size),
        Some(PartitionNode::Internal {
            attribute,
            threshold,
            left,
            right,
        }) => {
            let next = if vector.get(*attribute) < *threshold {
                left
            } else {
                right
            };
            match next {
                Some(child) => path_length(Some(child), vector, depth + 1),
                None => depth as f64,
            }
        }
    }
}
