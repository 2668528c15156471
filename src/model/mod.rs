//! Isolation Forest anomaly model over syscall-frequency vectors.

mod forest;
mod path;
mod tree;

pub use forest::{IsolationForest, DEGENERATE_SCORE};
pub use path::{c_factor, harmonic, path_length, EULER_GAMMA};
pub use tree::{PartitionNode, PartitionTree};
