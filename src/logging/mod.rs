mod format;

pub use format::{DetectionLine, StructuredLogger};
