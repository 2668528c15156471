//! Randomized partition trees.
//!
//! Each internal node splits on a uniformly chosen syscall at a threshold drawn
//! uniformly from the observed `[min, max]` of that syscall among the samples
//! reaching it. No balancing and no gain criterion: outliers end up close to
//! the root on average, inliers deep.

use crate::features::FeatureVector;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum PartitionNode {
    /// Terminal node; `size` is the number of training samples that reached it
    Leaf { size: usize },
    /// `value < threshold` goes left, otherwise right. A side that received no
    /// samples during construction has no child.
    Internal {
        attribute: usize,
        threshold: u32,
        left: Option<Box<PartitionNode>>,
        right: Option<Box<PartitionNode>>,
    },
}

impl PartitionNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, PartitionNode::Leaf { .. })
    }

    fn children(&self) -> impl Iterator<Item = &PartitionNode> {
        let (left, right) = match self {
            PartitionNode::Leaf { .. } => (None, None),
            PartitionNode::Internal { left, right, .. } => (left.as_deref(), right.as_deref()),
        };
        left.into_iter().chain(right)
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            PartitionNode::Leaf { .. } => 1,
            PartitionNode::Internal { .. } => self.children().map(PartitionNode::leaf_count).sum(),
        }
    }

    /// Sum of leaf sizes below this node
    pub fn sample_count(&self) -> usize {
        match self {
            PartitionNode::Leaf { size } => *size,
            PartitionNode::Internal { .. } => {
                self.children().map(PartitionNode::sample_count).sum()
            }
        }
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        self.children().map(|c| c.depth() + 1).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionTree {
    root: PartitionNode,
    max_depth: usize,
}

impl PartitionTree {
    /// Build a tree over `samples[i]` for every `i` in `indices`.
    ///
    /// `indices` may repeat (subsamples are drawn with replacement) and must
    /// not be empty. Attributes are drawn from `[0, width)`.
    pub fn build<R: Rng + ?Sized>(
        samples: &[FeatureVector],
        indices: &[usize],
        width: usize,
        max_depth: usize,
        rng: &mut R,
    ) -> Self {
        let builder = Builder {
            samples,
            width,
            max_depth,
        };
        Self {
            root: builder.node(indices, 0, rng),
            max_depth,
        }
    }

    pub fn root(&self) -> &PartitionNode {
        &self.root
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn path_length(&self, vector: &FeatureVector) -> f64 {
        super::path::path_length(Some(&self.root), vector, 0)
    }
}

struct Builder<'a> {
    samples: &'a [FeatureVector],
    width: usize,
    max_depth: usize,
}

impl Builder<'_> {
    fn node<R: Rng + ?Sized>(&self, indices: &[usize], depth: usize, rng: &mut R) -> PartitionNode {
        let size = indices.len();
        if depth >= self.max_depth || size <= 1 {
            return PartitionNode::Leaf { size };
        }

        let attribute = rng.gen_range(0..self.width);
        let value = |i: usize| self.samples[i].get(attribute);

        let (min, max) = indices
            .iter()
            .map(|&i| value(i))
            .fold((u32::MAX, u32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min == max {
            return PartitionNode::Leaf { size };
        }

        let threshold = rng.gen_range(min..=max);
        let (left, right): (Vec<usize>, Vec<usize>) =
            indices.iter().partition(|&&i| value(i) < threshold);

        let left = (!left.is_empty()).then(|| Box::new(self.node(&left, depth + 1, rng)));
        let right = (!right.is_empty()).then(|| Box::new(self.node(&right, depth + 1, rng)));

        PartitionNode::Internal {
            attribute,
            threshold,
            left,
            right,
        }
    }
}
