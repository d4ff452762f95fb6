// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use crate::error::TreeError;

/// Node capacity used by [`TreeConfig::default`].
pub const DEFAULT_MAX_LEAF_SIZE: usize = 3;

/// Configuration fixed when an [`IntervalTree`](crate::IntervalTree) is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// Maximum number of entries (leaf) or children (internal) a node may hold
    /// once an insert completes. One more triggers a split.
    pub max_leaf_size: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_leaf_size: DEFAULT_MAX_LEAF_SIZE,
        }
    }
}

impl TreeConfig {
    /// Configuration with the given node capacity.
    pub const fn new(max_leaf_size: usize) -> Self {
        Self { max_leaf_size }
    }

    /// Check that the capacity can hold both halves of a split.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.max_leaf_size < 2 {
            return Err(TreeError::InvalidCapacity {
                max_leaf_size: self.max_leaf_size,
            });
        }
        Ok(())
    }
}
