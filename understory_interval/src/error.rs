// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type returned by fallible tree operations.

use alloc::string::String;

/// Errors reported by [`IntervalTree`](crate::IntervalTree).
///
/// A call that returns an error leaves the tree exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The interval's low bound is greater than its high bound, or the bounds
    /// cannot be compared (NaN).
    #[error("invalid interval {0}: low bound must not exceed high bound")]
    InvalidInterval(String),

    /// The configured node capacity cannot hold a split result.
    #[error("invalid configuration: max_leaf_size must be at least 2, got {max_leaf_size}")]
    InvalidCapacity {
        /// The rejected capacity.
        max_leaf_size: usize,
    },

    /// The tree reached a state its own operations never produce.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(&'static str),
}
