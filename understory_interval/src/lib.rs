// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_interval --heading-base-level=0

//! Understory Interval: a one-dimensional R-tree over segments.
//!
//! Understory Interval indexes closed intervals `[low, high]` in a tree of
//! bounding intervals, the one-dimensional analogue of an R-tree's bounding
//! rectangles.
//!
//! - Insert segments one at a time; each descends to the child whose bound
//!   grows least, ties going to the earlier child.
//! - Nodes that exceed the configured capacity split at the midpoint after
//!   sorting by lower bound. A split root grows the tree by one level.
//! - Walk the finished structure in pre-order with [`IntervalTree::walk`], or
//!   print it through its [`Display`](core::fmt::Display) impl.
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, `i64`) and uses a
//! widened accumulator (f32→f64, f64→f64, i64→i128) for span arithmetic.
//!
//! # Example
//!
//! ```rust
//! use understory_interval::{Interval, IntervalTree};
//!
//! let mut tree: IntervalTree<i64> = IntervalTree::with_max_leaf_size(3).unwrap();
//! for s in [(2, 10), (2, 7), (3, 4), (4, 6)] {
//!     tree.insert(s).unwrap();
//! }
//!
//! // The fourth insert overflowed the root leaf and split it in two.
//! let bounds: Vec<_> = tree.walk().map(|n| (n.depth(), n.bound())).collect();
//! assert_eq!(
//!     bounds,
//!     [
//!         (0, Some(Interval::new(2, 10))),
//!         (1, Some(Interval::new(2, 10))),
//!         (1, Some(Interval::new(3, 6))),
//!     ]
//! );
//!
//! // Duplicates are only detected inside the leaf the descent selects.
//! assert!(!tree.insert((2, 7)).unwrap());
//! ```
//!
//! Invalid input is rejected without touching the tree:
//!
//! ```rust
//! use understory_interval::{IntervalTree, TreeError};
//!
//! let mut tree = IntervalTree::<f64>::new();
//! assert!(matches!(tree.insert((3.0, 1.0)), Err(TreeError::InvalidInterval(_))));
//! assert!(IntervalTree::<f64>::with_max_leaf_size(1).is_err());
//! assert!(tree.is_empty());
//! ```
//!
//! ## Known limitations
//!
//! - Duplicate suppression is local to the selected leaf. An interval equal to
//!   one stored under a sibling leaf is stored again.
//! - The tree is not height-balanced; leaves can sit at different depths.
//!   Sorted disjoint input builds a spine about `n / 2` levels deep. Insertion
//!   and traversal never recurse, so depth costs time but not call stack.
//! - There are no removal or overlap-query operations.
//!
//! ### Float semantics
//!
//! NaN bounds are rejected on insert. Infinite bounds are accepted, but
//! enlargement costs involving them may be NaN, in which case the first child
//! is kept.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
mod node;
pub mod tree;
pub mod types;
pub mod walk;

pub use config::{DEFAULT_MAX_LEAF_SIZE, TreeConfig};
pub use error::TreeError;
pub use tree::IntervalTree;
pub use types::{Interval, Scalar};
pub use walk::{NodeView, Walk};

/// Interval tree over `i64` bounds with `i128` span arithmetic.
pub type IntervalTreeI64 = IntervalTree<i64>;

/// Interval tree over `f32` bounds with `f64` span arithmetic.
pub type IntervalTreeF32 = IntervalTree<f32>;

/// Interval tree over `f64` bounds.
pub type IntervalTreeF64 = IntervalTree<f64>;
