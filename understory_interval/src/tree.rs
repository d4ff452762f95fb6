// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interval R-tree: best-fit descent, midpoint splits, and root growth.

use alloc::vec;
use core::fmt::{self, Debug};

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::node::{Arena, Content, NodeIdx};
use crate::types::{Interval, Scalar, ScalarAcc, cmp_t};

/// A one-dimensional R-tree over closed intervals.
///
/// Entries are stored in leaves; internal nodes cache the minimal interval
/// covering their children. Every node holds at most
/// [`max_leaf_size`](Self::max_leaf_size) entries or children once an insert
/// returns.
///
/// Duplicate suppression only inspects the leaf chosen for the insert. An
/// interval equal to one filed under a different leaf is stored again.
#[derive(Clone)]
pub struct IntervalTree<T: Scalar> {
    config: TreeConfig,
    root: NodeIdx,
    arena: Arena<T>,
    len: usize,
}

/// Outcome of one insert: whether the leaf took the segment, and whether the
/// root overflowed and split.
#[derive(Copy, Clone, Debug)]
struct Descent {
    stored: bool,
    split: bool,
}

impl<T: Scalar> Default for IntervalTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> IntervalTree<T> {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(TreeConfig::default())
    }

    /// Create an empty tree whose nodes split above `max_leaf_size` entries.
    pub fn with_max_leaf_size(max_leaf_size: usize) -> Result<Self, TreeError> {
        Self::with_config(TreeConfig::new(max_leaf_size))
    }

    /// Create an empty tree from an explicit configuration.
    pub fn with_config(config: TreeConfig) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TreeConfig) -> Self {
        let mut arena = Arena::default();
        let root = arena.alloc(Content::default());
        Self {
            config,
            root,
            arena,
            len: 0,
        }
    }

    /// Node capacity this tree was built with.
    pub fn max_leaf_size(&self) -> usize {
        self.config.max_leaf_size
    }

    /// Number of intervals stored across all leaves.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of reachable nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Bound of the whole tree, `None` while empty.
    pub fn root_bound(&self) -> Option<Interval<T>> {
        self.arena.node(self.root).bound
    }

    /// Insert a segment.
    ///
    /// Returns `Ok(false)` when an equal interval already sits in the leaf the
    /// descent selected; the tree is left untouched in that case.
    ///
    /// Inverted or incomparable bounds are rejected with
    /// [`TreeError::InvalidInterval`] before any node is touched.
    pub fn insert(&mut self, segment: impl Into<Interval<T>>) -> Result<bool, TreeError> {
        let segment = segment.into();
        if !segment.is_valid() {
            let err = segment.invalid();
            log::warn!("rejecting insert: {err}");
            return Err(err);
        }
        let descent = self.insert_along_path(segment)?;
        if descent.stored {
            self.len += 1;
        } else {
            log::trace!("duplicate {segment:?} suppressed in selected leaf");
        }
        if descent.split {
            self.grow_root();
        }
        Ok(descent.stored)
    }

    /// Descend to a leaf, store `segment` there, then fix bounds and split
    /// overflowing nodes from the leaf back up to the root.
    ///
    /// The whole path is selected before the first write, so a selection error
    /// leaves the tree untouched. The path lives on the heap: sorted input
    /// grows a spine about `n / 2` levels deep.
    fn insert_along_path(&mut self, segment: Interval<T>) -> Result<Descent, TreeError> {
        let mut path = vec![self.root];
        let mut idx = self.root;
        while !self.arena.node(idx).content.is_leaf() {
            idx = self.choose_child(idx, &segment)?;
            path.push(idx);
        }
        let stored = match &mut self.arena.node_mut(idx).content {
            Content::Leaf(entries) if !entries.contains(&segment) => {
                entries.push(segment);
                true
            }
            _ => false,
        };
        let mut split = false;
        for &node in path.iter().rev() {
            self.arena.recompute_bound(node);
            split = self.arena.node(node).content.len() > self.config.max_leaf_size;
            if split {
                self.split(node);
            }
        }
        // `split` now describes the root, the last node on the way up.
        Ok(Descent { stored, split })
    }

    /// Child whose bound grows least to cover `segment`; the first minimum wins.
    fn choose_child(&self, idx: NodeIdx, segment: &Interval<T>) -> Result<NodeIdx, TreeError> {
        let Content::Internal(children) = &self.arena.node(idx).content else {
            return Err(TreeError::InternalInconsistency("child selection on a leaf"));
        };
        let mut best: Option<(NodeIdx, ScalarAcc<T>)> = None;
        for &child in children {
            let bound = self
                .arena
                .node(child)
                .bound
                .ok_or(TreeError::InternalInconsistency("child node without a bound"))?;
            let cost = bound.enlargement(segment);
            if best.map(|(_, bc)| cost < bc).unwrap_or(true) {
                best = Some((child, cost));
            }
        }
        best.map(|(child, _)| child)
            .ok_or(TreeError::InternalInconsistency("internal node without children"))
    }

    /// Sort content by lower bound, cut at the midpoint, and turn `idx` into an
    /// internal node over the two halves.
    fn split(&mut self, idx: NodeIdx) {
        let content = core::mem::take(&mut self.arena.node_mut(idx).content);
        let count = content.len();
        let mid = count / 2;
        let (left, right) = match content {
            Content::Leaf(mut entries) => {
                entries.sort_by(|a, b| cmp_t(&a.low(), &b.low()));
                let right = entries.split_off(mid);
                (Content::Leaf(entries), Content::Leaf(right))
            }
            Content::Internal(mut children) => {
                let arena = &self.arena;
                let low_of = |c: &NodeIdx| arena.node(*c).bound.map(|bd| bd.low());
                children.sort_by(|a, b| cmp_t(&low_of(a), &low_of(b)));
                let right = children.split_off(mid);
                (Content::Internal(children), Content::Internal(right))
            }
        };
        let left = self.arena.alloc(left);
        let right = self.arena.alloc(right);
        self.arena.node_mut(idx).content = Content::Internal(vec![left, right]);
        self.arena.recompute_bound(idx);
        log::debug!(
            "split node {} ({count} entries) into {} + {}",
            idx.get(),
            mid,
            count - mid
        );
    }

    /// Move the split root's two children under a fresh root node.
    fn grow_root(&mut self) {
        let old = self.root;
        let children = core::mem::take(&mut self.arena.node_mut(old).content);
        debug_assert!(
            matches!(&children, Content::Internal(c) if c.len() == 2),
            "root split must leave exactly two children"
        );
        let new_root = self.arena.alloc(children);
        self.arena.release(old);
        self.root = new_root;
        log::debug!("root grew: node {} replaces node {}", new_root.get(), old.get());
    }

    pub(crate) fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    pub(crate) fn root(&self) -> NodeIdx {
        self.root
    }
}

impl<T: Scalar> Debug for IntervalTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalTree")
            .field("max_leaf_size", &self.config.max_leaf_size)
            .field("len", &self.len)
            .field("nodes", &self.arena.live())
            .field("bound", &self.root_bound())
            .finish_non_exhaustive()
    }
}
