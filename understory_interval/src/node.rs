// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-resident tree nodes and bound maintenance.

use alloc::vec::Vec;

use crate::types::{Interval, Scalar};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// What a node holds. A node only ever moves from `Leaf` to `Internal`.
#[derive(Clone, Debug)]
pub(crate) enum Content<T> {
    Leaf(Vec<Interval<T>>),
    Internal(Vec<NodeIdx>),
}

impl<T> Default for Content<T> {
    fn default() -> Self {
        Self::Leaf(Vec::new())
    }
}

impl<T> Content<T> {
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Leaf(entries) => entries.len(),
            Self::Internal(children) => children.len(),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) bound: Option<Interval<T>>,
    pub(crate) content: Content<T>,
}

impl<T> Node<T> {
    pub(crate) const fn empty_leaf() -> Self {
        Self {
            bound: None,
            content: Content::Leaf(Vec::new()),
        }
    }
}

/// Node storage. Slots of discarded nodes are recycled through a free list.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
    free_list: Vec<NodeIdx>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn release(&mut self, idx: NodeIdx) {
        self.nodes[idx.get()] = Node::empty_leaf();
        self.free_list.push(idx);
    }

    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    #[inline]
    pub(crate) fn node(&self, idx: NodeIdx) -> &Node<T> {
        &self.nodes[idx.get()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<T> {
        &mut self.nodes[idx.get()]
    }
}

impl<T: Scalar> Arena<T> {
    pub(crate) fn alloc(&mut self, content: Content<T>) -> NodeIdx {
        let mut node = Node {
            bound: None,
            content,
        };
        node.bound = self.bound_of(&node.content);
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx.get()] = node;
            idx
        } else {
            self.nodes.push(node);
            NodeIdx::new(self.nodes.len() - 1)
        }
    }

    /// Full recomputation of the minimal interval enclosing `content`.
    ///
    /// Internal children without a bound contribute nothing.
    pub(crate) fn bound_of(&self, content: &Content<T>) -> Option<Interval<T>> {
        match content {
            Content::Leaf(entries) => {
                let mut it = entries.iter();
                let first = *it.next()?;
                Some(it.fold(first, |acc, e| acc.union(e)))
            }
            Content::Internal(children) => children
                .iter()
                .filter_map(|c| self.node(*c).bound)
                .reduce(|acc, b| acc.union(&b)),
        }
    }

    pub(crate) fn recompute_bound(&mut self, idx: NodeIdx) {
        let bound = self.bound_of(&self.node(idx).content);
        self.node_mut(idx).bound = bound;
    }
}
