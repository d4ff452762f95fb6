// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only pre-order traversal and text rendering.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::node::{Arena, Content, Node, NodeIdx};
use crate::tree::IntervalTree;
use crate::types::{Interval, Scalar};

/// One node as seen by [`IntervalTree::walk`].
#[derive(Copy, Clone, Debug)]
pub struct NodeView<'a, T> {
    depth: usize,
    node: &'a Node<T>,
}

impl<'a, T: Copy> NodeView<'a, T> {
    /// Nesting depth; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Cached bound of the node, `None` only for an empty root.
    pub fn bound(&self) -> Option<Interval<T>> {
        self.node.bound
    }

    /// True for nodes that hold intervals directly.
    pub fn is_leaf(&self) -> bool {
        self.node.content.is_leaf()
    }

    /// Intervals stored in a leaf, in insertion (or post-split) order.
    /// Empty for internal nodes.
    pub fn entries(&self) -> &'a [Interval<T>] {
        match &self.node.content {
            Content::Leaf(entries) => entries.as_slice(),
            Content::Internal(_) => &[],
        }
    }

    /// Number of direct children of an internal node; zero for leaves.
    pub fn child_count(&self) -> usize {
        match &self.node.content {
            Content::Leaf(_) => 0,
            Content::Internal(children) => children.len(),
        }
    }
}

/// Lazy depth-first pre-order iterator over the nodes of a tree.
#[derive(Clone, Debug)]
pub struct Walk<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<(NodeIdx, usize)>,
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = NodeView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth) = self.stack.pop()?;
        let node = self.arena.node(idx);
        if let Content::Internal(children) = &node.content {
            // Reverse so the first child is visited first.
            self.stack
                .extend(children.iter().rev().map(|&c| (c, depth + 1)));
        }
        Some(NodeView { depth, node })
    }
}

impl<T: Scalar> IntervalTree<T> {
    /// Walk every node in depth-first pre-order, children in stored order.
    ///
    /// The walk only reads the tree, so calling it repeatedly without an
    /// intervening insert yields identical sequences.
    pub fn walk(&self) -> Walk<'_, T> {
        Walk {
            arena: self.arena(),
            stack: vec![(self.root(), 0)],
        }
    }

    /// All stored intervals, leaf by leaf in walk order.
    pub fn intervals(&self) -> impl Iterator<Item = Interval<T>> + '_ {
        self.walk().flat_map(|view| view.entries().iter().copied())
    }

    /// Number of levels, counting a lone root as 1.
    pub fn height(&self) -> usize {
        self.walk().map(|view| view.depth() + 1).max().unwrap_or(0)
    }
}

/// Renders one line per node (`MBR: [lo, hi]`) and one per stored interval
/// (`Segment: [lo, hi]`), indented two spaces per level.
impl<T: Scalar + Display> Display for IntervalTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for view in self.walk() {
            let indent = view.depth() * 2;
            match view.bound() {
                Some(bound) => writeln!(f, "{:indent$}MBR: {bound}", "")?,
                None => writeln!(f, "{:indent$}MBR: None", "")?,
            }
            for segment in view.entries() {
                writeln!(f, "{:width$}Segment: {segment}", "", width = indent + 2)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn demo_tree() -> IntervalTree<i64> {
        let mut tree = IntervalTree::with_max_leaf_size(3).unwrap();
        for s in [(2, 10), (2, 7), (3, 4), (4, 6), (5, 8), (5, 10)] {
            tree.insert(s).unwrap();
        }
        tree
    }

    #[test]
    fn walk_is_preorder_with_depths() {
        let tree = demo_tree();
        let shape: Vec<_> = tree
            .walk()
            .map(|v| (v.depth(), v.bound(), v.is_leaf(), v.entries().len()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (0, Some(Interval::new(2, 10)), false, 0),
                (1, Some(Interval::new(2, 10)), false, 0),
                (2, Some(Interval::new(2, 10)), true, 2),
                (2, Some(Interval::new(5, 10)), true, 2),
                (1, Some(Interval::new(3, 6)), true, 2),
            ]
        );
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn walk_twice_is_identical() {
        let tree = demo_tree();
        let a: Vec<_> = tree.walk().map(|v| (v.depth(), v.bound(), v.entries())).collect();
        let b: Vec<_> = tree.walk().map(|v| (v.depth(), v.bound(), v.entries())).collect();
        assert_eq!(a, b);
        assert_eq!(tree.to_string(), tree.to_string());
    }

    #[test]
    fn intervals_follow_leaf_order() {
        let tree = demo_tree();
        let all: Vec<_> = tree.intervals().collect();
        assert_eq!(
            all,
            vec![
                Interval::new(2, 10),
                Interval::new(2, 7),
                Interval::new(5, 8),
                Interval::new(5, 10),
                Interval::new(3, 4),
                Interval::new(4, 6),
            ]
        );
    }

    #[test]
    fn child_count_reports_fanout() {
        let tree = demo_tree();
        let counts: Vec<_> = tree.walk().map(|v| v.child_count()).collect();
        assert_eq!(counts, vec![2, 2, 0, 0, 0]);
    }

    #[test]
    fn renders_demo_layout() {
        let expected = "\
MBR: [2, 10]
  MBR: [2, 10]
    MBR: [2, 10]
      Segment: [2, 10]
      Segment: [2, 7]
    MBR: [5, 10]
      Segment: [5, 8]
      Segment: [5, 10]
  MBR: [3, 6]
    Segment: [3, 4]
    Segment: [4, 6]
";
        assert_eq!(demo_tree().to_string(), expected);
    }

    #[test]
    fn empty_tree_renders_none_bound() {
        let tree = IntervalTree::<f64>::new();
        assert_eq!(tree.to_string(), "MBR: None\n");
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.intervals().count(), 0);
    }
}
