// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a small interval tree and print its structure.
//!
//! Run with `RUST_LOG=debug` to see splits as they happen.

use understory_interval::{IntervalTree, TreeError};

fn main() -> Result<(), TreeError> {
    env_logger::init();

    let mut tree: IntervalTree<i64> = IntervalTree::with_max_leaf_size(3)?;
    for segment in [(2, 10), (2, 7), (3, 4), (4, 6), (5, 8), (5, 10)] {
        tree.insert(segment)?;
    }

    println!("R-tree:");
    print!("{tree}");
    println!(
        "{} segments in {} nodes, height {}",
        tree.len(),
        tree.node_count(),
        tree.height()
    );
    Ok(())
}
