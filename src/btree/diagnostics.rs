// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Structural validation and pretty-printing.
//!
//! Both compile unconditionally — gating them behind `cfg(debug_assertions)`
//! would make them untestable in release-mode CI. Neither is invoked
//! implicitly by any mutating operation; they are for tests and explicit
//! diagnostic call sites only.

use crate::btree::node::Node;
use crate::btree::tree::RankMap;
use crate::error::MapResult;

impl<K, V> RankMap<K, V> {
    /// Recompute `total` bottom-up across the whole tree and fail on the
    /// first node whose stored value disagrees with the recomputation.
    ///
    /// ## Error Conditions
    /// - A subtree cardinality mismatch anywhere in the tree: **StructuralInvariant**.
    pub fn validate(&self) -> MapResult<()> {
        if let Some(root) = self.root_ref() {
            root.validate()?;
        }
        Ok(())
    }

    /// Render the tree as indented text: each separator key on its own line
    /// with its subtree count, recursing into children; each leaf entry
    /// printed as `key: value` at its depth.
    pub fn dump(&self) -> String
    where
        K: std::fmt::Debug,
        V: std::fmt::Debug,
    {
        let mut out = String::new();
        match self.root_ref() {
            None => out.push_str("(empty)\n"),
            Some(root) => dump_node(root, 0, &mut out),
        }
        out
    }
}

fn dump_node<K: std::fmt::Debug, V: std::fmt::Debug>(
    node: &Node<K, V>,
    depth: usize,
    out: &mut String,
) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf(leaf) => {
            for (key, value) in leaf.keys.iter().zip(leaf.values.iter()) {
                out.push_str(&format!("{}{:?}: {:?}\n", indent, key, value));
            }
        }
        Node::Internal(internal) => {
            for (key, child) in internal.keys.iter().zip(internal.children.iter()) {
                out.push_str(&format!(
                    "{}{:?} (subtree={})\n",
                    indent,
                    key,
                    child.total()
                ));
                dump_node(child, depth + 1, out);
            }
        }
    }
}
