// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! The `RankMap` façade: owns the root, dispatches map operations to it,
//! and tracks the mutation counter that invalidates outstanding traversals.

use crate::btree::cursor::Iter;
use crate::btree::node::{InternalNode, LeafNode, Node};
use crate::btree::types::{Capacities, Comparator};
use crate::btree::views::{Keys, Values};
use crate::error::{MapError, MapResult};
use std::cmp::Ordering;
use std::ptr::NonNull;

/// An in-memory sorted associative container backed by a B+-Tree.
///
/// Keeps keys in ascending order under an injected (or natural) total
/// order, and in addition to the usual map operations answers two
/// positional questions in `O(log n)`: "what rank does this key hold"
/// ([`RankMap::index_of`]) and "what key/value sits at this rank"
/// ([`RankMap::entry_at`]).
///
/// ## Example
/// ```rust
/// use rankmap::RankMap;
///
/// let mut map: RankMap<String, i32> = RankMap::new();
/// map.add("3".to_string(), 3)?;
/// map.add("1".to_string(), 1)?;
/// map.add("2".to_string(), 2)?;
///
/// assert_eq!(map.index_of(&"2".to_string()), 1);
/// assert_eq!(map.entry_at(1)?.1, &2);
/// # Ok::<(), rankmap::MapError>(())
/// ```
pub struct RankMap<K, V> {
    root: Option<Node<K, V>>,
    comparator: Comparator<K>,
    caps: Capacities,
    mutation: u64,
}

impl<K: Ord, V> RankMap<K, V> {
    /// Construct an empty map ordered by `K`'s natural order, with default capacities.
    pub fn new() -> Self {
        Self::with_comparator(|a, b| a.cmp(b))
    }

    /// Construct an empty map with the given node capacities and natural key order.
    ///
    /// ## Error Conditions
    /// - Either capacity `< 3`: see [`Capacities::new`].
    pub fn with_capacities(cap_internal: usize, cap_leaf: usize) -> MapResult<Self> {
        Self::with_capacities_and_comparator(cap_internal, cap_leaf, |a, b| a.cmp(b))
    }

    /// Bulk-construct from an initial mapping, natural key order, default capacities.
    ///
    /// ## Error Conditions
    /// - A duplicate key in `entries`: **DuplicateKey**. Construction fails
    ///   atomically — the caller receives the error, not a partially-built map.
    pub fn from_entries(entries: impl IntoIterator<Item = (K, V)>) -> MapResult<Self>
    where
        K: Clone + std::fmt::Debug,
    {
        Self::from_entries_with_comparator(entries, |a, b| a.cmp(b))
    }
}

impl<K, V> RankMap<K, V> {
    /// Construct an empty map ordered by the given comparator, with default capacities.
    pub fn with_comparator(cmp: impl Fn(&K, &K) -> Ordering + 'static) -> Self {
        Self {
            root: None,
            comparator: Box::new(cmp),
            caps: Capacities::default(),
            mutation: 0,
        }
    }

    /// Construct an empty map with explicit capacities and a comparator.
    ///
    /// ## Error Conditions
    /// - Either capacity `< 3`: see [`Capacities::new`].
    pub fn with_capacities_and_comparator(
        cap_internal: usize,
        cap_leaf: usize,
        cmp: impl Fn(&K, &K) -> Ordering + 'static,
    ) -> MapResult<Self> {
        Ok(Self {
            root: None,
            comparator: Box::new(cmp),
            caps: Capacities::new(cap_internal, cap_leaf)?,
            mutation: 0,
        })
    }

    /// Bulk-construct from an initial mapping under the given comparator.
    ///
    /// ## Error Conditions
    /// - A duplicate key in `entries`: **DuplicateKey**, atomically (see [`Self::from_entries`]).
    pub fn from_entries_with_comparator(
        entries: impl IntoIterator<Item = (K, V)>,
        cmp: impl Fn(&K, &K) -> Ordering + 'static,
    ) -> MapResult<Self>
    where
        K: Clone + std::fmt::Debug,
    {
        let mut map = Self::with_comparator(cmp);
        for (k, v) in entries {
            map.add(k, v)?;
        }
        Ok(map)
    }

    fn ensure_root(&mut self) {
        if self.root.is_none() {
            self.root = Some(Node::Leaf(Box::new(LeafNode::new())));
        }
    }

    fn grow_root(&mut self, sibling: Node<K, V>)
    where
        K: Clone,
    {
        let old_root = self.root.take().expect("grow_root called with no root");
        self.root = Some(Node::Internal(Box::new(InternalNode::new_root(
            old_root, sibling,
        ))));
    }

    fn bump(&mut self) {
        self.mutation = self.mutation.wrapping_add(1);
    }

    pub(crate) fn mutation(&self) -> u64 {
        self.mutation
    }

    pub(crate) fn leftmost_leaf(&self) -> Option<NonNull<LeafNode<K, V>>> {
        self.root.as_ref().map(Node::leftmost_leaf)
    }

    pub(crate) fn comparator(&self) -> &Comparator<K> {
        &self.comparator
    }

    pub(crate) fn root_ref(&self) -> Option<&Node<K, V>> {
        self.root.as_ref()
    }

    /// Insert `(key, value)`.
    ///
    /// ## Error Conditions
    /// - `key` already present: **DuplicateKey**. The tree is left unchanged
    ///   and the mutation counter is not bumped.
    pub fn add(&mut self, key: K, value: V) -> MapResult<()>
    where
        K: Clone + std::fmt::Debug,
    {
        self.ensure_root();
        let split = self
            .root
            .as_mut()
            .expect("ensure_root just populated it")
            .add(key, value, &self.comparator, &self.caps)?;
        if let Some(sibling) = split {
            self.grow_root(sibling);
        }
        self.bump();
        Ok(())
    }

    /// Upsert `(key, value)`, returning the previous value if `key` was present.
    ///
    /// Never fails for a well-formed key.
    pub fn set(&mut self, key: K, value: V) -> Option<V>
    where
        K: Clone,
    {
        self.ensure_root();
        let (old, split) = self
            .root
            .as_mut()
            .expect("ensure_root just populated it")
            .set(key, value, &self.comparator, &self.caps);
        if let Some(sibling) = split {
            self.grow_root(sibling);
        }
        self.bump();
        old
    }

    /// Look up `key`.
    ///
    /// ## Error Conditions
    /// - `key` absent: **KeyNotFound**.
    pub fn get(&self, key: &K) -> MapResult<&V>
    where
        K: std::fmt::Debug,
    {
        self.try_get(key).ok_or_else(|| MapError::KeyNotFound {
            key: format!("{:?}", key),
        })
    }

    /// Look up `key`, returning `None` rather than failing on a miss.
    pub fn try_get(&self, key: &K) -> Option<&V> {
        self.root.as_ref()?.get(key, &self.comparator)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.try_get(key).is_some()
    }

    /// Whether any stored value equals `value`. Linear scan via the ordered traversal.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Remove `key`, returning whether it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(root) = self.root.as_mut() else {
            return false;
        };
        let removed = root.remove(key, &self.comparator).is_some();
        if removed {
            self.bump();
        }
        removed
    }

    /// Drop every entry. `len()` becomes zero.
    pub fn clear(&mut self) {
        self.root = None;
        self.bump();
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, Node::total)
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rank query: the zero-based index of `key` if present, or the bitwise
    /// complement of the position it would occupy if inserted.
    ///
    /// ## Performance
    /// `O(log n)` node visits.
    pub fn index_of(&self, key: &K) -> i64 {
        match &self.root {
            None => !0i64,
            Some(root) => root.index_of(key, &self.comparator, 0),
        }
    }

    /// Positional query: the key/value pair at zero-based `index` in ascending order.
    ///
    /// ## Error Conditions
    /// - `index` outside `[0, len())`: **OutOfRange**.
    ///
    /// ## Performance
    /// `O(log n)` node visits.
    pub fn entry_at(&self, index: i64) -> MapResult<(&K, &V)> {
        let len = self.len();
        if index < 0 || index as usize >= len {
            return Err(MapError::OutOfRange { index, len });
        }
        Ok(self
            .root
            .as_ref()
            .expect("len() > 0 implies a root exists")
            .entry_at(index as usize))
    }

    /// An ordered traversal over `(&K, &V)` pairs, ascending by key.
    ///
    /// Invalidated by any mutation made to this map after the cursor is
    /// created; see [`Iter`]. The returned cursor's lifetime parameter is
    /// deliberately not tied to this call's borrow of `self` — a mutable
    /// borrow of the map must still be obtainable while a cursor is
    /// outstanding, or §4.7's traversal-invalidation contract could never
    /// be exercised. See [`Iter`]'s doc comment for the full reasoning.
    pub fn iter<'a>(&self) -> Iter<'a, K, V>
    where
        K: 'a,
        V: 'a,
    {
        Iter::new(self)
    }

    /// A read-only view over just the keys, in ascending order.
    pub fn keys<'a>(&self) -> Keys<'a, K, V>
    where
        K: 'a,
        V: 'a,
    {
        Keys::new(self)
    }

    /// A read-only view over just the values, in ascending key order.
    pub fn values<'a>(&self) -> Values<'a, K, V>
    where
        K: 'a,
        V: 'a,
    {
        Values::new(self)
    }
}

impl<K: Ord, V> Default for RankMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
