// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Ordered traversal over a [`RankMap`], threading the leaf chain instead of
//! re-descending from the root for every element.

use crate::btree::node::LeafNode;
use crate::btree::tree::RankMap;
use crate::error::{MapError, MapResult};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A lazy, ascending-order sequence of `(&K, &V)` pairs over a [`RankMap`].
///
/// Obtained via [`RankMap::iter`]. Captures the map's mutation counter at
/// construction; any mutation to the map after that point permanently
/// exhausts the cursor. `next()` (the `Iterator` impl) treats that as plain
/// end-of-sequence; [`Iter::try_next`] surfaces it as
/// [`MapError::CollectionModified`] for callers that need to tell the two
/// apart.
///
/// `map` is a non-owning pointer, not a borrow-checked `&'a RankMap<K, V>`.
/// A borrow-checked reference would make §4.7's required behavior —
/// mutate the map while a traversal is outstanding, then have the *next*
/// `try_next` observe the mismatch and fail — impossible to express: the
/// compiler would refuse to compile the mutating call at all while this
/// `Iter` is still going to be used. The mutation counter is therefore the
/// *only* thing standing between this cursor and a stale read; it is what
/// this type actually relies on for correctness, the same way the leaf
/// thread (`LeafNode::next`) relies on the tree not being mutated while a
/// raw pointer into it is in use. Holding a reference returned by a call
/// made before a subsequent mutating call, across that mutation, is a
/// logic error this type does not catch — only the *next* `try_next` call
/// detects it.
pub struct Iter<'a, K, V> {
    map: NonNull<RankMap<K, V>>,
    current: Option<NonNull<LeafNode<K, V>>>,
    slot: usize,
    seen: u64,
    exhausted: bool,
    _marker: PhantomData<&'a RankMap<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    // `map` is deliberately not typed `&'a RankMap<K, V>` — naming the same
    // `'a` here would tie this call's borrow of `map` to the returned
    // value's lifetime parameter via ordinary borrow-checking, which is
    // precisely the coupling this type exists to avoid (see the struct's
    // doc comment). The borrow only needs to last for this function call.
    pub(crate) fn new(map: &RankMap<K, V>) -> Self {
        Self {
            current: map.leftmost_leaf(),
            seen: map.mutation(),
            map: NonNull::from(map),
            slot: 0,
            exhausted: false,
            _marker: PhantomData,
        }
    }

    /// Yield the next pair, or `Ok(None)` once exhausted.
    ///
    /// ## Error Conditions
    /// - The map was mutated since this cursor was created, or since the
    ///   last call: **CollectionModified**. The cursor is permanently
    ///   exhausted afterward; obtain a fresh [`RankMap::iter`] to continue.
    pub fn try_next(&mut self) -> MapResult<Option<(&'a K, &'a V)>> {
        if self.exhausted {
            return Ok(None);
        }

        // SAFETY: `map` was derived from a live `&RankMap` at construction
        // and nothing here writes through it; this read is exactly the
        // runtime check that replaces the compile-time enforcement a
        // borrow-checked reference would otherwise provide.
        let current_mutation = unsafe { self.map.as_ref() }.mutation();
        if current_mutation != self.seen {
            self.exhausted = true;
            return Err(MapError::CollectionModified);
        }

        loop {
            let Some(ptr) = self.current else {
                self.exhausted = true;
                return Ok(None);
            };

            // SAFETY: no mutation has been observed since `seen` was
            // captured (checked above), so every leaf reachable from this
            // cursor's starting point is still in the shape it had at
            // capture time, and this pointer is still valid to dereference.
            let leaf: &'a LeafNode<K, V> = unsafe { ptr.as_ref() };

            if self.slot < leaf.keys.len() {
                let pair = (&leaf.keys[self.slot], &leaf.values[self.slot]);
                self.slot += 1;
                return Ok(Some(pair));
            }

            self.current = leaf.next;
            self.slot = 0;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().unwrap_or(None)
    }
}
