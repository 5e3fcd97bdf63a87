// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Read-only key and value projections over a [`RankMap`].
//!
//! Neither type has a mutating method, so there is nothing for a caller to
//! call that could ever fail with a `ReadOnly`-style error — the guarantee
//! the base map enforces at runtime is enforced here at compile time instead.

use crate::btree::cursor::Iter;
use crate::btree::tree::RankMap;
use crate::error::MapResult;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A read-only view over a [`RankMap`]'s keys, in ascending order.
///
/// Obtained via [`RankMap::keys`]. Every call reads live state through a
/// non-owning pointer, not a borrow-checked `&'a RankMap<K, V>` — see
/// [`Iter`] for why that matters: the same reasoning applies here, since a
/// view built on a held borrow would make it impossible to mutate the map
/// while the view is still going to be used. There is no snapshot beyond
/// what [`Iter`] itself already provides.
pub struct Keys<'a, K, V> {
    map: NonNull<RankMap<K, V>>,
    _marker: PhantomData<&'a RankMap<K, V>>,
}

impl<'a, K, V> Keys<'a, K, V> {
    // See `Iter::new`: `map` is deliberately not typed `&'a RankMap<K, V>`,
    // so this call only borrows `map` for its own duration.
    pub(crate) fn new(map: &RankMap<K, V>) -> Self {
        Self {
            map: NonNull::from(map),
            _marker: PhantomData,
        }
    }

    // SAFETY: every accessor below reads through this pointer without ever
    // writing through it. As with `Iter`, the caller is trusted not to use
    // this view (or a reference it handed out) after the map it points at
    // has been dropped or moved — `'a` here names the intended lifetime,
    // it is not compiler-enforced against this pointer.
    fn map(&self) -> &'a RankMap<K, V> {
        unsafe { self.map.as_ref() }
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    /// Indexed access, delegating to [`RankMap::entry_at`].
    ///
    /// ## Error Conditions
    /// - `index` outside `[0, len())`: **OutOfRange**.
    pub fn get(&self, index: i64) -> MapResult<&'a K> {
        self.map().entry_at(index).map(|(k, _)| k)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map().contains_key(key)
    }

    /// Rank query, delegating to [`RankMap::index_of`].
    pub fn index_of(&self, key: &K) -> i64 {
        self.map().index_of(key)
    }

    pub fn iter(&self) -> KeysIter<'a, K, V> {
        KeysIter {
            inner: self.map().iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for Keys<'a, K, V> {
    type Item = &'a K;
    type IntoIter = KeysIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        KeysIter {
            inner: self.map().iter(),
        }
    }
}

/// Ascending-order iterator over a [`RankMap`]'s keys.
pub struct KeysIter<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for KeysIter<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// A read-only view over a [`RankMap`]'s values, in ascending key order.
///
/// Obtained via [`RankMap::values`]. See [`Keys`] for why this holds a
/// non-owning pointer rather than a borrow-checked reference.
pub struct Values<'a, K, V> {
    map: NonNull<RankMap<K, V>>,
    _marker: PhantomData<&'a RankMap<K, V>>,
}

impl<'a, K, V> Values<'a, K, V> {
    // See `Iter::new`: `map` is deliberately not typed `&'a RankMap<K, V>`,
    // so this call only borrows `map` for its own duration.
    pub(crate) fn new(map: &RankMap<K, V>) -> Self {
        Self {
            map: NonNull::from(map),
            _marker: PhantomData,
        }
    }

    // SAFETY: see `Keys::map` — read-only access through a pointer derived
    // from a live `'a` borrow.
    fn map(&self) -> &'a RankMap<K, V> {
        unsafe { self.map.as_ref() }
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    /// Indexed access, delegating to [`RankMap::entry_at`].
    ///
    /// ## Error Conditions
    /// - `index` outside `[0, len())`: **OutOfRange**.
    pub fn get(&self, index: i64) -> MapResult<&'a V> {
        self.map().entry_at(index).map(|(_, v)| v)
    }

    /// Membership test, delegating to [`RankMap::contains_value`].
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.map().contains_value(value)
    }

    pub fn iter(&self) -> ValuesIter<'a, K, V> {
        ValuesIter {
            inner: self.map().iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for Values<'a, K, V> {
    type Item = &'a V;
    type IntoIter = ValuesIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        ValuesIter {
            inner: self.map().iter(),
        }
    }
}

/// Ascending-key-order iterator over a [`RankMap`]'s values.
pub struct ValuesIter<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesIter<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}
