// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Core types for the B+-Tree index backend.
//!
//! Defines the node-capacity configuration shared by every level of the tree,
//! and the comparator type callers may inject to override a key's natural order.

use crate::error::{MapError, MapResult};
use std::cmp::Ordering;

/// Minimum permitted node capacity.
///
/// Both internal and leaf capacities must be at least this large to permit the
/// half-split policy described in the node modules.
const MIN_CAPACITY: usize = 3;

/// Default number of children per internal node.
pub const DEFAULT_CAP_INTERNAL: usize = 16;

/// Default number of key-value pairs per leaf node (`cap_internal - 1`).
pub const DEFAULT_CAP_LEAF: usize = DEFAULT_CAP_INTERNAL - 1;

/// Fixed node-capacity configuration for a `RankMap`.
///
/// ## Constraints
/// - Both capacities must be `>= 3` (allows a meaningful half-split on overflow).
///
/// ## Example
/// ```rust
/// use rankmap::btree::types::Capacities;
///
/// let caps = Capacities::new(16, 15)?;
/// assert_eq!(caps.internal(), 16);
/// assert_eq!(caps.leaf(), 15);
/// # Ok::<(), rankmap::MapError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacities {
    cap_internal: usize,
    cap_leaf: usize,
}

impl Capacities {
    /// Create a new capacity configuration with validation.
    ///
    /// ## Error Conditions
    /// - Either capacity `< 3`: the half-split policy cannot leave both halves
    ///   with at least one entry.
    pub fn new(cap_internal: usize, cap_leaf: usize) -> MapResult<Self> {
        if cap_internal < MIN_CAPACITY {
            return Err(MapError::BadArgument {
                reason: format!(
                    "internal node capacity must be >= {}, got {}",
                    MIN_CAPACITY, cap_internal
                ),
            });
        }
        if cap_leaf < MIN_CAPACITY {
            return Err(MapError::BadArgument {
                reason: format!(
                    "leaf node capacity must be >= {}, got {}",
                    MIN_CAPACITY, cap_leaf
                ),
            });
        }
        Ok(Self {
            cap_internal,
            cap_leaf,
        })
    }

    /// Maximum number of children an internal node may hold before splitting.
    pub fn internal(&self) -> usize {
        self.cap_internal
    }

    /// Maximum number of key-value pairs a leaf may hold before splitting.
    pub fn leaf(&self) -> usize {
        self.cap_leaf
    }
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            cap_internal: DEFAULT_CAP_INTERNAL,
            cap_leaf: DEFAULT_CAP_LEAF,
        }
    }
}

/// A caller-injected total order over keys.
///
/// Must be total, deterministic, and consistent with equality: two keys are
/// considered equal iff the comparator returns [`Ordering::Equal`]. Violating
/// this contract breaks every structural invariant of the tree; the container
/// does not and cannot detect such violations itself.
pub type Comparator<K> = Box<dyn Fn(&K, &K) -> Ordering>;
