// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Error types for `rankmap` operations.
//!
//! Provides structured error handling with detailed context for debugging.

use std::fmt;

/// Standard Result type for all `rankmap` operations.
pub type MapResult<T> = Result<T, MapError>;

/// Error types for `RankMap` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// `add` called with a key that already exists.
    DuplicateKey { key: String },

    /// `get` (or indexed read) on an absent key.
    KeyNotFound { key: String },

    /// `entry_at` (or a view's indexed access) with an index outside `[0, len())`.
    OutOfRange { index: i64, len: usize },

    /// A construction-time argument failed validation.
    BadArgument { reason: String },

    /// A traversal observed a mutation-counter mismatch.
    CollectionModified,

    /// `validate()` found a `total` mismatch somewhere in the tree.
    StructuralInvariant { reason: String },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { key } => {
                write!(f, "key '{}' already exists", key)
            }
            Self::KeyNotFound { key } => {
                write!(f, "key '{}' not found", key)
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {} out of range (len = {})", index, len)
            }
            Self::BadArgument { reason } => {
                write!(f, "bad argument: {}", reason)
            }
            Self::CollectionModified => {
                write!(f, "collection was modified during traversal")
            }
            Self::StructuralInvariant { reason } => {
                write!(f, "structural invariant violated: {}", reason)
            }
        }
    }
}

impl std::error::Error for MapError {}
