// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! B+-Tree-backed rank-aware associative container.
//!
//! - [`types`] — node capacity configuration and the comparator type.
//! - [`node`] — leaf and internal node layouts and their split/routing logic.
//! - [`tree`] — the [`RankMap`] façade: construction, map operations, rank
//!   and positional queries.
//! - [`cursor`] — the ordered traversal cursor.
//! - [`views`] — read-only key/value projections.
//! - [`diagnostics`] — structural validation and pretty-printing.

pub mod cursor;
mod diagnostics;
pub mod node;
pub mod tree;
pub mod types;
pub mod views;

pub use cursor::Iter;
pub use tree::RankMap;
pub use types::{Capacities, Comparator};
pub use views::{Keys, Values};
