// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Library
//!
//! An in-memory indexed container keyed by sequences of comparable pieces,
//! with exact lookup and, layered on the same structure, wildcard pattern
//! matching.
//!
//! Two structures are provided:
//!
//! * [`LanaiTrie`]: the base ordered, multi-valued trie with add/remove/
//!   search, membership, counting, and lazy ordered enumeration with
//!   mutation detection.
//! * [`PatternTrie`]: built on the trie; stored keys are patterns carrying
//!   two reserved wildcard pieces, and [`PatternTrie::collect`] returns the
//!   values of every pattern matching a literal query.
//!
//! Both are purely in-memory, synchronous, and single-owner: there is no
//! internal locking, and concurrent mutation requires external
//! synchronization.

pub mod pattern;
pub mod trie;

// Re-export the structure types at the crate root.
pub use pattern::{PatternResult, PatternTrie, PatternTrieError};
pub use trie::{Iter, LanaiTrie, TrieError, TrieResult};

// Crate-internal test modules.
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai Trie library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
