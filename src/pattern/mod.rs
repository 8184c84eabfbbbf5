// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pattern Trie: wildcard pattern matching over a [`LanaiTrie`].
//!
//! Stored keys are *patterns*: literal pieces interleaved with two reserved
//! sentinel pieces supplied at construction. `wildcard_single` matches
//! exactly one query piece; `wildcard_series` matches a contiguous run of
//! zero or more. [`PatternTrie::collect`] walks the trie guided by a literal
//! query, branching at wildcard children, and returns the union of values
//! from every matching pattern.
//!
//! # Example
//!
//! ```
//! use lanai_trie::PatternTrie;
//!
//! // '?' matches any one char, '*' any run of chars.
//! let mut patterns = PatternTrie::new('?', '*').unwrap();
//! patterns.add(&['*'], "anything");
//! patterns.add(&['a', '*'], "a-prefixed");
//! patterns.add(&['a', '?'], "two chars starting with a");
//!
//! let hits = patterns.collect(&['a', 'b']);
//! assert_eq!(hits.len(), 3);
//!
//! let hits = patterns.collect(&['b', 'c']);
//! assert_eq!(hits, vec!["anything"]);
//! ```
//!
//! # Matching semantics
//!
//! A state `(node, idx)` means the pattern prefix reaching `node` has
//! matched `query[..idx]`. From each state the walk branches into the
//! literal child equal to `query[idx]`, the single-wildcard child (both
//! advancing one piece), and the series-wildcard child once for every run
//! length it could consume, including zero and the entire remainder. Values
//! are collected when a state reaches the end of the query at a terminal
//! node.
//!
//! The same terminal node is commonly reached through many distinct
//! expansions (adjacent or repeated series wildcards in particular), so
//! collection is guarded by a per-call visited set keyed on node identity.
//! The set lives on the call stack, not in the nodes, so no reset pass over
//! the tree is needed and overlapping read-only calls stay independent.

mod error;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use fnv::FnvHashSet;

pub use error::{PatternResult, PatternTrieError};

use crate::trie::node::{Node, NodeRef};
use crate::trie::{Iter, LanaiTrie};

/// A trie of wildcard patterns.
///
/// Wraps a [`LanaiTrie`] whose stored keys are patterns and adds
/// [`PatternTrie::collect`] on top of the exact-lookup surface. Whether a
/// sentinel collides with a piece intended as literal data is the caller's
/// responsibility; it is not validated here.
#[derive(Debug)]
pub struct PatternTrie<P, V> {
    trie: LanaiTrie<P, V>,
    wildcard_single: P,
    wildcard_series: P,
}

impl<P: Ord + Clone, V> PatternTrie<P, V> {
    /// Creates an empty pattern trie with the given wildcard sentinels.
    ///
    /// `wildcard_single` matches exactly one query piece; `wildcard_series`
    /// matches zero or more. Fails if the two sentinels are equal.
    pub fn new(wildcard_single: P, wildcard_series: P) -> PatternResult<Self> {
        if wildcard_single == wildcard_series {
            return Err(PatternTrieError::IndistinctWildcards);
        }
        Ok(Self {
            trie: LanaiTrie::new(),
            wildcard_single,
            wildcard_series,
        })
    }

    /// The sentinel matching exactly one query piece.
    pub fn wildcard_single(&self) -> &P {
        &self.wildcard_single
    }

    /// The sentinel matching a run of zero or more query pieces.
    pub fn wildcard_series(&self) -> &P {
        &self.wildcard_series
    }

    /// Returns the union of values from every stored pattern matching
    /// `query`, a literal wildcard-free piece sequence.
    ///
    /// Each matching pattern contributes its values in insertion order; no
    /// order is defined between patterns. Duplicate contributions from a
    /// pattern reachable through several wildcard expansions are suppressed.
    /// The result is fully evaluated before returning.
    pub fn collect(&self, query: &[P]) -> Vec<V>
    where
        V: Clone,
    {
        let mut matched = Vec::new();
        let mut visited = FnvHashSet::default();
        self.collect_into(self.trie.root(), query, 0, &mut visited, &mut matched);
        matched
    }

    /// Expands the state `(node, idx)` against `query`, accumulating values
    /// of matching patterns into `out`.
    fn collect_into(
        &self,
        node: &NodeRef<P, V>,
        query: &[P],
        idx: usize,
        visited: &mut FnvHashSet<*const RefCell<Node<P, V>>>,
        out: &mut Vec<V>,
    ) where
        V: Clone,
    {
        let n = node.borrow();

        if idx == query.len() && n.terminal && visited.insert(Rc::as_ptr(node)) {
            out.extend(n.values.iter().cloned());
        }

        if idx < query.len() {
            if let Some(child) = n.children.get(&self.wildcard_single) {
                self.collect_into(child, query, idx + 1, visited, out);
            }
        }

        if let Some(child) = n.children.get(&self.wildcard_series) {
            // A series can consume any run length from nothing up to the
            // entire remainder.
            for k in 0..=query.len() - idx {
                self.collect_into(child, query, idx + k, visited, out);
            }
        }

        if idx < query.len() {
            // A query piece failing the literal requirement simply drops
            // this branch.
            if let Some(child) = n.children.get(&query[idx]) {
                self.collect_into(child, query, idx + 1, visited, out);
            }
        }
    }

    // The underlying trie's operation surface, re-exposed so patterns are
    // managed through the same handle that matches them.

    /// Stores `value` under `pattern`. See [`LanaiTrie::add`].
    pub fn add(&mut self, pattern: &[P], value: V) {
        self.trie.add(pattern, value);
    }

    /// Stores every value in `values` under `pattern`. See
    /// [`LanaiTrie::add_all`].
    pub fn add_all<I>(&mut self, pattern: &[P], values: I)
    where
        I: IntoIterator<Item = V>,
    {
        self.trie.add_all(pattern, values);
    }

    /// Removes `pattern` and its values. See [`LanaiTrie::remove`].
    pub fn remove(&mut self, pattern: &[P]) -> bool {
        self.trie.remove(pattern)
    }

    /// Removes one occurrence of `value` from `pattern`'s list. See
    /// [`LanaiTrie::remove_value`].
    pub fn remove_value(&mut self, pattern: &[P], value: &V) -> bool
    where
        V: PartialEq,
    {
        self.trie.remove_value(pattern, value)
    }

    /// Removes `pattern` only on exact value-list equality. See
    /// [`LanaiTrie::remove_exact`].
    pub fn remove_exact(&mut self, pattern: &[P], values: &[V]) -> bool
    where
        V: PartialEq,
    {
        self.trie.remove_exact(pattern, values)
    }

    /// Whether `pattern` is stored. Exact lookup, no matching.
    pub fn contains_key(&self, pattern: &[P]) -> bool {
        self.trie.contains_key(pattern)
    }

    /// Exact lookup of a pattern's values. See [`LanaiTrie::search`].
    pub fn search(&self, pattern: &[P]) -> Vec<V>
    where
        V: Clone,
    {
        self.trie.search(pattern)
    }

    /// Exact lookup returning `Some` iff values are stored. See
    /// [`LanaiTrie::try_get`].
    pub fn try_get(&self, pattern: &[P]) -> Option<Vec<V>>
    where
        V: Clone,
    {
        self.trie.try_get(pattern)
    }

    /// Collects every value whose pattern starts with `prefix`. See
    /// [`LanaiTrie::collect_after`].
    pub fn collect_after(&self, prefix: &[P]) -> Vec<V>
    where
        V: Clone,
    {
        self.trie.collect_after(prefix)
    }

    /// Number of stored patterns.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if no patterns are stored.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Removes every stored pattern.
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// Lazy ordered enumeration of `(pattern, values)` pairs. See
    /// [`LanaiTrie::iter`].
    pub fn iter(&self) -> Iter<P, V> {
        self.trie.iter()
    }
}
