// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Nodes are the building blocks of the trie: each one owns an ordered map
//! of child nodes keyed by piece, and terminal nodes additionally hold the
//! values stored under the key that ends there.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Shared handle to a trie node.
///
/// Nodes are reference counted so that detached iterators can keep walking a
/// tree snapshot without borrowing the trie itself. `Rc`/`RefCell` (rather
/// than `Arc`/`RwLock`) because the structure is single-owner by contract and
/// performs no internal locking.
pub(crate) type NodeRef<P, V> = Rc<RefCell<Node<P, V>>>;

/// A node in the Lanai Trie.
///
/// Children are kept in a `BTreeMap` so that sibling pieces enumerate in
/// ascending order, which is what gives the trie its lexicographic traversal
/// guarantee.
#[derive(Debug)]
pub(crate) struct Node<P, V> {
    /// Ordered map of pieces to child nodes.
    pub children: BTreeMap<P, NodeRef<P, V>>,

    /// Whether this node marks the end of a stored key.
    pub terminal: bool,

    /// Values stored under the key ending here. Non-empty iff `terminal`.
    pub values: Vec<V>,

    /// Cached copy of the full key this node terminates, so enumeration does
    /// not have to rebuild keys from the path. Meaningful only when
    /// `terminal` is set.
    pub key: Vec<P>,
}

impl<P: Ord, V> Node<P, V> {
    /// Creates a new empty node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            terminal: false,
            values: Vec::new(),
            key: Vec::new(),
        }
    }

    /// Wraps a fresh node in a shared handle.
    pub fn new_ref() -> NodeRef<P, V> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Resets this node to the empty state, dropping the whole subtree.
    pub fn reset(&mut self) {
        self.children.clear();
        self.terminal = false;
        self.values.clear();
        self.key.clear();
    }
}

impl<P: Ord, V> Default for Node<P, V> {
    fn default() -> Self {
        Self::new()
    }
}
