// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie: an ordered, multi-valued trie keyed by sequences of
//! comparable pieces.
//!
//! Keys are finite piece sequences (an empty key is valid) and each stored
//! key holds a list of values in insertion order. Children at every level
//! are kept in ascending piece order, so enumeration yields keys with a
//! prefix strictly before its extensions and siblings lexicographically.
//!
//! # Features
//!
//! * Exact lookup, membership tests and multi-value storage per key
//! * Three removal forms: whole key, single value by equality, and an
//!   exact-list-equality form
//! * Lazy ordered enumeration with mutation detection via a version stamp
//! * No structural pruning on removal: nodes persist until [`LanaiTrie::clear`],
//!   trading memory for cheap re-insertion along hot paths
//!
//! # Example
//!
//! ```
//! use lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.add(&['c', 'a', 'r'], "vehicle");
//! trie.add(&['c', 'a', 'r'], "rail car");
//! trie.add(&['c', 'a', 't'], "feline");
//!
//! assert_eq!(trie.len(), 2);
//! assert_eq!(trie.search(&['c', 'a', 'r']), vec!["vehicle", "rail car"]);
//! assert!(trie.search(&['c', 'a']).is_empty());
//!
//! let keys: Vec<_> = trie.keys();
//! assert_eq!(keys, vec![vec!['c', 'a', 'r'], vec!['c', 'a', 't']]);
//! ```

mod error;
mod iter;
pub(crate) mod node;

#[cfg(test)]
mod tests;

use std::cell::Cell;
use std::rc::Rc;

pub use error::{TrieError, TrieResult};
pub use iter::Iter;
use node::{Node, NodeRef};

/// An ordered trie mapping piece sequences to lists of values.
///
/// `P` is the piece type (totally ordered, e.g. `char` or `u8`); `V` is the
/// stored value type. A key maps to zero (absent), one, or many values.
///
/// The structure is single-owner: mutation requires `&mut self` and there is
/// no internal synchronization. Iterators returned by [`LanaiTrie::iter`] do
/// not borrow the trie; a mutation made while one is still being consumed
/// surfaces as [`TrieError::ConcurrentModification`] on its next pull.
#[derive(Debug)]
pub struct LanaiTrie<P, V> {
    /// Root of the tree. Never replaced; `clear` resets it in place.
    root: NodeRef<P, V>,

    /// Number of currently terminal keys.
    len: usize,

    /// Version stamp shared with live iterators, bumped on every successful
    /// mutation.
    version: Rc<Cell<u64>>,
}

impl<P: Ord + Clone, V> LanaiTrie<P, V> {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::new_ref(),
            len: 0,
            version: Rc::new(Cell::new(0)),
        }
    }

    /// Adds `value` under `key`, appending to any values already stored
    /// there. The key becomes terminal if it was not.
    pub fn add(&mut self, key: &[P], value: V) {
        let node = self.descend_or_create(key);
        {
            let mut n = node.borrow_mut();
            n.values.push(value);
            if !n.terminal {
                n.terminal = true;
                n.key = key.to_vec();
                self.len += 1;
            }
        }
        self.touch();
    }

    /// Adds every value in `values` under `key`, preserving their order.
    ///
    /// An empty `values` is a no-op: a key is terminal exactly when it holds
    /// at least one value, and this operation never breaks that.
    pub fn add_all<I>(&mut self, key: &[P], values: I)
    where
        I: IntoIterator<Item = V>,
    {
        let mut values: Vec<V> = values.into_iter().collect();
        if values.is_empty() {
            return;
        }
        let node = self.descend_or_create(key);
        {
            let mut n = node.borrow_mut();
            n.values.append(&mut values);
            if !n.terminal {
                n.terminal = true;
                n.key = key.to_vec();
                self.len += 1;
            }
        }
        self.touch();
    }

    /// Removes `key` and its entire value list.
    ///
    /// Returns `true` if the key was present. Absent or non-terminal keys
    /// are a silent no-op. The path itself is not pruned.
    pub fn remove(&mut self, key: &[P]) -> bool {
        let Some(node) = self.find(key) else {
            return false;
        };
        {
            let mut n = node.borrow_mut();
            if !n.terminal {
                return false;
            }
            n.values.clear();
            n.terminal = false;
            n.key.clear();
        }
        self.len -= 1;
        self.touch();
        true
    }

    /// Removes one occurrence of `value` (by equality) from the list stored
    /// under `key`.
    ///
    /// The key stays terminal while other values remain; it becomes
    /// non-terminal only when the last value is removed. Returns `false` if
    /// the key is absent or the value is not in its list.
    pub fn remove_value(&mut self, key: &[P], value: &V) -> bool
    where
        V: PartialEq,
    {
        let Some(node) = self.find(key) else {
            return false;
        };
        let emptied = {
            let mut n = node.borrow_mut();
            let Some(pos) = n.values.iter().position(|v| v == value) else {
                return false;
            };
            n.values.remove(pos);
            if n.values.is_empty() {
                n.terminal = false;
                n.key.clear();
                true
            } else {
                false
            }
        };
        if emptied {
            self.len -= 1;
        }
        self.touch();
        true
    }

    /// Removes `key` only if its full stored value list is element-for-element
    /// equal, in order, to `values`.
    ///
    /// On success this behaves like [`LanaiTrie::remove`]; on any mismatch it
    /// is a silent no-op returning `false`. This is a stricter contract than
    /// [`LanaiTrie::remove_value`] and deliberately kept distinct from it.
    pub fn remove_exact(&mut self, key: &[P], values: &[V]) -> bool
    where
        V: PartialEq,
    {
        let Some(node) = self.find(key) else {
            return false;
        };
        {
            let mut n = node.borrow_mut();
            if !n.terminal || n.values.as_slice() != values {
                return false;
            }
            n.values.clear();
            n.terminal = false;
            n.key.clear();
        }
        self.len -= 1;
        self.touch();
        true
    }

    /// Returns `true` if `key` is currently stored (terminal).
    pub fn contains_key(&self, key: &[P]) -> bool {
        self.find(key).is_some_and(|node| node.borrow().terminal)
    }

    /// Returns `true` if `key` is stored and its value list contains `value`.
    pub fn contains_pair(&self, key: &[P], value: &V) -> bool
    where
        V: PartialEq,
    {
        self.find(key)
            .is_some_and(|node| node.borrow().values.contains(value))
    }

    /// Returns the values stored under `key`, or an empty list if the key is
    /// absent. Exact lookup only; no wildcard semantics at this layer.
    pub fn search(&self, key: &[P]) -> Vec<V>
    where
        V: Clone,
    {
        self.find(key)
            .map(|node| node.borrow().values.clone())
            .unwrap_or_default()
    }

    /// Looks up `key`, returning `Some` exactly when at least one value is
    /// stored under it.
    pub fn try_get(&self, key: &[P]) -> Option<Vec<V>>
    where
        V: Clone,
    {
        let values = self.search(key);
        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    /// Collects every value stored under a key starting with `prefix`, in
    /// traversal order. A terminal prefix contributes its own values first;
    /// the empty prefix collects every value in the trie. An unknown prefix
    /// is a graceful miss returning an empty list.
    pub fn collect_after(&self, prefix: &[P]) -> Vec<V>
    where
        V: Clone,
    {
        let mut out = Vec::new();
        if let Some(node) = self.find(prefix) {
            Self::collect_subtree(&node, &mut out);
        }
        out
    }

    /// Number of currently stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes everything, discarding the whole tree.
    pub fn clear(&mut self) {
        self.root.borrow_mut().reset();
        self.len = 0;
        self.touch();
    }

    /// Snapshot of all stored keys, in traversal order.
    pub fn keys(&self) -> Vec<Vec<P>> {
        let mut out = Vec::with_capacity(self.len);
        Self::collect_keys(&self.root, &mut out);
        out
    }

    /// Snapshot of every key's value list, in traversal order.
    pub fn values(&self) -> Vec<Vec<V>>
    where
        V: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        Self::collect_values(&self.root, &mut out);
        out
    }

    /// Returns a lazy iterator over `(key, values)` pairs in traversal
    /// order: a terminal key is yielded before any of its extensions, and
    /// siblings appear in ascending piece order.
    ///
    /// The iterator does not borrow the trie. If the trie is mutated before
    /// the iterator is exhausted, the next pull yields
    /// [`TrieError::ConcurrentModification`] and the iterator terminates.
    pub fn iter(&self) -> Iter<P, V> {
        Iter::new(Rc::clone(&self.root), Rc::clone(&self.version))
    }

    /// Handle to the root node, for traversals layered on top of the trie.
    pub(crate) fn root(&self) -> &NodeRef<P, V> {
        &self.root
    }

    /// Walks the path for `key`, creating missing nodes along the way.
    fn descend_or_create(&mut self, key: &[P]) -> NodeRef<P, V> {
        let mut node = Rc::clone(&self.root);
        for piece in key {
            let next = {
                let mut n = node.borrow_mut();
                Rc::clone(
                    n.children
                        .entry(piece.clone())
                        .or_insert_with(Node::new_ref),
                )
            };
            node = next;
        }
        node
    }

    /// Walks the path for `key` without creating nodes.
    fn find(&self, key: &[P]) -> Option<NodeRef<P, V>> {
        let mut node = Rc::clone(&self.root);
        for piece in key {
            let next = node.borrow().children.get(piece).map(Rc::clone);
            match next {
                Some(child) => node = child,
                None => return None,
            }
        }
        Some(node)
    }

    fn collect_keys(node: &NodeRef<P, V>, out: &mut Vec<Vec<P>>) {
        let n = node.borrow();
        if n.terminal {
            out.push(n.key.clone());
        }
        for child in n.children.values() {
            Self::collect_keys(child, out);
        }
    }

    fn collect_values(node: &NodeRef<P, V>, out: &mut Vec<Vec<V>>)
    where
        V: Clone,
    {
        let n = node.borrow();
        if n.terminal {
            out.push(n.values.clone());
        }
        for child in n.children.values() {
            Self::collect_values(child, out);
        }
    }

    fn collect_subtree(node: &NodeRef<P, V>, out: &mut Vec<V>)
    where
        V: Clone,
    {
        let n = node.borrow();
        if n.terminal {
            out.extend(n.values.iter().cloned());
        }
        for child in n.children.values() {
            Self::collect_subtree(child, out);
        }
    }

    /// Bumps the shared version stamp, invalidating live iterators.
    fn touch(&mut self) {
        self.version.set(self.version.get() + 1);
    }
}

impl<P: Ord + Clone, V> Default for LanaiTrie<P, V> {
    fn default() -> Self {
        Self::new()
    }
}
