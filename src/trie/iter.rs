// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy ordered enumeration for the Lanai Trie.
//!
//! The iterator is a heap-allocated stack machine over the tree: each frame
//! remembers a node and the last child piece already explored, and the next
//! child is found with a range query on the node's ordered child map. That
//! keeps the traversal suspendable between pulls without a recursive descent
//! or any helper thread.

use std::cell::Cell;
use std::iter::FusedIterator;
use std::ops::Bound;
use std::rc::Rc;

use super::error::TrieError;
use super::node::NodeRef;

/// One level of the suspended descent.
struct Frame<P, V> {
    node: NodeRef<P, V>,
    /// Piece of the child most recently explored at this level, if any.
    last: Option<P>,
}

/// Lazy iterator over `(key, values)` pairs of a [`crate::LanaiTrie`].
///
/// Yields a terminal key before any of its extensions, with siblings in
/// ascending piece order, so output keys are in lexicographic order. Each
/// pull first checks the trie's version stamp against the one captured at
/// creation; on mismatch it yields [`TrieError::ConcurrentModification`]
/// once and then fuses. Abandoning the iterator early needs no cleanup.
pub struct Iter<P, V> {
    version: Rc<Cell<u64>>,
    snapshot: u64,
    stack: Vec<Frame<P, V>>,
    /// Root pending its terminal check; consumed on the first pull.
    start: Option<NodeRef<P, V>>,
    done: bool,
}

impl<P, V> Iter<P, V> {
    pub(crate) fn new(root: NodeRef<P, V>, version: Rc<Cell<u64>>) -> Self {
        let snapshot = version.get();
        Self {
            version,
            snapshot,
            stack: Vec::new(),
            start: Some(root),
            done: false,
        }
    }
}

impl<P: Ord + Clone, V: Clone> Iterator for Iter<P, V> {
    type Item = Result<(Vec<P>, Vec<V>), TrieError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.version.get() != self.snapshot {
            self.done = true;
            return Some(Err(TrieError::ConcurrentModification {
                started_at: self.snapshot,
                observed: self.version.get(),
            }));
        }

        // The empty key, if stored, terminates at the root and sorts first.
        if let Some(root) = self.start.take() {
            self.stack.push(Frame {
                node: Rc::clone(&root),
                last: None,
            });
            let n = root.borrow();
            if n.terminal {
                return Some(Ok((n.key.clone(), n.values.clone())));
            }
        }

        loop {
            let Some(top) = self.stack.last_mut() else {
                self.done = true;
                return None;
            };

            let next_child = {
                let n = top.node.borrow();
                let lower = match &top.last {
                    Some(last) => Bound::Excluded(last),
                    None => Bound::Unbounded,
                };
                n.children
                    .range((lower, Bound::Unbounded))
                    .next()
                    .map(|(piece, child)| (piece.clone(), Rc::clone(child)))
            };

            match next_child {
                Some((piece, child)) => {
                    top.last = Some(piece);
                    self.stack.push(Frame {
                        node: Rc::clone(&child),
                        last: None,
                    });
                    let n = child.borrow();
                    if n.terminal {
                        return Some(Ok((n.key.clone(), n.values.clone())));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<P: Ord + Clone, V: Clone> FusedIterator for Iter<P, V> {}
