//! Node records
//!
//! A record pairs a node's adjacency list with its traversal mark so the
//! sort can update the mark through the same arena slot the adjacency lives
//! in.

use serde::{Deserialize, Serialize};

/// Per-node traversal state
///
/// Within one sort a mark only moves forward:
/// `Unvisited -> InProgress -> Done`. Every sort starts by resetting all
/// marks to `Unvisited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    /// Not reached by the current sort
    #[default]
    Unvisited,
    /// On the active traversal path; reaching it again means a cycle
    InProgress,
    /// Finished and already appended to the output
    Done,
}

/// A registered node and its outgoing edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord<K> {
    /// Key the node was registered under
    key: K,
    /// Transient sort state, never persisted
    #[serde(skip)]
    mark: Mark,
    /// Child keys in insertion order, duplicates kept
    children: Vec<K>,
}

impl<K> NodeRecord<K> {
    /// Creates an unvisited record with no children
    pub fn new(key: K) -> Self {
        Self {
            key,
            mark: Mark::Unvisited,
            children: Vec::new(),
        }
    }

    /// Returns the node's key
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the mark left by the most recent sort
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the children in insertion order
    pub fn children(&self) -> &[K] {
        &self.children
    }

    /// Returns the number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.children.len()
    }

    pub(super) fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }

    pub(super) fn push_child(&mut self, child: K) {
        self.children.push(child);
    }

    pub(super) fn into_parts(self) -> (K, Vec<K>) {
        (self.key, self.children)
    }
}
