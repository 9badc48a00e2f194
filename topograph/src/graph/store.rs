//! Graph - adjacency store for dependency ordering
//!
//! Nodes live in an arena of [`NodeRecord`]s; a hash map translates keys to
//! arena indices. The traversal engine rewrites marks through those indices,
//! so a node reached along two different paths is always the same record.
//!
//! Edges point from a node to its children, and a child is ordered before
//! its parent. Only keys passed as the `node` argument of
//! [`Graph::add_child`] get a record; a key that only ever appears as a
//! child stays unregistered until it is added in its own right.

use super::config::SortConfig;
use super::node::{Mark, NodeRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// A directed graph of caller-supplied keys
///
/// # Example
///
/// ```
/// use topograph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_child("app", Some("lib"));
/// graph.add_child("lib", Some("core"));
/// graph.add_child("core", None);
///
/// let order = graph.topological_sort(&"app").unwrap();
/// assert_eq!(order, vec!["core", "lib", "app"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    from = "GraphSnapshot<K>",
    into = "GraphSnapshot<K>",
    bound(
        serialize = "K: Serialize + Clone",
        deserialize = "K: Deserialize<'de> + Eq + std::hash::Hash + Clone"
    )
)]
pub struct Graph<K> {
    /// Key to arena index
    pub(super) index: HashMap<K, usize>,
    /// Records in registration order
    pub(super) nodes: Vec<NodeRecord<K>>,
    pub(super) config: SortConfig,
}

impl<K> Graph<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a new empty graph with the default [`SortConfig`]
    pub fn new() -> Self {
        Self::with_config(SortConfig::default())
    }

    /// Creates a new empty graph with the given sort configuration
    pub fn with_config(config: SortConfig) -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            config,
        }
    }

    /// Creates an empty graph with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            config: SortConfig::default(),
        }
    }

    /// Registers `node` and, if given, appends an edge `node -> child`
    ///
    /// An existing record keeps its mark and children; the child is appended
    /// after them. No record is created for `child`, and neither duplicate
    /// edges nor cycles are rejected here. Cycles surface when sorting.
    pub fn add_child(&mut self, node: K, child: Option<K>) {
        let idx = self.ensure_node(node);
        if let Some(child) = child {
            self.nodes[idx].push_child(child);
        }
    }

    /// Registers `node` and appends every child in iteration order
    pub fn add_children(&mut self, node: K, children: impl IntoIterator<Item = K>) {
        let idx = self.ensure_node(node);
        for child in children {
            self.nodes[idx].push_child(child);
        }
    }

    fn ensure_node(&mut self, node: K) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }

        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(NodeRecord::new(node));
        idx
    }

    /// Returns the record for `node` if it is registered
    pub fn record(&self, node: &K) -> Option<&NodeRecord<K>> {
        self.index.get(node).map(|&idx| &self.nodes[idx])
    }

    /// Returns true if `node` has been registered
    pub fn contains(&self, node: &K) -> bool {
        self.index.contains_key(node)
    }

    /// Returns the children of `node` in insertion order
    pub fn children(&self, node: &K) -> Option<&[K]> {
        self.record(node).map(NodeRecord::children)
    }

    /// Returns the mark `node` was left with by the most recent sort
    pub fn mark(&self, node: &K) -> Option<Mark> {
        self.record(node).map(NodeRecord::mark)
    }
}

impl<K> Graph<K> {
    /// Returns the number of registered nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been registered
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over registered keys in registration order
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.nodes.iter().map(NodeRecord::key)
    }

    /// Returns the number of recorded edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(NodeRecord::out_degree).sum()
    }

    /// Returns the sort configuration
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Replaces the sort configuration
    pub fn set_config(&mut self, config: SortConfig) {
        self.config = config;
    }

    /// Removes every node and edge, keeping the configuration
    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
    }
}

impl<K> Default for Graph<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a [`Graph`]
///
/// The key index is derived data and is rebuilt on load by replaying every
/// record through `add_children`, which also merges repeated keys.
#[derive(Serialize, Deserialize)]
struct GraphSnapshot<K> {
    #[serde(default)]
    config: SortConfig,
    nodes: Vec<NodeRecord<K>>,
}

impl<K> From<Graph<K>> for GraphSnapshot<K> {
    fn from(graph: Graph<K>) -> Self {
        Self {
            config: graph.config,
            nodes: graph.nodes,
        }
    }
}

impl<K> From<GraphSnapshot<K>> for Graph<K>
where
    K: Eq + Hash + Clone,
{
    fn from(snapshot: GraphSnapshot<K>) -> Self {
        let mut graph = Graph::with_config(snapshot.config);
        for record in snapshot.nodes {
            let (key, children) = record.into_parts();
            graph.add_children(key, children);
        }
        graph
    }
}
