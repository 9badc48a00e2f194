//! Graphviz export
//!
//! Render with e.g. `dot -Tpng deps.dot -o deps.png`.

use super::store::Graph;
use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;
use std::fmt;
use std::hash::Hash;

impl<K> Graph<K>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    /// Renders the graph in DOT format
    ///
    /// Edges point from each node to its children. Edges to unregistered
    /// children are omitted, since those children have no node to point at.
    ///
    /// ```
    /// use topograph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_child("app", Some("lib"));
    /// graph.add_child("lib", None);
    ///
    /// let dot = graph.to_dot();
    /// assert!(dot.starts_with("digraph"));
    /// ```
    pub fn to_dot(&self) -> String {
        let mut graph = DiGraph::<String, ()>::with_capacity(self.len(), self.edge_count());

        let node_indices: Vec<_> = self
            .nodes
            .iter()
            .map(|record| graph.add_node(record.key().to_string()))
            .collect();

        for (record, &source) in self.nodes.iter().zip(&node_indices) {
            for child in record.children() {
                if let Some(&target) = self.index.get(child) {
                    graph.add_edge(source, node_indices[target], ());
                }
            }
        }

        format!("{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_lists_nodes_and_edges() {
        let mut graph = Graph::new();
        graph.add_children("main", ["foo", "bar"]);
        graph.add_child("foo", None);
        graph.add_child("bar", Some("foo"));

        let dot = graph.to_dot();

        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("main"));
        assert!(dot.contains("foo"));
        assert!(dot.contains("bar"));
        assert_eq!(dot.matches(" -> ").count(), 3);
    }

    #[test]
    fn test_dot_skips_unregistered_children() {
        let mut graph = Graph::new();
        graph.add_children(1, [2, 3]);
        graph.add_child(2, None);

        let dot = graph.to_dot();
        assert_eq!(dot.matches(" -> ").count(), 1);
    }
}
