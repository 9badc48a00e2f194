//! Depth-first topological sort
//!
//! Three-color marking over the node arena:
//! - `Unvisited`: not reached yet
//! - `InProgress`: on the active path
//! - `Done`: finished and appended to the output
//!
//! A node is appended only after all of its children have finished, so the
//! output lists dependencies before dependents. Reaching an `InProgress` node
//! again means the active path loops back on itself.
//!
//! The iterative and recursive traversals visit children in the same order
//! and therefore produce identical output.

use super::config::Traversal;
use super::error::{GraphError, GraphResult};
use super::node::Mark;
use super::store::Graph;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, debug_span, trace};

/// One node on the explicit traversal stack
struct Frame {
    node: usize,
    /// Position of the next child to visit
    next: usize,
}

impl<K> Graph<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Returns the nodes reachable from `root` in topological order
    ///
    /// Every node appears after all of its children, exactly once. Nodes not
    /// reachable from `root` are left out.
    ///
    /// Returns [`GraphError::Cycle`] if a cycle is reachable from `root`, and
    /// [`GraphError::UnknownNode`] if `root` or any reachable child was never
    /// registered. After an error the marks are left as they were when the
    /// traversal stopped; the next sort resets them.
    ///
    /// # Example
    ///
    /// ```
    /// use topograph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_child(0, Some(1));
    /// graph.add_child(0, Some(2));
    /// graph.add_child(1, Some(4));
    /// graph.add_child(2, Some(1));
    /// graph.add_child(2, Some(3));
    /// graph.add_child(3, Some(1));
    /// graph.add_child(4, None);
    ///
    /// assert_eq!(graph.topological_sort(&2).unwrap(), vec![4, 1, 3, 2]);
    /// ```
    pub fn topological_sort(&mut self, root: &K) -> GraphResult<Vec<K>> {
        let mut order = Vec::new();
        self.topological_sort_into(root, &mut order)?;
        Ok(order)
    }

    /// Like [`topological_sort`](Self::topological_sort), but appends to
    /// caller-provided storage
    ///
    /// On error `out` may hold the nodes finished before the traversal
    /// stopped.
    pub fn topological_sort_into(&mut self, root: &K, out: &mut Vec<K>) -> GraphResult<()> {
        let traversal = self.config.traversal;
        let span = debug_span!("topological_sort", root = ?root, ?traversal);
        let _enter = span.enter();

        self.reset_marks();
        let root = self.lookup(root)?;
        let start = out.len();

        match traversal {
            Traversal::Iterative => self.visit_iterative(root, out)?,
            Traversal::Recursive => self.visit_recursive(root, &mut Vec::new(), out)?,
        }

        debug!(
            nodes = self.nodes.len(),
            sorted = out.len() - start,
            "topological sort complete"
        );
        Ok(())
    }

    fn reset_marks(&mut self) {
        for node in &mut self.nodes {
            node.set_mark(Mark::Unvisited);
        }
    }

    fn lookup(&self, key: &K) -> GraphResult<usize> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::unknown_node(format!("{:?}", key)))
    }

    fn visit_iterative(&mut self, root: usize, out: &mut Vec<K>) -> GraphResult<()> {
        let mut stack = vec![Frame { node: root, next: 0 }];
        self.nodes[root].set_mark(Mark::InProgress);

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let Some(child_key) = self.nodes[node].children().get(frame.next) else {
                stack.pop();
                self.finish(node, out);
                continue;
            };
            frame.next += 1;

            let child = self.lookup(child_key)?;
            match self.nodes[child].mark() {
                Mark::Unvisited => {
                    self.nodes[child].set_mark(Mark::InProgress);
                    stack.push(Frame {
                        node: child,
                        next: 0,
                    });
                }
                Mark::InProgress => {
                    let path: Vec<usize> = stack.iter().map(|frame| frame.node).collect();
                    return Err(self.cycle_error(&path, child));
                }
                Mark::Done => {}
            }
        }

        Ok(())
    }

    fn visit_recursive(
        &mut self,
        node: usize,
        path: &mut Vec<usize>,
        out: &mut Vec<K>,
    ) -> GraphResult<()> {
        match self.nodes[node].mark() {
            Mark::Done => return Ok(()),
            Mark::InProgress => return Err(self.cycle_error(path, node)),
            Mark::Unvisited => {}
        }

        self.nodes[node].set_mark(Mark::InProgress);
        path.push(node);

        for pos in 0..self.nodes[node].out_degree() {
            let child = self.lookup(&self.nodes[node].children()[pos])?;
            self.visit_recursive(child, path, out)?;
        }

        path.pop();
        self.finish(node, out);
        Ok(())
    }

    fn finish(&mut self, node: usize, out: &mut Vec<K>) {
        let record = &mut self.nodes[node];
        record.set_mark(Mark::Done);
        trace!(node = ?record.key(), "finished");
        out.push(record.key().clone());
    }

    /// Renders the part of the active path that starts at `reentered`
    fn cycle_error(&self, path: &[usize], reentered: usize) -> GraphError {
        let start = path
            .iter()
            .rposition(|&node| node == reentered)
            .unwrap_or(0);
        let rendered: Vec<String> = path[start..]
            .iter()
            .chain(std::iter::once(&reentered))
            .map(|&node| format!("{:?}", self.nodes[node].key()))
            .collect();
        let path = rendered.join(" -> ");

        debug!(%path, "cycle detected");
        GraphError::cycle(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SortConfig;

    const TRAVERSALS: [Traversal; 2] = [Traversal::Iterative, Traversal::Recursive];

    fn graph_with(traversal: Traversal) -> Graph<&'static str> {
        Graph::with_config(SortConfig::new().with_traversal(traversal))
    }

    fn build_graph(traversal: Traversal) -> Graph<&'static str> {
        let mut graph = graph_with(traversal);
        graph.add_children("foo", ["zoo"]);
        graph.add_children("bar", ["baz", "foo"]);
        graph.add_children("baz", ["zoo"]);
        graph.add_child("fu", None);
        graph.add_children("zoo", ["fu"]);
        graph.add_children("main", ["foo", "bar", "baz"]);
        graph
    }

    #[test]
    fn test_integer_graph() {
        for traversal in TRAVERSALS {
            let mut graph = Graph::with_config(SortConfig::new().with_traversal(traversal));
            graph.add_children(0, [1, 2]);
            graph.add_children(1, [4]);
            graph.add_children(2, [1, 3]);
            graph.add_children(3, [1]);
            graph.add_child(4, None);

            assert_eq!(graph.topological_sort(&2).unwrap(), vec![4, 1, 3, 2]);
        }
    }

    #[test]
    fn test_build_graph() {
        for traversal in TRAVERSALS {
            let mut graph = build_graph(traversal);
            assert_eq!(
                graph.topological_sort(&"main").unwrap(),
                vec!["fu", "zoo", "foo", "baz", "bar", "main"]
            );
        }
    }

    #[test]
    fn test_single_node() {
        for traversal in TRAVERSALS {
            let mut graph = graph_with(traversal);
            graph.add_child("x", None);
            assert_eq!(graph.topological_sort(&"x").unwrap(), vec!["x"]);
        }
    }

    #[test]
    fn test_two_node_cycle() {
        for traversal in TRAVERSALS {
            let mut graph = graph_with(traversal);
            graph.add_child("a", Some("b"));
            graph.add_child("b", Some("a"));

            let err = graph.topological_sort(&"a").unwrap_err();
            assert_eq!(err, GraphError::cycle(r#""a" -> "b" -> "a""#));
        }
    }

    #[test]
    fn test_self_loop() {
        for traversal in TRAVERSALS {
            let mut graph = graph_with(traversal);
            graph.add_child("a", Some("a"));

            let err = graph.topological_sort(&"a").unwrap_err();
            assert_eq!(err, GraphError::cycle(r#""a" -> "a""#));
        }
    }

    #[test]
    fn test_cycle_path_excludes_entry_prefix() {
        for traversal in TRAVERSALS {
            let mut graph = graph_with(traversal);
            graph.add_child("root", Some("a"));
            graph.add_child("a", Some("b"));
            graph.add_child("b", Some("c"));
            graph.add_child("c", Some("a"));

            let err = graph.topological_sort(&"root").unwrap_err();
            assert_eq!(err, GraphError::cycle(r#""a" -> "b" -> "c" -> "a""#));
        }
    }

    #[test]
    fn test_unknown_root() {
        for traversal in TRAVERSALS {
            let mut graph = graph_with(traversal);
            graph.add_child("a", None);

            let err = graph.topological_sort(&"missing").unwrap_err();
            assert_eq!(err, GraphError::unknown_node(r#""missing""#));
        }
    }

    #[test]
    fn test_unregistered_child() {
        for traversal in TRAVERSALS {
            let mut graph = graph_with(traversal);
            graph.add_child("a", Some("b"));

            let err = graph.topological_sort(&"a").unwrap_err();
            assert_eq!(err, GraphError::unknown_node(r#""b""#));
        }
    }

    #[test]
    fn test_marks_after_sort() {
        for traversal in TRAVERSALS {
            let mut graph = build_graph(traversal);
            graph.topological_sort(&"baz").unwrap();

            assert_eq!(graph.mark(&"baz"), Some(Mark::Done));
            assert_eq!(graph.mark(&"zoo"), Some(Mark::Done));
            assert_eq!(graph.mark(&"fu"), Some(Mark::Done));
            assert_eq!(graph.mark(&"main"), Some(Mark::Unvisited));
            assert_eq!(graph.mark(&"bar"), Some(Mark::Unvisited));
        }
    }

    #[test]
    fn test_marks_reset_after_failed_sort() {
        for traversal in TRAVERSALS {
            let mut graph = graph_with(traversal);
            graph.add_child("a", Some("b"));
            graph.add_child("b", Some("a"));
            graph.add_child("c", Some("d"));
            graph.add_child("d", None);

            assert!(graph.topological_sort(&"a").unwrap_err().is_cycle());
            assert_eq!(graph.mark(&"a"), Some(Mark::InProgress));

            assert_eq!(graph.topological_sort(&"c").unwrap(), vec!["d", "c"]);
            assert_eq!(graph.mark(&"a"), Some(Mark::Unvisited));
        }
    }

    #[test]
    fn test_sort_into_appends() {
        let mut graph = build_graph(Traversal::Iterative);
        let mut out = vec!["existing"];

        graph.topological_sort_into(&"zoo", &mut out).unwrap();
        assert_eq!(out, vec!["existing", "fu", "zoo"]);
    }

    #[test]
    fn test_duplicate_edges_emit_once() {
        for traversal in TRAVERSALS {
            let mut graph = graph_with(traversal);
            graph.add_children("a", ["b", "b", "c", "b"]);
            graph.add_child("b", None);
            graph.add_child("c", None);

            assert_eq!(graph.topological_sort(&"a").unwrap(), vec!["b", "c", "a"]);
        }
    }

    #[test]
    fn test_deep_chain_iterative() {
        const DEPTH: u32 = 200_000;

        let mut graph = Graph::with_capacity(DEPTH as usize + 1);
        for node in 0..DEPTH {
            graph.add_child(node, Some(node + 1));
        }
        graph.add_child(DEPTH, None);

        let order = graph.topological_sort(&0).unwrap();
        assert_eq!(order.len(), DEPTH as usize + 1);
        assert_eq!(order.first(), Some(&DEPTH));
        assert_eq!(order.last(), Some(&0));
    }
}
