//! Error types for graph operations
//!
//! Building a graph never fails; only ordering it can. A sort reports either
//! a cycle on the active traversal path or a key that was never registered
//! as a node.

use thiserror::Error;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while ordering a graph
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// The traversal re-entered a node that is still in progress
    #[error("Cycle detected in dependency graph: {path}")]
    Cycle {
        /// The active path that closed the cycle, e.g. `a -> b -> a`
        path: String,
    },

    /// A root or child key has no node record
    ///
    /// Every key used as a sort root or as a child must also have been
    /// passed as the `node` argument of `add_child`.
    #[error("Node not registered: {node}")]
    UnknownNode {
        /// Debug rendering of the missing key
        node: String,
    },
}

impl GraphError {
    /// Creates a cycle error with the given path
    pub fn cycle(path: impl Into<String>) -> Self {
        Self::Cycle { path: path.into() }
    }

    /// Creates an unknown node error
    pub fn unknown_node(node: impl Into<String>) -> Self {
        Self::UnknownNode { node: node.into() }
    }

    /// Returns true if this error reports a cycle
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message() {
        let err = GraphError::cycle("a -> b -> a");
        assert_eq!(
            err.to_string(),
            "Cycle detected in dependency graph: a -> b -> a"
        );
        assert!(err.is_cycle());
    }

    #[test]
    fn test_unknown_node_message() {
        let err = GraphError::unknown_node("\"zoo\"");
        assert_eq!(err.to_string(), "Node not registered: \"zoo\"");
        assert!(!err.is_cycle());
    }
}
