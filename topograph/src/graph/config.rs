//! Sort configuration
//!
//! Both traversals visit children in insertion order and append nodes in
//! finish order, so they always produce the same sequence. They differ only
//! in where the traversal state lives.

use serde::{Deserialize, Serialize};

/// How the depth-first traversal keeps its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Explicit work stack on the heap. Depth is bounded only by memory.
    #[default]
    Iterative,
    /// One call frame per node on the current path.
    ///
    /// Deep dependency chains can overflow the thread's stack.
    Recursive,
}

/// Configuration for topological sorting
///
/// # Example
///
/// ```
/// use topograph::{SortConfig, Traversal};
///
/// let config = SortConfig::new().with_traversal(Traversal::Recursive);
/// assert_eq!(config.traversal, Traversal::Recursive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Traversal strategy used by `topological_sort`.
    ///
    /// Default: [`Traversal::Iterative`]
    pub traversal: Traversal,
}

impl SortConfig {
    /// Creates the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the traversal strategy
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }
}
