//! Topograph: dependency ordering for Rust
//!
//! `topograph` orders items with dependency relationships (build steps, task
//! schedulers, module initialization) by depth-first topological sort, and
//! reports cycles as part of ordering.
//!
//! # Features
//!
//! - **Generic keys**: any `Eq + Hash + Clone` type, including borrowed `&str`
//! - **Incremental construction**: add edges one at a time, in any order
//! - **Deterministic order**: children are visited in insertion order
//! - **Cycle reporting**: errors carry the offending path
//! - **Deep graphs**: the default traversal keeps its state on the heap
//!
//! # Quick Start
//!
//! ```
//! use topograph::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.add_child("main", Some("foo"));
//! graph.add_child("main", Some("bar"));
//! graph.add_child("bar", Some("foo"));
//! graph.add_child("foo", None);
//!
//! let order = graph.topological_sort(&"main")?;
//! assert_eq!(order, vec!["foo", "bar", "main"]);
//! # Ok::<(), GraphError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`graph`]: graph storage, configuration, traversal and errors
//!
//! # Design Principles
//!
//! This library follows Dave Cheney's practical programming wisdom:
//! - **Simplicity**: Simple, focused APIs that do one thing well
//! - **Clarity**: Explicit over implicit, readable over clever
//! - **Safety**: Hard to misuse; unknown keys are errors, not panics

pub mod graph;

pub use graph::{Graph, GraphError, GraphResult, Mark, NodeRecord, SortConfig, Traversal};

// Re-export dependencies used in public API
pub use serde;

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use topograph::prelude::*;
/// ```
pub mod prelude {
    pub use crate::graph::{Graph, GraphError, GraphResult, SortConfig, Traversal};
}
