//! Dependency graph and depth-first topological ordering
//!
//! This module provides a generic directed graph built by incremental edge
//! insertion, and a topological sort that detects cycles as it orders. It
//! enables:
//!
//! - Registering nodes and their children in any order
//! - Ordering everything reachable from a root, dependencies first
//! - Reporting the cycle path when no order exists
//! - Exporting the graph to Graphviz for inspection
//!
//! # Design Principles
//!
//! Following Parnas's information hiding principles:
//! - This module hides the storage layout (key index over a record arena)
//! - Exposes only abstract operations: add_child, topological_sort, etc.
//!
//! # Algorithm References
//!
//! Depth-first topological sort with three-color marking, as in
//! Cormen et al., *Introduction to Algorithms*, section 22.4.

mod config;
mod dot;
mod error;
mod node;
mod sort;
mod store;

pub use config::{SortConfig, Traversal};
pub use error::{GraphError, GraphResult};
pub use node::{Mark, NodeRecord};
pub use store::Graph;
