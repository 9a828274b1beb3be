//! DAG Core
//!
//! This crate provides an in-memory directed acyclic graph keyed by
//! application values. It implements:
//!
//! - Batch child assignment with all-or-nothing cycle checking
//! - Direct child and parent queries
//! - Descendant and ancestor closure queries
//! - A thread-safe shared handle with a single-writer lock
//!
//! # Architecture
//!
//! - `graph`: The graph registry, closure traversal and shared handle
//! - `error`: Error types returned by graph operations
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use dag_core::{AcyclicGraph, ErrorKind};
//!
//! let mut graph = AcyclicGraph::new("deps");
//! graph.add("app", HashSet::from(["core", "ui"])).unwrap();
//! graph.add("ui", HashSet::from(["core"])).unwrap();
//!
//! assert_eq!(graph.get_descendants(&"app").len(), 2);
//!
//! let err = graph.add("core", HashSet::from(["app"])).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::CycleViolation);
//! ```

pub mod error;
pub mod graph;

pub use error::{ErrorKind, GraphError, Result};
pub use graph::{AcyclicGraph, ChildrenView, SharedGraph};
