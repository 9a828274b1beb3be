//! Acyclic Graph
//!
//! This module implements a value-keyed directed acyclic graph (DAG) with
//! cycle-checked edge registration and transitive-closure queries.
//!
//! # Overview
//!
//! The graph is a single mapping from each registered parent to the set of
//! its direct children:
//!
//! - Nodes are the application's own values; there are no separate node
//!   objects or IDs.
//! - Edges point from parent to child. A child may have many parents.
//! - The only mutation is replacing a parent's whole child set, which is
//!   validated as one unit before it is committed.
//!
//! # Design Decisions
//!
//! 1. Identity is by value (`Eq + Hash`) rather than by reference, so equal
//!    values are always the same node and test assertions are plain set
//!    comparisons.
//!
//! 2. A candidate edge `parent -> child` is rejected when `child` already
//!    reaches `parent`. Because every commit passes that check, closure
//!    traversals can never loop.
//!
//! 3. Parents are stored in an `IndexMap` so iteration follows registration
//!    order.

mod acyclic;
mod closure;
mod shared;

pub use acyclic::{AcyclicGraph, ChildrenView};
pub use shared::SharedGraph;
