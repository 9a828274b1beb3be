//! Shared Graph
//!
//! A cloneable, thread-safe handle around [`AcyclicGraph`].
//!
//! # Thread Safety
//!
//! The graph sits behind a single `RwLock`. `add` holds the write lock for
//! validation and commit together, so no reader ever sees a child set that
//! was validated but not yet written. Queries take the read lock and may run
//! concurrently with each other.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use super::acyclic::AcyclicGraph;
use crate::error::Result;

/// A shared handle to an [`AcyclicGraph`].
///
/// Cloning the handle does not copy the graph; all clones see the same data.
#[derive(Debug)]
pub struct SharedGraph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    inner: Arc<RwLock<AcyclicGraph<T>>>,
}

impl<T> SharedGraph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Create a new empty shared graph with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self::from_graph(AcyclicGraph::new(label))
    }

    /// Wrap an existing graph.
    pub fn from_graph(graph: AcyclicGraph<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Get a copy of the graph's label.
    pub fn label(&self) -> String {
        self.inner.read().label().to_owned()
    }

    /// Register `children` as the complete child set of `parent`.
    ///
    /// See [`AcyclicGraph::add`].
    pub fn add(&self, parent: T, children: HashSet<T>) -> Result<()> {
        self.inner.write().add(parent, children)
    }

    /// Get a snapshot of the direct children of `parent`.
    ///
    /// The returned set is a copy taken under the read lock.
    pub fn get_children(&self, parent: &T) -> Result<HashSet<T>> {
        self.inner.read().get_children(parent).map(|view| view.to_set())
    }

    /// See [`AcyclicGraph::has_parent`].
    pub fn has_parent(&self, parent: &T, child: &T) -> Result<bool> {
        self.inner.read().has_parent(parent, child)
    }

    /// See [`AcyclicGraph::get_descendants`].
    pub fn get_descendants(&self, parent: &T) -> HashSet<T> {
        self.inner.read().get_descendants(parent)
    }

    /// See [`AcyclicGraph::get_ancestors`].
    pub fn get_ancestors(&self, node: &T) -> HashSet<T> {
        self.inner.read().get_ancestors(node)
    }

    /// Run `f` against a consistent view of the graph.
    ///
    /// The read lock is held for the duration of `f`, so several queries
    /// made inside it observe the same state.
    pub fn read<R>(&self, f: impl FnOnce(&AcyclicGraph<T>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Copy the current graph out of the handle.
    pub fn snapshot(&self) -> AcyclicGraph<T> {
        self.inner.read().clone()
    }
}

impl<T> Clone for SharedGraph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
