//! Acyclic Graph
//!
//! The registry of parent -> children assignments and the cycle guard that
//! keeps it acyclic.
//!
//! # Invariants
//!
//! After every successful `add`:
//!
//! - No node is its own direct or transitive child.
//! - A parent's child set never contains the parent.
//!
//! Validation runs to completion before anything is written, so a failed
//! `add` leaves the graph untouched and no rollback is ever needed.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use super::closure::{self, Edges};
use crate::error::{GraphError, Result};

/// A value-keyed directed acyclic graph.
///
/// Nodes are identified by the values themselves, so `T` needs structural
/// equality and a stable hash. A value is *registered* once it has been
/// passed as the parent of an `add` call; a value that only ever appears as
/// a child is a leaf reference, not a registered parent.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use dag_core::AcyclicGraph;
///
/// let mut graph = AcyclicGraph::new("categories");
/// graph.add("food", HashSet::from(["fruit", "bread"])).unwrap();
/// graph.add("fruit", HashSet::from(["apple"])).unwrap();
///
/// assert!(graph.has_parent(&"food", &"fruit").unwrap());
/// assert_eq!(graph.get_descendants(&"food").len(), 3);
///
/// // Closing the loop is rejected and leaves the graph as it was.
/// assert!(graph.add("apple", HashSet::from(["food"])).is_err());
/// assert!(graph.get_descendants(&"apple").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AcyclicGraph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Human-readable name for this graph.
    label: String,

    /// Direct children of every registered parent, in registration order.
    edges: Edges<T>,
}

impl<T> AcyclicGraph<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Create a new empty graph with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            edges: Edges::default(),
        }
    }

    /// Create a new empty graph with room for `capacity` parents.
    pub fn with_capacity(label: impl Into<String>, capacity: usize) -> Self {
        Self {
            label: label.into(),
            edges: Edges::with_capacity(capacity),
        }
    }

    /// Get the graph's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check that assigning `children` to `parent` would keep the graph
    /// acyclic, without changing anything.
    ///
    /// Each child is checked against the graph as it stands now. The first
    /// offending child decides the error.
    pub fn check(&self, parent: &T, children: &HashSet<T>) -> Result<()> {
        for child in children {
            if child == parent {
                return Err(GraphError::self_loop(parent));
            }
            // parent -> child closes a cycle exactly when child already
            // reaches parent.
            if closure::reaches(&self.edges, child, parent) {
                return Err(GraphError::cycle(parent, child));
            }
        }
        Ok(())
    }

    /// Register `children` as the complete set of direct children of `parent`.
    ///
    /// Any previous child set of `parent` is replaced, not merged. The whole
    /// set is validated first; if any child would form a self-loop or a
    /// cycle, nothing is committed.
    pub fn add(&mut self, parent: T, children: HashSet<T>) -> Result<()> {
        if let Err(err) = self.check(&parent, &children) {
            debug!(graph = %self.label, ?parent, %err, "rejected child assignment");
            return Err(err);
        }

        let count = children.len();
        let replaced = self.edges.insert(parent, children).is_some();
        debug!(graph = %self.label, children = count, replaced, "committed child assignment");
        Ok(())
    }

    /// Get a read-only view of the direct children of `parent`.
    ///
    /// Fails with [`GraphError::UnknownParent`] if `parent` was never passed
    /// to [`add`](Self::add). A parent registered with an empty set yields an
    /// empty view.
    pub fn get_children(&self, parent: &T) -> Result<ChildrenView<'_, T>> {
        self.edges
            .get(parent)
            .map(|children| ChildrenView { children })
            .ok_or_else(|| GraphError::unknown_parent(parent))
    }

    /// Check whether `child` is a direct child of `parent`.
    ///
    /// Fails with [`GraphError::UnknownParent`] if `parent` is not
    /// registered, regardless of what `child` is.
    pub fn has_parent(&self, parent: &T, child: &T) -> Result<bool> {
        self.edges
            .get(parent)
            .map(|children| children.contains(child))
            .ok_or_else(|| GraphError::unknown_parent(parent))
    }

    /// Get every node reachable from `parent` through one or more edges.
    ///
    /// Never fails: an unregistered node is a leaf and has no descendants.
    pub fn get_descendants(&self, parent: &T) -> HashSet<T> {
        let found = closure::descendants(&self.edges, parent);
        trace!(graph = %self.label, ?parent, count = found.len(), "computed descendants");
        found
    }

    /// Get every registered parent from which `node` is reachable.
    ///
    /// Never fails: a node nothing points at has no ancestors.
    pub fn get_ancestors(&self, node: &T) -> HashSet<T> {
        let found = closure::ancestors(&self.edges, node);
        trace!(graph = %self.label, ?node, count = found.len(), "computed ancestors");
        found
    }

    /// Check whether `node` is reachable from `ancestor`.
    pub fn is_descendant(&self, ancestor: &T, node: &T) -> bool {
        closure::reaches(&self.edges, ancestor, node)
    }

    /// Check whether `ancestor` reaches `node`. Same as
    /// [`is_descendant`](Self::is_descendant).
    pub fn is_ancestor(&self, ancestor: &T, node: &T) -> bool {
        self.is_descendant(ancestor, node)
    }

    /// Check whether `parent` has been registered via `add`.
    pub fn contains_parent(&self, parent: &T) -> bool {
        self.edges.contains_key(parent)
    }

    /// Iterate over registered parents in registration order.
    pub fn parents(&self) -> impl Iterator<Item = &T> + '_ {
        self.edges.keys()
    }

    /// Get the number of registered parents.
    pub fn parent_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether no parent has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Read-only view over the children of one parent.
///
/// Borrowing the graph means the view cannot outlive, or be mutated
/// alongside, the graph. Use [`to_set`](Self::to_set) for an owned copy;
/// changes to that copy never reach the graph.
#[derive(Debug)]
pub struct ChildrenView<'a, T> {
    children: &'a HashSet<T>,
}

impl<T> Clone for ChildrenView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ChildrenView<'_, T> {}

impl<'a, T> ChildrenView<'a, T>
where
    T: Clone + Eq + Hash,
{
    /// Get the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check whether the parent has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check whether `child` is in the view.
    pub fn contains(&self, child: &T) -> bool {
        self.children.contains(child)
    }

    /// Iterate over the children in arbitrary order.
    pub fn iter(&self) -> std::collections::hash_set::Iter<'a, T> {
        self.children.iter()
    }

    /// Copy the children into an owned set.
    pub fn to_set(&self) -> HashSet<T> {
        self.children.clone()
    }
}

impl<'a, T> IntoIterator for &ChildrenView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl<T> PartialEq<HashSet<T>> for ChildrenView<'_, T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &HashSet<T>) -> bool {
        self.children == other
    }
}
