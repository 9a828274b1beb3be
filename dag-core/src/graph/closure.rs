//! Transitive Closure
//!
//! Reachability helpers over a `parent -> children` mapping.
//!
//! All traversals use an explicit stack and a visited set. The visited set is
//! not needed for termination (the mapping is acyclic) but keeps diamond
//! shaped graphs linear instead of exponential, and the explicit stack keeps
//! deep chains off the call stack.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use indexmap::IndexMap;

/// Registry storage: each registered parent mapped to its direct children.
pub(crate) type Edges<T> = IndexMap<T, HashSet<T>>;

/// Collect every node reachable from `start` by following one or more edges.
///
/// A node that was never registered as a parent has no children, so the
/// result for it is empty.
pub(crate) fn descendants<T>(edges: &Edges<T>, start: &T) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    let mut found = HashSet::new();
    let mut stack: Vec<&T> = match edges.get(start) {
        Some(children) => children.iter().collect(),
        None => return found,
    };

    while let Some(node) = stack.pop() {
        if !found.insert(node.clone()) {
            continue;
        }
        if let Some(children) = edges.get(node) {
            stack.extend(children.iter().filter(|c| !found.contains(*c)));
        }
    }

    found
}

/// Check whether `target` is reachable from `start` by one or more edges.
///
/// Same answer as `descendants(edges, start).contains(target)` but stops at
/// the first hit and never clones a node.
pub(crate) fn reaches<T>(edges: &Edges<T>, start: &T, target: &T) -> bool
where
    T: Eq + Hash,
{
    let mut visited: HashSet<&T> = HashSet::new();
    let mut stack: Vec<&T> = match edges.get(start) {
        Some(children) => children.iter().collect(),
        None => return false,
    };

    while let Some(node) = stack.pop() {
        if node == target {
            return true;
        }
        if !visited.insert(node) {
            continue;
        }
        if let Some(children) = edges.get(node) {
            stack.extend(children.iter().filter(|c| !visited.contains(*c)));
        }
    }

    false
}

/// Collect every registered parent from which `node` is reachable.
pub(crate) fn ancestors<T>(edges: &Edges<T>, node: &T) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    // Reverse index: child -> parents that list it.
    let mut reverse: HashMap<&T, Vec<&T>> = HashMap::new();
    for (parent, children) in edges {
        for child in children {
            reverse.entry(child).or_default().push(parent);
        }
    }

    let mut found = HashSet::new();
    let mut stack: Vec<&T> = reverse.get(node).cloned().unwrap_or_default();

    while let Some(parent) = stack.pop() {
        if !found.insert(parent.clone()) {
            continue;
        }
        if let Some(grandparents) = reverse.get(parent) {
            stack.extend(grandparents.iter().filter(|p| !found.contains(**p)));
        }
    }

    found
}
