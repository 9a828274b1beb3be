//! Property Tests
//!
//! Random sequences of child assignments over a small node universe, so
//! that collisions and would-be cycles are frequent.

use std::collections::HashSet;

use dag_core::AcyclicGraph;
use proptest::prelude::*;

const NODES: u8 = 12;

fn assignment() -> impl Strategy<Value = (u8, HashSet<u8>)> {
    (0..NODES, prop::collection::hash_set(0..NODES, 0..4))
}

proptest! {
    #[test]
    fn no_node_is_its_own_descendant(ops in prop::collection::vec(assignment(), 0..40)) {
        let mut graph = AcyclicGraph::new("prop");
        for (parent, children) in ops {
            let _ = graph.add(parent, children);
        }

        for node in 0..NODES {
            prop_assert!(!graph.get_descendants(&node).contains(&node));
        }
    }

    #[test]
    fn rejected_add_leaves_graph_unchanged(ops in prop::collection::vec(assignment(), 0..40)) {
        let mut graph = AcyclicGraph::new("prop");
        for (parent, children) in ops {
            let before: Vec<HashSet<u8>> = (0..NODES).map(|n| graph.get_descendants(&n)).collect();
            let had_parent = graph.contains_parent(&parent);

            if graph.add(parent, children).is_err() {
                let after: Vec<HashSet<u8>> = (0..NODES).map(|n| graph.get_descendants(&n)).collect();
                prop_assert_eq!(before, after);
                prop_assert_eq!(had_parent, graph.contains_parent(&parent));
            }
        }
    }

    #[test]
    fn successful_add_sets_children_exactly(ops in prop::collection::vec(assignment(), 0..40)) {
        let mut graph = AcyclicGraph::new("prop");
        for (parent, children) in ops {
            if graph.add(parent, children.clone()).is_ok() {
                prop_assert_eq!(graph.get_children(&parent).unwrap().to_set(), children);
            }
        }
    }

    #[test]
    fn ancestors_mirror_descendants(ops in prop::collection::vec(assignment(), 0..40)) {
        let mut graph = AcyclicGraph::new("prop");
        for (parent, children) in ops {
            let _ = graph.add(parent, children);
        }

        for a in 0..NODES {
            for b in 0..NODES {
                let down = graph.get_descendants(&a).contains(&b);
                prop_assert_eq!(down, graph.get_ancestors(&b).contains(&a));
                prop_assert_eq!(down, graph.is_descendant(&a, &b));
            }
        }
    }
}
