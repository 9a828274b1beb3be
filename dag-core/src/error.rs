//! Error types for graph operations.
//!
//! Every failure is detected before the graph is touched, so receiving any
//! of these errors means the graph is exactly as it was before the call.

/// Errors returned by [`AcyclicGraph`](crate::graph::AcyclicGraph) operations.
///
/// Offending values are rendered with `Debug` at the point of failure so the
/// error does not need to carry the node type around.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node was proposed as its own child.
    #[error("self-loop: {node} cannot be its own child")]
    SelfLoop { node: String },

    /// The proposed edge would close a cycle: `parent` is already reachable
    /// from `child`.
    #[error("cycle: {parent} is already a descendant of {child}")]
    CycleViolation { parent: String, child: String },

    /// A query referenced a parent that was never registered via `add`.
    #[error("unknown parent: {parent}")]
    UnknownParent { parent: String },
}

/// Payload-free discriminant of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SelfLoop,
    CycleViolation,
    UnknownParent,
}

impl GraphError {
    pub(crate) fn self_loop(node: &impl std::fmt::Debug) -> Self {
        Self::SelfLoop {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn cycle(parent: &impl std::fmt::Debug, child: &impl std::fmt::Debug) -> Self {
        Self::CycleViolation {
            parent: format!("{parent:?}"),
            child: format!("{child:?}"),
        }
    }

    pub(crate) fn unknown_parent(parent: &impl std::fmt::Debug) -> Self {
        Self::UnknownParent {
            parent: format!("{parent:?}"),
        }
    }

    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SelfLoop { .. } => ErrorKind::SelfLoop,
            Self::CycleViolation { .. } => ErrorKind::CycleViolation,
            Self::UnknownParent { .. } => ErrorKind::UnknownParent,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_debug_values() {
        let err = GraphError::cycle(&"parent", &"child");
        assert_eq!(
            err.to_string(),
            r#"cycle: "parent" is already a descendant of "child""#
        );

        let err = GraphError::self_loop(&7);
        assert_eq!(err.to_string(), "self-loop: 7 cannot be its own child");
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(GraphError::self_loop(&1).kind(), ErrorKind::SelfLoop);
        assert_eq!(GraphError::cycle(&1, &2).kind(), ErrorKind::CycleViolation);
        assert_eq!(
            GraphError::unknown_parent(&"x").kind(),
            ErrorKind::UnknownParent
        );
    }
}
