use thiserror::Error;

use crate::kind::NodeCategory;
use crate::tree::NodeId;

/// Structural misuse of the node base.
///
/// Absence is never an error: an empty slot reads as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    #[error("role `{role}` does not accept a {found} node")]
    SlotMismatch {
        role: &'static str,
        found: NodeCategory,
    },

    #[error("node {child} is already attached to {parent}")]
    AlreadyAttached { child: NodeId, parent: NodeId },

    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },

    #[error("role `{role}` holds a list of children; use `add_child`")]
    NotSingleValued { role: &'static str },

    #[error("role `{role}` holds a single child; use `set_child`")]
    NotMultiValued { role: &'static str },

    #[error("node {anchor} is not a child of {parent}")]
    NotAChild { parent: NodeId, anchor: NodeId },

    #[error("node {node} has no parent")]
    Detached { node: NodeId },
}
