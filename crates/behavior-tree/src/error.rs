//! Structural errors raised while wiring or evaluating a tree.
//!
//! Leaf-level failures are never errors; they are ordinary
//! [`Status::Failure`](crate::Status::Failure) outcomes. The variants below
//! are programming mistakes in how the tree was assembled.

use thiserror::Error;

use crate::NodeId;

/// Errors surfaced by [`Tree`](crate::Tree) wiring and evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("tree root has no child; call set_root_child before running")]
    MissingRootChild,

    #[error("decorator {0} was evaluated without a child")]
    MissingChild(NodeId),

    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),

    #[error("node {node} is a {kind}, not a composite")]
    NotComposite { node: NodeId, kind: &'static str },

    #[error("node {node} is a {kind}, not a decorator")]
    NotDecorator { node: NodeId, kind: &'static str },

    #[error("evaluation exceeded the maximum depth of {0}")]
    DepthExceeded(usize),
}

pub type Result<T> = std::result::Result<T, TreeError>;
