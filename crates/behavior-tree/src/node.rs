//! Node handles and the node kinds stored in a tree arena.
//!
//! Composites and decorators never own their children. They hold
//! [`NodeId`] handles into the arena of the [`Tree`](crate::Tree) that
//! created them, which makes shared subtrees and cyclic wiring possible
//! without aliasing.

use std::fmt;
use std::num::NonZeroU32;

use crate::Behavior;
use crate::composite::Composite;
use crate::decorator::Decorator;

/// Stable handle to a node inside a [`Tree`](crate::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its tree's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How many times a repeater node invokes its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// Invoke the child exactly this many times and return the last result.
    Times(NonZeroU32),

    /// Invoke the child until the tree is cancelled. Never returns otherwise.
    Forever,
}

impl Repeat {
    /// Sentinel for an unbounded repeat count.
    pub const NOT_SET: Repeat = Repeat::Forever;

    /// Bounded repeat. Returns `None` for a zero count.
    pub fn times(count: u32) -> Option<Self> {
        NonZeroU32::new(count).map(Repeat::Times)
    }
}

/// A single entry in the tree arena.
pub(crate) enum Node<C> {
    Composite(Composite),
    Decorator(Decorator),
    Leaf(Box<dyn Behavior<C>>),
}

impl<C> Node<C> {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Node::Composite(composite) => composite.kind.name(),
            Node::Decorator(decorator) => decorator.kind.name(),
            Node::Leaf(_) => "leaf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_repeat_count_is_rejected() {
        assert_eq!(Repeat::times(0), None);
        assert!(matches!(Repeat::times(3), Some(Repeat::Times(n)) if n.get() == 3));
        assert_eq!(Repeat::NOT_SET, Repeat::Forever);
    }

    #[test]
    fn node_id_displays_index() {
        assert_eq!(NodeId(4).to_string(), "#4");
        assert_eq!(NodeId(4).index(), 4);
    }
}
