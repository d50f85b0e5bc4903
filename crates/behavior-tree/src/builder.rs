//! Builder utilities for ergonomic behavior tree construction.
//!
//! Every node kind can be created and wired in two steps (`tree.sequence()`
//! followed by `tree.add_children(...)`). The shorthands in this module do
//! both at once, so a tree can be written bottom-up in a few lines:
//!
//! ```
//! use behavior_tree::{Action, Tree};
//!
//! let mut tree: Tree<u32> = Tree::new();
//! let bump = tree.leaf(Action::new("bump", |n: &mut u32| {
//!     *n += 1;
//!     *n < 3
//! }));
//! let looped = tree.repeat_until_fail_of(bump).unwrap();
//! tree.set_root_child(looped).unwrap();
//!
//! let mut n = 0;
//! assert!(tree.run(&mut n));
//! assert_eq!(n, 3);
//! ```

use crate::error::Result;
use crate::{NodeId, Repeat, Tree};

impl<C> Tree<C> {
    /// Creates a sequence with the given children.
    ///
    /// Shorthand for `sequence()` followed by `add_children(..)`.
    pub fn sequence_of<I>(&mut self, children: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let node = self.sequence();
        self.add_children(node, children)?;
        Ok(node)
    }

    /// Creates a selector with the given children.
    pub fn selector_of<I>(&mut self, children: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let node = self.selector();
        self.add_children(node, children)?;
        Ok(node)
    }

    /// Creates a random selector with the given children.
    pub fn random_selector_of<I>(&mut self, children: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let node = self.random_selector();
        self.add_children(node, children)?;
        Ok(node)
    }

    /// Creates an inverter around `child`.
    pub fn inverter_of(&mut self, child: NodeId) -> Result<NodeId> {
        let node = self.inverter();
        self.set_child(node, child)?;
        Ok(node)
    }

    /// Creates a succeeder around `child`.
    pub fn succeeder_of(&mut self, child: NodeId) -> Result<NodeId> {
        let node = self.succeeder();
        self.set_child(node, child)?;
        Ok(node)
    }

    /// Creates a failer around `child`.
    pub fn failer_of(&mut self, child: NodeId) -> Result<NodeId> {
        let node = self.failer();
        self.set_child(node, child)?;
        Ok(node)
    }

    /// Creates a repeater around `child`.
    pub fn repeater_of(&mut self, repeat: Repeat, child: NodeId) -> Result<NodeId> {
        let node = self.repeater(repeat);
        self.set_child(node, child)?;
        Ok(node)
    }

    /// Creates a repeat-until-fail decorator around `child`.
    pub fn repeat_until_fail_of(&mut self, child: NodeId) -> Result<NodeId> {
        let node = self.repeat_until_fail();
        self.set_child(node, child)?;
        Ok(node)
    }
}
