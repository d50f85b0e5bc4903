//! The tree arena: node storage, wiring and evaluation.
//!
//! A [`Tree`] owns every node created through it. Composites and decorators
//! refer to their children by [`NodeId`], so wiring can happen in any order,
//! a subtree can be attached under several parents, and a decorator's child
//! can be bound after the decorator itself was attached.
//!
//! # Example
//!
//! ```
//! use behavior_tree::{Action, Tree};
//!
//! struct Counter {
//!     hits: u32,
//! }
//!
//! let mut tree = Tree::new();
//! let hit = tree.leaf(Action::new("hit", |ctx: &mut Counter| {
//!     ctx.hits += 1;
//!     true
//! }));
//! let twice = tree.sequence_of([hit, hit]).unwrap();
//! tree.set_root_child(twice).unwrap();
//!
//! let mut ctx = Counter { hits: 0 };
//! assert!(tree.run(&mut ctx));
//! assert_eq!(ctx.hits, 2);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::composite::{Composite, CompositeKind};
use crate::decorator::{Decorator, DecoratorKind};
use crate::error::{Result, TreeError};
use crate::node::{Node, NodeId, Repeat};
use crate::{Behavior, Status, TreeConfig};

/// Arena slot of the root decorator, created with every tree.
const ROOT: NodeId = NodeId(0);

/// Shared flag that stops unbounded repeaters.
///
/// Cloning yields another handle to the same flag, so the handle can be moved
/// into another thread or into a leaf of the tree itself. Only
/// [`Repeat::Forever`] observes it; every other node runs to completion.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Requests that unbounded repeaters stop after their current iteration.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clears a previous cancellation request.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// A behavior tree: an arena of nodes plus a fixed root.
///
/// # Concurrency
///
/// Evaluation takes `&mut self` and an exclusive `&mut C`, so one context can
/// only be driven by one evaluation at a time.
pub struct Tree<C> {
    nodes: Vec<Node<C>>,
    config: TreeConfig,
    rng: StdRng,
    cancel: CancelHandle,
}

impl<C> Tree<C> {
    /// Creates an empty tree with default configuration.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Creates an empty tree with the given configuration.
    pub fn with_config(config: TreeConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            nodes: vec![Node::Decorator(Decorator::new(DecoratorKind::Root))],
            config,
            rng,
            cancel: CancelHandle::default(),
        }
    }

    /// Returns the configuration this tree was built with.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of nodes in the arena, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Returns a handle that stops unbounded repeaters in this tree.
    ///
    /// Cancellation is sticky: it also applies to later runs, where an
    /// unbounded repeater returns `Failure` without ticking its child, until
    /// [`CancelHandle::reset`] is called. A cancel issued between runs is
    /// therefore never lost.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    fn insert(&mut self, node: Node<C>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn composite(&mut self, kind: CompositeKind) -> NodeId {
        self.insert(Node::Composite(Composite::new(kind)))
    }

    fn decorator(&mut self, kind: DecoratorKind) -> NodeId {
        self.insert(Node::Decorator(Decorator::new(kind)))
    }

    // ------------------------------------------------------------------------
    // Node creation
    // ------------------------------------------------------------------------

    /// Creates a selector: succeeds on the first succeeding child.
    pub fn selector(&mut self) -> NodeId {
        self.composite(CompositeKind::Selector)
    }

    /// Creates a selector that tries its children in a fresh random order on
    /// every evaluation.
    pub fn random_selector(&mut self) -> NodeId {
        self.composite(CompositeKind::RandomSelector)
    }

    /// Creates a sequence: fails on the first failing child.
    pub fn sequence(&mut self) -> NodeId {
        self.composite(CompositeKind::Sequence)
    }

    /// Creates an inverter decorator.
    pub fn inverter(&mut self) -> NodeId {
        self.decorator(DecoratorKind::Inverter)
    }

    /// Creates a decorator that always succeeds after running its child.
    pub fn succeeder(&mut self) -> NodeId {
        self.decorator(DecoratorKind::Succeeder)
    }

    /// Creates a decorator that always fails after running its child.
    pub fn failer(&mut self) -> NodeId {
        self.decorator(DecoratorKind::Failer)
    }

    /// Creates a repeater decorator.
    pub fn repeater(&mut self, repeat: Repeat) -> NodeId {
        self.decorator(DecoratorKind::Repeater(repeat))
    }

    /// Creates a decorator that reruns its child until it fails.
    pub fn repeat_until_fail(&mut self) -> NodeId {
        self.decorator(DecoratorKind::RepeatUntilFail)
    }

    /// Adds a leaf behavior to the arena.
    pub fn leaf<B>(&mut self, behavior: B) -> NodeId
    where
        B: Behavior<C> + 'static,
    {
        self.insert(Node::Leaf(Box::new(behavior)))
    }

    // ------------------------------------------------------------------------
    // Wiring
    // ------------------------------------------------------------------------

    /// Appends `child` to a composite's evaluation order.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.add_children(parent, [child])
    }

    /// Appends several children to a composite, preserving iteration order.
    ///
    /// Either all children are added or, on error, none are.
    pub fn add_children<I>(&mut self, parent: NodeId, children: I) -> Result<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let children: Vec<NodeId> = children.into_iter().collect();
        for &child in &children {
            self.check(child)?;
        }
        self.composite_mut(parent)?.children.extend(children);
        Ok(())
    }

    /// Returns the children of a composite in insertion order.
    pub fn children(&self, parent: NodeId) -> Result<&[NodeId]> {
        match self.nodes.get(parent.0) {
            Some(Node::Composite(composite)) => Ok(&composite.children),
            Some(other) => Err(TreeError::NotComposite {
                node: parent,
                kind: other.kind_name(),
            }),
            None => Err(TreeError::UnknownNode(parent)),
        }
    }

    /// Binds (or rebinds) the single child of a decorator.
    pub fn set_child(&mut self, decorator: NodeId, child: NodeId) -> Result<()> {
        self.check(child)?;
        self.decorator_mut(decorator)?.child = Some(child);
        Ok(())
    }

    /// Returns the current child of a decorator, if one is bound.
    pub fn child(&self, decorator: NodeId) -> Result<Option<NodeId>> {
        match self.nodes.get(decorator.0) {
            Some(Node::Decorator(node)) => Ok(node.child),
            Some(other) => Err(TreeError::NotDecorator {
                node: decorator,
                kind: other.kind_name(),
            }),
            None => Err(TreeError::UnknownNode(decorator)),
        }
    }

    /// Rebinds the entry point of the tree. May be called at any time.
    pub fn set_root_child(&mut self, child: NodeId) -> Result<()> {
        self.set_child(ROOT, child)
    }

    /// Returns the node currently attached under the root.
    pub fn root_child(&self) -> Option<NodeId> {
        match &self.nodes[ROOT.0] {
            Node::Decorator(root) => root.child,
            _ => None,
        }
    }

    fn check(&self, id: NodeId) -> Result<()> {
        // The root is never a valid child: it is only reachable through the tree.
        if id == ROOT || id.0 >= self.nodes.len() {
            return Err(TreeError::UnknownNode(id));
        }
        Ok(())
    }

    fn composite_mut(&mut self, id: NodeId) -> Result<&mut Composite> {
        match self.nodes.get_mut(id.0) {
            Some(Node::Composite(composite)) => Ok(composite),
            Some(other) => Err(TreeError::NotComposite {
                node: id,
                kind: other.kind_name(),
            }),
            None => Err(TreeError::UnknownNode(id)),
        }
    }

    fn decorator_mut(&mut self, id: NodeId) -> Result<&mut Decorator> {
        match self.nodes.get_mut(id.0) {
            Some(Node::Decorator(decorator)) => Ok(decorator),
            Some(other) => Err(TreeError::NotDecorator {
                node: id,
                kind: other.kind_name(),
            }),
            None => Err(TreeError::UnknownNode(id)),
        }
    }

    // ------------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------------

    /// Checks that the root and every decorator have a child bound.
    ///
    /// Decorators that are not reachable from the root are checked too, since
    /// they may become reachable through a later `set_root_child`.
    pub fn validate(&self) -> Result<()> {
        for (index, node) in self.nodes.iter().enumerate() {
            if let Node::Decorator(decorator) = node
                && decorator.child.is_none()
            {
                return Err(decorator.missing_child(NodeId(index)));
            }
        }
        Ok(())
    }

    /// Evaluates the whole tree once against `ctx`.
    ///
    /// Returns the overall outcome, or the structural error that stopped the
    /// evaluation. Side effects performed before the error are not undone.
    pub fn try_run(&mut self, ctx: &mut C) -> Result<bool> {
        let Tree {
            nodes,
            config,
            rng,
            cancel,
        } = self;
        let mut evaluator = Evaluator {
            nodes: nodes.as_slice(),
            rng,
            cancel: &*cancel,
            max_depth: config.max_depth,
        };

        let status = evaluator.eval(ROOT, ctx, 0)?;
        tracing::debug!("Behavior tree finished with {:?}", status);
        Ok(status.is_success())
    }

    /// Evaluates the whole tree once against `ctx`.
    ///
    /// # Panics
    ///
    /// Panics on a structural error (no root child, a decorator without a
    /// child, or exceeding a configured depth limit). These are assembly bugs; treating them as
    /// either outcome would corrupt the enclosing composites' semantics.
    pub fn run(&mut self, ctx: &mut C) -> bool {
        match self.try_run(ctx) {
            Ok(success) => success,
            Err(err) => panic!("behavior tree evaluation failed: {err}"),
        }
    }
}

impl<C> Default for Tree<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first walker over a tree's arena for a single run.
pub(crate) struct Evaluator<'t, C> {
    nodes: &'t [Node<C>],
    rng: &'t mut StdRng,
    cancel: &'t CancelHandle,
    max_depth: Option<usize>,
}

impl<'t, C> Evaluator<'t, C> {
    pub(crate) fn eval(&mut self, id: NodeId, ctx: &mut C, depth: usize) -> Result<Status> {
        if let Some(max_depth) = self.max_depth
            && depth > max_depth
        {
            return Err(TreeError::DepthExceeded(max_depth));
        }

        let nodes = self.nodes;
        let node = nodes.get(id.0).ok_or(TreeError::UnknownNode(id))?;
        let status = match node {
            Node::Composite(composite) => composite.run(self, ctx, depth)?,
            Node::Decorator(decorator) => decorator.run(id, self, ctx, depth)?,
            Node::Leaf(leaf) => {
                let status = leaf.tick(ctx);
                tracing::trace!(node = %id, leaf = leaf.name(), ?status, "leaf ticked");
                return Ok(status);
            }
        };

        tracing::trace!(node = %id, kind = node.kind_name(), ?status, "node evaluated");
        Ok(status)
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut *self.rng
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
