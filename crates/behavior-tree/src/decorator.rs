//! Decorator behavior nodes.
//!
//! Decorators wrap a single child and modify its result or execution. The
//! child is bound separately from construction (see
//! [`Tree::set_child`](crate::Tree::set_child)); evaluating a decorator whose
//! child was never bound is a structural error.

use crate::error::{Result, TreeError};
use crate::tree::Evaluator;
use crate::{NodeId, Repeat, Status};

/// Transformation applied by a decorator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecoratorKind {
    /// Entry point owned by the tree. Returns its child's result unchanged.
    Root,

    /// Logical NOT of the child's result.
    Inverter,

    /// Runs the child once and returns `Success` regardless of its result.
    ///
    /// Useful for optional branches whose failure must not abort the
    /// enclosing sequence.
    Succeeder,

    /// Runs the child once and returns `Failure` regardless of its result.
    Failer,

    /// Runs the child a fixed number of times, or until cancelled.
    Repeater(Repeat),

    /// Reruns the child until it fails, then returns `Success`.
    RepeatUntilFail,
}

impl DecoratorKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            DecoratorKind::Root => "root",
            DecoratorKind::Inverter => "inverter",
            DecoratorKind::Succeeder => "succeeder",
            DecoratorKind::Failer => "failer",
            DecoratorKind::Repeater(_) => "repeater",
            DecoratorKind::RepeatUntilFail => "repeat-until-fail",
        }
    }
}

/// A decorator node: a transformation plus an optional child handle.
pub(crate) struct Decorator {
    pub(crate) kind: DecoratorKind,
    pub(crate) child: Option<NodeId>,
}

impl Decorator {
    pub(crate) fn new(kind: DecoratorKind) -> Self {
        Self { kind, child: None }
    }

    pub(crate) fn missing_child(&self, id: NodeId) -> TreeError {
        match self.kind {
            DecoratorKind::Root => TreeError::MissingRootChild,
            _ => TreeError::MissingChild(id),
        }
    }

    pub(crate) fn run<C>(
        &self,
        id: NodeId,
        evaluator: &mut Evaluator<'_, C>,
        ctx: &mut C,
        depth: usize,
    ) -> Result<Status> {
        let child = self.child.ok_or_else(|| self.missing_child(id))?;
        let depth = depth + 1;

        match self.kind {
            DecoratorKind::Root => evaluator.eval(child, ctx, depth),
            DecoratorKind::Inverter => Ok(evaluator.eval(child, ctx, depth)?.invert()),
            DecoratorKind::Succeeder => {
                // Execute child but ignore the result
                evaluator.eval(child, ctx, depth)?;
                Ok(Status::Success)
            }
            DecoratorKind::Failer => {
                evaluator.eval(child, ctx, depth)?;
                Ok(Status::Failure)
            }
            DecoratorKind::Repeater(Repeat::Times(count)) => {
                let mut last = Status::Failure;
                for _ in 0..count.get() {
                    last = evaluator.eval(child, ctx, depth)?;
                }
                Ok(last)
            }
            DecoratorKind::Repeater(Repeat::Forever) => loop {
                if evaluator.is_cancelled() {
                    tracing::warn!("Repeater {} stopped by cancellation", id);
                    return Ok(Status::Failure);
                }
                evaluator.eval(child, ctx, depth)?;
            },
            DecoratorKind::RepeatUntilFail => {
                while evaluator.eval(child, ctx, depth)?.is_success() {}
                Ok(Status::Success)
            }
        }
    }
}
