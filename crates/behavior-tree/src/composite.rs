//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple children. This
//! module provides the fundamental building blocks for creating decision
//! trees: Sequence (AND logic), Selector (OR logic) and RandomSelector
//! (OR logic over a shuffled order).

use rand::seq::SliceRandom;

use crate::error::Result;
use crate::tree::Evaluator;
use crate::{NodeId, Status};

/// Aggregation policy of a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompositeKind {
    /// Executes children in order until one succeeds.
    ///
    /// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
    /// - If a child returns `Failure`, the selector **continues** to the next child
    /// - If all children return `Failure` (or there are none), the selector returns `Failure`
    Selector,

    /// Same as `Selector`, but over a permutation of the children drawn anew on
    /// every evaluation. No ordering is remembered between evaluations.
    RandomSelector,

    /// Executes children in order until one fails.
    ///
    /// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
    /// - If a child returns `Success`, the sequence **continues** to the next child
    /// - If all children return `Success` (or there are none), the sequence returns `Success`
    Sequence,
}

impl CompositeKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            CompositeKind::Selector => "selector",
            CompositeKind::RandomSelector => "random selector",
            CompositeKind::Sequence => "sequence",
        }
    }
}

/// A composite node: a policy plus child handles in insertion order.
pub(crate) struct Composite {
    pub(crate) kind: CompositeKind,
    pub(crate) children: Vec<NodeId>,
}

impl Composite {
    pub(crate) fn new(kind: CompositeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub(crate) fn run<C>(
        &self,
        evaluator: &mut Evaluator<'_, C>,
        ctx: &mut C,
        depth: usize,
    ) -> Result<Status> {
        match self.kind {
            CompositeKind::Selector => select(&self.children, evaluator, ctx, depth),
            CompositeKind::RandomSelector => {
                let mut order = self.children.clone();
                order.shuffle(evaluator.rng());
                select(&order, evaluator, ctx, depth)
            }
            CompositeKind::Sequence => {
                for &child in &self.children {
                    match evaluator.eval(child, ctx, depth + 1)? {
                        Status::Success => continue,
                        Status::Failure => return Ok(Status::Failure), // Short-circuit
                    }
                }
                Ok(Status::Success)
            }
        }
    }
}

fn select<C>(
    children: &[NodeId],
    evaluator: &mut Evaluator<'_, C>,
    ctx: &mut C,
    depth: usize,
) -> Result<Status> {
    for &child in children {
        match evaluator.eval(child, ctx, depth + 1)? {
            Status::Success => return Ok(Status::Success), // Short-circuit
            Status::Failure => continue,
        }
    }
    Ok(Status::Failure)
}
