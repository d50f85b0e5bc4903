//! Leaf behavior trait.
//!
//! This module defines the [`Behavior`] trait implemented by every leaf of a
//! [`Tree`](crate::Tree). Composite and decorator nodes are owned by the tree
//! arena itself; leaves are the only user-extensible nodes. The trait is
//! generic over a context type `C`, the blackboard the caller passes into
//! each evaluation.

use crate::Status;

/// A leaf node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this leaf against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Leaves can read
    ///   application state and modify it (e.g., to pop a stack or fill a slot).
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    fn tick(&self, ctx: &mut C) -> Status;

    /// Human-readable name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of leaves.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
