//! Closure-backed leaf.

use crate::{Behavior, Status};

/// A named leaf backed by a closure returning success or failure.
///
/// Suitable for both actions (which mutate the context) and conditions
/// (which only read it). Probabilistic actions draw from an RNG kept in the
/// context, so runs stay reproducible when the caller seeds it.
///
/// # Example
///
/// ```
/// use behavior_tree::{Action, Behavior, Status};
///
/// let is_even = Action::new("is even", |n: &mut u32| *n % 2 == 0);
/// assert_eq!(is_even.tick(&mut 4), Status::Success);
/// assert_eq!(is_even.tick(&mut 7), Status::Failure);
/// ```
pub struct Action<F> {
    name: String,
    run: F,
}

impl<F> Action<F> {
    /// Creates a leaf that calls `run` on every tick.
    pub fn new<C>(name: impl Into<String>, run: F) -> Self
    where
        F: Fn(&mut C) -> bool,
    {
        Self {
            name: name.into(),
            run,
        }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: Fn(&mut C) -> bool + Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        let success = (self.run)(ctx);
        tracing::debug!(
            "{} {}",
            self.name,
            if success { "succeeded" } else { "failed" }
        );
        success.into()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
