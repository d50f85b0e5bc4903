//! Stack leaves.
//!
//! These model a producer/consumer protocol over a LIFO pool shared between
//! the tree and the host application. [`PopFromStack`] is the only one that
//! can fail; its failure is how "ran out of alternatives" propagates up
//! through the enclosing sequences and selectors.

use crate::leaves::{Observer, SlotMut, SlotRef, StackMut, StackRef};
use crate::{Behavior, Status};

/// Where [`PushToStack`] takes the pushed item from.
pub enum ItemSource<C, T> {
    /// A fixed value, cloned on every tick.
    Value(T),

    /// The current content of a slot in the context.
    Slot(SlotRef<C, T>),
}

/// Pushes an item onto a stack. Always succeeds.
///
/// When the item comes from an empty slot nothing is pushed.
pub struct PushToStack<C, T> {
    item: ItemSource<C, T>,
    stack: StackMut<C, T>,
}

impl<C, T> PushToStack<C, T> {
    /// Pushes a clone of `item` on every tick.
    pub fn new(item: T, stack: StackMut<C, T>) -> Self {
        Self {
            item: ItemSource::Value(item),
            stack,
        }
    }

    /// Pushes whatever `slot` holds at tick time.
    pub fn from_slot(slot: SlotRef<C, T>, stack: StackMut<C, T>) -> Self {
        Self {
            item: ItemSource::Slot(slot),
            stack,
        }
    }
}

impl<C, T> Behavior<C> for PushToStack<C, T>
where
    T: Clone + Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        let item = match &self.item {
            ItemSource::Value(item) => Some(item.clone()),
            ItemSource::Slot(slot) => slot(&*ctx).clone(),
        };
        let stack = (self.stack)(ctx);
        match item {
            Some(item) => stack.push(item),
            None => tracing::warn!("PushToStack: source slot is empty, nothing pushed"),
        }
        Status::Success
    }

    fn name(&self) -> &str {
        "push to stack"
    }
}

/// Replaces a working stack with a copy of a source stack, then optionally
/// pushes one extra item on top. Always succeeds.
///
/// This is the one leaf that duplicates state: it fetches a fresh pool of
/// resources to work from.
pub struct GetStack<C, T> {
    working: StackMut<C, T>,
    source: StackRef<C, T>,
    extra: Option<T>,
}

impl<C, T> GetStack<C, T> {
    pub fn new(working: StackMut<C, T>, source: StackRef<C, T>) -> Self {
        Self {
            working,
            source,
            extra: None,
        }
    }

    /// Pushes `extra` on top of every freshly copied stack.
    pub fn with_extra(mut self, extra: T) -> Self {
        self.extra = Some(extra);
        self
    }
}

impl<C, T> Behavior<C> for GetStack<C, T>
where
    T: Clone + Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        let mut fresh = (self.source)(ctx).clone();
        if let Some(extra) = &self.extra {
            fresh.push(extra.clone());
        }
        tracing::debug!("GetStack: loaded {} items", fresh.len());
        *(self.working)(ctx) = fresh;
        Status::Success
    }

    fn name(&self) -> &str {
        "get stack"
    }
}

/// Pops the top of a stack into a slot.
///
/// Fails without touching the slot when the stack is empty.
pub struct PopFromStack<C, T> {
    out: SlotMut<C, T>,
    stack: StackMut<C, T>,
    observer: Option<Observer<T>>,
}

impl<C, T> PopFromStack<C, T> {
    pub fn new(out: SlotMut<C, T>, stack: StackMut<C, T>) -> Self {
        Self {
            out,
            stack,
            observer: None,
        }
    }

    /// Calls `observer` with every popped item.
    pub fn with_observer(mut self, observer: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }
}

impl<C, T> Behavior<C> for PopFromStack<C, T>
where
    T: Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        let Some(item) = (self.stack)(ctx).pop() else {
            tracing::debug!("PopFromStack: stack is empty");
            return Status::Failure;
        };

        if let Some(observer) = &self.observer {
            observer(&item);
        }
        *(self.out)(ctx) = Some(item);
        Status::Success
    }

    fn name(&self) -> &str {
        "pop from stack"
    }
}

/// Succeeds iff the stack has no elements.
pub struct StackIsEmpty<C, T> {
    stack: StackRef<C, T>,
}

impl<C, T> StackIsEmpty<C, T> {
    pub fn new(stack: StackRef<C, T>) -> Self {
        Self { stack }
    }
}

impl<C, T> Behavior<C> for StackIsEmpty<C, T> {
    fn tick(&self, ctx: &mut C) -> Status {
        (self.stack)(ctx).is_empty().into()
    }

    fn name(&self) -> &str {
        "stack is empty"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Default)]
    struct Pool {
        source: Vec<u32>,
        working: Vec<u32>,
        held: Option<u32>,
    }

    fn working(pool: &mut Pool) -> &mut Vec<u32> {
        &mut pool.working
    }

    fn source(pool: &Pool) -> &Vec<u32> {
        &pool.source
    }

    fn held(pool: &mut Pool) -> &mut Option<u32> {
        &mut pool.held
    }

    fn held_ref(pool: &Pool) -> &Option<u32> {
        &pool.held
    }

    #[test]
    fn push_fixed_value() {
        let push = PushToStack::new(7, working);
        let mut pool = Pool::default();
        assert_eq!(push.tick(&mut pool), Status::Success);
        assert_eq!(push.tick(&mut pool), Status::Success);
        assert_eq!(pool.working, [7, 7]);
    }

    #[test]
    fn push_from_slot_skips_empty_slot() {
        let push = PushToStack::from_slot(held_ref, working);
        let mut pool = Pool::default();
        assert_eq!(push.tick(&mut pool), Status::Success);
        assert!(pool.working.is_empty());

        pool.held = Some(4);
        assert_eq!(push.tick(&mut pool), Status::Success);
        assert_eq!(pool.working, [4]);
    }

    #[test]
    fn get_stack_replaces_working_copy() {
        let get = GetStack::new(working, source);
        let mut pool = Pool {
            source: vec![3, 2, 1],
            working: vec![9, 9, 9, 9],
            held: None,
        };
        assert_eq!(get.tick(&mut pool), Status::Success);
        assert_eq!(pool.working, [3, 2, 1]);
        assert_eq!(pool.source, [3, 2, 1]);
    }

    #[test]
    fn get_stack_pushes_extra_on_top() {
        let get = GetStack::new(working, source).with_extra(0);
        let mut pool = Pool {
            source: vec![3, 2, 1],
            ..Pool::default()
        };
        get.tick(&mut pool);
        assert_eq!(pool.working.len(), pool.source.len() + 1);
        assert_eq!(pool.working.last(), Some(&0));
    }

    #[test]
    fn pop_takes_top_into_slot() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let pop = PopFromStack::new(held, working)
            .with_observer(move |item: &u32| log.lock().unwrap().push(*item));
        let mut pool = Pool {
            working: vec![3, 2, 1],
            ..Pool::default()
        };

        assert_eq!(pop.tick(&mut pool), Status::Success);
        assert_eq!(pool.held, Some(1));
        assert_eq!(pool.working, [3, 2]);
        assert_eq!(*seen.lock().unwrap(), [1]);
    }

    #[test]
    fn pop_on_empty_stack_fails_without_mutation() {
        let pop = PopFromStack::new(held, working);
        let mut pool = Pool {
            held: Some(5),
            ..Pool::default()
        };

        assert_eq!(pop.tick(&mut pool), Status::Failure);
        assert!(pool.working.is_empty());
        assert_eq!(pool.held, Some(5));
    }

    #[test]
    fn stack_is_empty_is_a_pure_predicate() {
        let empty = StackIsEmpty::new(source);
        let mut pool = Pool::default();
        assert_eq!(empty.tick(&mut pool), Status::Success);

        pool.source.push(1);
        assert_eq!(empty.tick(&mut pool), Status::Failure);
        assert_eq!(pool.source, [1]);
    }
}
