//! Variable leaves over scalar slots.

use crate::leaves::{Observer, SlotMut, SlotRef};
use crate::{Behavior, Status};

/// Copies the value of one slot into another. Always succeeds.
///
/// An empty source empties the target. The observer, if any, only sees
/// captured values.
pub struct SetVariable<C, T> {
    target: SlotMut<C, T>,
    source: SlotRef<C, T>,
    observer: Option<Observer<T>>,
}

impl<C, T> SetVariable<C, T> {
    pub fn new(target: SlotMut<C, T>, source: SlotRef<C, T>) -> Self {
        Self {
            target,
            source,
            observer: None,
        }
    }

    /// Calls `observer` with every captured value.
    pub fn with_observer(mut self, observer: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }
}

impl<C, T> Behavior<C> for SetVariable<C, T>
where
    T: Clone + Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        let value = (self.source)(ctx).clone();
        if let (Some(observer), Some(captured)) = (&self.observer, &value) {
            observer(captured);
        }
        *(self.target)(ctx) = value;
        Status::Success
    }

    fn name(&self) -> &str {
        "set variable"
    }
}

/// Succeeds iff the slot holds no value.
pub struct IsNull<C, T> {
    slot: SlotRef<C, T>,
}

impl<C, T> IsNull<C, T> {
    pub fn new(slot: SlotRef<C, T>) -> Self {
        Self { slot }
    }
}

impl<C, T> Behavior<C> for IsNull<C, T> {
    fn tick(&self, ctx: &mut C) -> Status {
        (self.slot)(ctx).is_none().into()
    }

    fn name(&self) -> &str {
        "is null"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    #[derive(Default)]
    struct Slots {
        current: Option<String>,
        used: Option<String>,
    }

    #[test]
    fn set_variable_copies_and_reports() {
        let reported = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&reported);
        let set = SetVariable::new(|s: &mut Slots| &mut s.used, |s: &Slots| &s.current)
            .with_observer(move |_: &String| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let mut slots = Slots {
            current: Some("door 2".to_owned()),
            used: None,
        };
        assert_eq!(set.tick(&mut slots), Status::Success);
        assert_eq!(slots.used.as_deref(), Some("door 2"));
        assert_eq!(slots.current.as_deref(), Some("door 2"));
        assert_eq!(reported.load(Ordering::SeqCst), 1);

        slots.current = None;
        assert_eq!(set.tick(&mut slots), Status::Success);
        assert_eq!(slots.used, None);
        assert_eq!(reported.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn is_null_tracks_slot_state() {
        let is_null = IsNull::new(|s: &Slots| &s.used);
        let mut slots = Slots::default();
        assert_eq!(is_null.tick(&mut slots), Status::Success);

        slots.used = Some("door 1".to_owned());
        assert_eq!(is_null.tick(&mut slots), Status::Failure);
    }
}
