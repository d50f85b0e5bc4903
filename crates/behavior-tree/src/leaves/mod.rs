//! Reusable leaf nodes.
//!
//! Leaves reach into the caller's context through lenses: plain function
//! pointers that project a stack (`Vec<T>`, top at the end) or a slot
//! (`Option<T>`, `None` meaning null) out of `C`. A non-capturing closure
//! coerces to a lens:
//!
//! ```
//! use behavior_tree::leaves::{PopFromStack, StackMut, SlotMut};
//!
//! struct Ctx {
//!     doors: Vec<u32>,
//!     current: Option<u32>,
//! }
//!
//! let stack: StackMut<Ctx, u32> = |ctx| &mut ctx.doors;
//! let slot: SlotMut<Ctx, u32> = |ctx| &mut ctx.current;
//! let _pop = PopFromStack::new(slot, stack);
//! ```
//!
//! - **Stack leaves**: [`PushToStack`], [`GetStack`], [`PopFromStack`], [`StackIsEmpty`]
//! - **Variable leaves**: [`SetVariable`], [`IsNull`]
//! - **Closure leaves**: [`Action`]

mod action;
mod stack;
mod variable;

pub use action::Action;
pub use stack::{GetStack, ItemSource, PopFromStack, PushToStack, StackIsEmpty};
pub use variable::{IsNull, SetVariable};

/// Mutable projection of a stack out of the context.
pub type StackMut<C, T> = for<'a> fn(&'a mut C) -> &'a mut Vec<T>;

/// Shared projection of a stack out of the context.
pub type StackRef<C, T> = for<'a> fn(&'a C) -> &'a Vec<T>;

/// Mutable projection of a scalar slot out of the context.
pub type SlotMut<C, T> = for<'a> fn(&'a mut C) -> &'a mut Option<T>;

/// Shared projection of a scalar slot out of the context.
pub type SlotRef<C, T> = for<'a> fn(&'a C) -> &'a Option<T>;

/// Callback invoked with a value a leaf has just captured.
pub type Observer<T> = Box<dyn Fn(&T) + Send + Sync>;
