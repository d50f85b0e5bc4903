//! Synchronous behavior tree engine.
//!
//! A [`Tree`] walks a hand-wired graph of decision nodes once per call and
//! returns whether it succeeded. Leaves talk to the host application through a
//! caller-owned context (stacks and scalar slots) rather than through return
//! values.
//!
//! - **Single call**: every run completes before returning (no Running state)
//! - **Arena storage**: nodes are addressed by [`NodeId`]; parents never own children
//! - **Fail fast**: unbound decorators and a missing root child are [`TreeError`]s
//!
//! # Architecture
//!
//! - [`Behavior`]: Trait for user-defined leaves
//! - [`Status`]: Success or Failure
//! - Composite nodes: sequence, selector, random selector
//! - Decorator nodes: root, inverter, succeeder, failer, repeater, repeat-until-fail
//! - [`leaves`]: Stack, slot and closure leaves

pub mod behavior;
pub mod builder;
mod composite;
pub mod config;
mod decorator;
pub mod error;
pub mod leaves;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use config::TreeConfig;
pub use error::TreeError;
pub use leaves::Action;
pub use node::{NodeId, Repeat};
pub use status::Status;
pub use tree::{CancelHandle, Tree};
