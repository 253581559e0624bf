//! Worked example: a counter aggregate built on eventflow, exercising the
//! framework end to end.
//!
//! This crate plays the same role the host repo's own Todo domain crate
//! plays: a small real domain proving the framework, not a reusable
//! library. Every other crate in this workspace points here in its own
//! doc comments for a complete example of the DSL, the runtime, and the
//! projection driver working together.

pub mod codec;
pub mod commands;
pub mod events;
pub mod flow;

pub use commands::{CounterCommand, CreateCounter};
pub use events::CounterEvent;

use eventflow_core::Tag;
use eventflow_runtime::AggregateDefinition;

/// The counter aggregate's tag, `"Counter"`.
#[must_use]
pub fn counter_tag() -> Tag {
    Tag::new("Counter").unwrap_or_else(|_| unreachable!("\"Counter\" is non-empty"))
}

/// The counter aggregate's definition: its tag plus a factory for its
/// compiled flow, ready to hand to [`eventflow_runtime::handle_command`].
#[must_use]
pub fn counter_definition() -> AggregateDefinition<CounterCommand, CounterEvent> {
    AggregateDefinition::new(counter_tag(), flow::counter_flow)
}
