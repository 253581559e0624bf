//! Events for the counter aggregate.

use serde::{Deserialize, Serialize};

use crate::commands::CreateCounter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum CounterEvent {
    Created { id: String, start: i64 },
    Incremented { id: String },
    Decremented { id: String },
}

impl CounterEvent {
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Created { .. } => "Created",
            Self::Incremented { .. } => "Incremented",
            Self::Decremented { .. } => "Decremented",
        }
    }
}

/// Structural promotion: `CreateCounter(id, start)` and `Created(id,
/// start)` have identical fields, so `when[Create].emit[Created]` copies
/// them one-to-one. `CreateCounter` carries no other command's shape, so
/// this impl is total: a real command/event mismatch is a compile error at
/// the `emit_structural` call site, not a runtime panic here.
impl From<CreateCounter> for CounterEvent {
    fn from(command: CreateCounter) -> Self {
        Self::Created {
            id: command.id,
            start: command.start,
        }
    }
}
