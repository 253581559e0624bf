//! Commands for the counter aggregate.
//!
//! Validation is deferred to the flow's guards rather than performed here:
//! a command only carries raw values, and it is the installed handler's
//! job to accept or reject them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command_type")]
pub enum CounterCommand {
    Create { id: String, start: i64 },
    Increment { id: String },
    Decrement { id: String },
}

impl CounterCommand {
    #[must_use]
    pub fn command_type(&self) -> &'static str {
        match self {
            Self::Create { .. } => "Create",
            Self::Increment { .. } => "Increment",
            Self::Decrement { .. } => "Decrement",
        }
    }
}

/// `CounterCommand::Create`, narrowed to exactly the shape `Created`
/// promotes from. The `when(...)` clause for `Create` projects into this
/// type rather than the full `CounterCommand`, so its `From` impl for
/// `CounterEvent` is total and a real command/event mismatch is a compile
/// error, not a runtime `unreachable!()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCounter {
    pub id: String,
    pub start: i64,
}
