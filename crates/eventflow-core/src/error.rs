//! The error taxonomy shared by every crate in this workspace.
//!
//! A single enum, not one per crate: every boundary in this framework
//! (runtime, store, projection) returns the same `EventflowError`, so a
//! caller never has to match on which crate produced a failure to decide
//! whether it is retryable.

use crate::ids::AggregateId;

/// Errors returned at the public boundary of the runtime, store, and
/// projection driver.
#[derive(Debug, thiserror::Error)]
pub enum EventflowError {
    /// No installed command handler matched the command.
    #[error("no handler matched command")]
    CannotFindHandler,

    /// One or more guards rejected the command. Always non-empty.
    #[error("command rejected: {}", .0.join("; "))]
    CommandFailure(Vec<String>),

    /// Optimistic concurrency conflict on `appendEvents`. Retryable by
    /// reloading the aggregate and reapplying the command.
    #[error("unexpected version for {id}: expected {expected}, actual {actual}")]
    UnexpectedVersion {
        id: AggregateId,
        expected: u64,
        actual: u64,
    },

    /// Backend I/O failure. Not retryable by the core; the caller decides.
    #[error("event store failure: {0}")]
    DbFailure(String),

    /// A stored or in-flight payload failed to decode.
    #[error("event decoding failed: {0}")]
    DecodingFailure(String),

    /// The backend distinguishes "aggregate never created" and reports it
    /// explicitly rather than returning an empty stream.
    #[error("aggregate {id} does not exist")]
    DoesNotExist { id: AggregateId },
}

impl EventflowError {
    /// Build a [`Self::CommandFailure`] from a single message, the common
    /// case of one failing guard.
    #[must_use]
    pub fn command_failure(message: impl Into<String>) -> Self {
        Self::CommandFailure(vec![message.into()])
    }
}
