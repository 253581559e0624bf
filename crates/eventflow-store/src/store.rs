//! The event store trait.
//!
//! Follows the native async-fn-in-trait style already used for this
//! workspace's infrastructure boundaries rather than `#[async_trait]`:
//! return-position `impl Future<...> + Send` avoids an extra allocation
//! per call and keeps the trait object-safety question moot, since callers
//! are expected to be generic over a concrete store type, not to hold a
//! `dyn EventStore`.

use std::future::Future;

use eventflow_core::{AggregateId, EventflowError, Tag};

use crate::model::{EventData, OperationLogEntry, ReadResponse};

/// Append-only, per-aggregate event streams plus the global operation log.
///
/// Concrete backends (an in-memory map, an external event-store service)
/// are out of scope for this crate; this trait is the contract they must
/// satisfy.
pub trait EventStore<E>: Send + Sync {
    /// Read events for `(tag, id)` starting at `from_version` (inclusive).
    ///
    /// Returns [`ReadResponse::empty`] when the aggregate has no persisted
    /// events, never an error — a missing aggregate is not a failure.
    fn read_events(
        &self,
        tag: &Tag,
        id: &AggregateId,
        from_version: u64,
    ) -> impl Future<Output = Result<ReadResponse<E>, EventflowError>> + Send;

    /// Append `events` to `(tag, id)`, assigning consecutive versions
    /// starting at `expected_version + 1`.
    ///
    /// Fails with [`EventflowError::UnexpectedVersion`] if the store's
    /// current last version for `(tag, id)` differs from
    /// `expected_version`. On success, one operation-log entry is appended
    /// per event, in order, each with a fresh monotonically increasing
    /// `op_nr`.
    fn append_events(
        &self,
        tag: &Tag,
        id: &AggregateId,
        expected_version: u64,
        events: Vec<E>,
    ) -> impl Future<Output = Result<(), EventflowError>> + Send;

    /// Read operation-log entries with `op_nr > from_op_nr`, in `op_nr`
    /// order. Used by the projection driver to discover new work.
    fn read_operation_log(
        &self,
        from_op_nr: u64,
    ) -> impl Future<Output = Result<Vec<OperationLogEntry>, EventflowError>> + Send;

    /// Fetch one event's payload by its `(tag, id, version)` coordinates.
    ///
    /// Used by the projection driver to resolve an operation-log entry
    /// into the data its handlers actually consume.
    fn read_event_payload(
        &self,
        tag: &Tag,
        id: &AggregateId,
        version: u64,
    ) -> impl Future<Output = Result<EventData<E>, EventflowError>> + Send;
}
