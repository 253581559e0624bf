//! Data types exchanged across the event store boundary.

use eventflow_core::{AggregateId, Tag};

/// One decoded event together with the coordinates that uniquely identify
/// it in the store: `(tag, id, version)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventData<E> {
    pub tag: Tag,
    pub id: AggregateId,
    pub version: u64,
    pub payload: E,
}

/// The result of reading a per-aggregate stream from some version onward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResponse<E> {
    pub last_version: u64,
    pub events: Vec<E>,
    pub end_of_stream: bool,
}

impl<E> ReadResponse<E> {
    /// The canonical response for an aggregate with no persisted events:
    /// `lastVersion = 0`, no events, end of stream reached immediately.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            last_version: 0,
            events: Vec::new(),
            end_of_stream: true,
        }
    }
}

/// One entry in the store-wide, strictly increasing operation log.
///
/// The log never stores payloads itself; `(tag, id, version)` is a pointer
/// back into the per-aggregate stream where the actual event lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationLogEntry {
    pub op_nr: u64,
    pub tag: Tag,
    pub id: AggregateId,
    pub version: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_read_response_has_zero_last_version() {
        let response: ReadResponse<()> = ReadResponse::empty();
        assert_eq!(response.last_version, 0);
        assert!(response.events.is_empty());
        assert!(response.end_of_stream);
    }

}
