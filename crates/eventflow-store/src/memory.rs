//! An in-memory reference [`EventStore`] used only by this workspace's own
//! tests. Gated behind the `test-support` feature, default-off: a product
//! implementation of a concrete storage backend is explicitly out of
//! scope, but the optimistic-concurrency and operation-log semantics need
//! something to run against.
//!
//! The locking and version-check strategy mirrors the `InMemory` backend
//! pattern common to event-store reference implementations: one lock
//! guarding a per-aggregate stream map plus the global log, with
//! `append_events` doing a single compare-and-append under that lock.

use std::collections::HashMap;
use std::sync::Mutex;

use eventflow_core::{AggregateId, EventflowError, Tag};
use tracing::{debug, warn};

use crate::model::{EventData, OperationLogEntry, ReadResponse};
use crate::store::EventStore;

struct Stream<E> {
    events: Vec<E>,
}

struct State<E> {
    streams: HashMap<(Tag, AggregateId), Stream<E>>,
    log: Vec<OperationLogEntry>,
}

impl<E> Default for State<E> {
    fn default() -> Self {
        Self {
            streams: HashMap::new(),
            log: Vec::new(),
        }
    }
}

/// In-memory [`EventStore`] for tests. `E` must be `Clone` so the same
/// payload can be read back independently of the copy appended.
pub struct InMemoryEventStore<E> {
    state: Mutex<State<E>>,
}

impl<E> Default for InMemoryEventStore<E> {
    fn default() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }
}

impl<E> InMemoryEventStore<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Clone + Send + Sync> EventStore<E> for InMemoryEventStore<E> {
    async fn read_events(
        &self,
        tag: &Tag,
        id: &AggregateId,
        from_version: u64,
    ) -> Result<ReadResponse<E>, EventflowError> {
        let state = self
            .state
            .lock()
            .map_err(|_| EventflowError::DbFailure("in-memory store lock poisoned".to_string()))?;

        let Some(stream) = state.streams.get(&(tag.clone(), id.clone())) else {
            return Ok(ReadResponse::empty());
        };

        let last_version = stream.events.len() as u64;
        let skip = from_version.saturating_sub(1) as usize;
        let events = stream.events.iter().skip(skip).cloned().collect();

        Ok(ReadResponse {
            last_version,
            events,
            end_of_stream: true,
        })
    }

    async fn append_events(
        &self,
        tag: &Tag,
        id: &AggregateId,
        expected_version: u64,
        events: Vec<E>,
    ) -> Result<(), EventflowError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| EventflowError::DbFailure("in-memory store lock poisoned".to_string()))?;

        let key = (tag.clone(), id.clone());
        let actual_version = state
            .streams
            .get(&key)
            .map_or(0, |stream| stream.events.len() as u64);

        if actual_version != expected_version {
            warn!(
                tag = tag.as_str(),
                id = id.as_str(),
                expected_version,
                actual_version,
                "optimistic concurrency conflict"
            );
            return Err(EventflowError::UnexpectedVersion {
                id: id.clone(),
                expected: expected_version,
                actual: actual_version,
            });
        }

        let mut next_op_nr = state.log.last().map_or(1, |entry| entry.op_nr + 1);
        let stream = state.streams.entry(key).or_insert_with(|| Stream {
            events: Vec::new(),
        });

        let event_count = events.len();
        for (offset, event) in events.into_iter().enumerate() {
            stream.events.push(event);
            state.log.push(OperationLogEntry {
                op_nr: next_op_nr,
                tag: tag.clone(),
                id: id.clone(),
                version: expected_version + offset as u64 + 1,
            });
            next_op_nr += 1;
        }

        debug!(
            tag = tag.as_str(),
            id = id.as_str(),
            event_count,
            new_version = expected_version + event_count as u64,
            "appended events"
        );

        Ok(())
    }

    async fn read_operation_log(
        &self,
        from_op_nr: u64,
    ) -> Result<Vec<OperationLogEntry>, EventflowError> {
        let state = self
            .state
            .lock()
            .map_err(|_| EventflowError::DbFailure("in-memory store lock poisoned".to_string()))?;

        Ok(state
            .log
            .iter()
            .filter(|entry| entry.op_nr > from_op_nr)
            .cloned()
            .collect())
    }

    async fn read_event_payload(
        &self,
        tag: &Tag,
        id: &AggregateId,
        version: u64,
    ) -> Result<EventData<E>, EventflowError> {
        let state = self
            .state
            .lock()
            .map_err(|_| EventflowError::DbFailure("in-memory store lock poisoned".to_string()))?;

        let stream = state
            .streams
            .get(&(tag.clone(), id.clone()))
            .ok_or_else(|| EventflowError::DoesNotExist { id: id.clone() })?;

        let index = version
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .filter(|i| *i < stream.events.len())
            .ok_or_else(|| {
                EventflowError::DbFailure(format!("no event at version {version} for {id}"))
            })?;

        Ok(EventData {
            tag: tag.clone(),
            id: id.clone(),
            version,
            payload: stream.events[index].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag() -> Tag {
        Tag::new("Test").unwrap()
    }

    fn id() -> AggregateId {
        AggregateId::new("a").unwrap()
    }

    #[tokio::test]
    async fn reading_unknown_aggregate_returns_empty_ok() {
        let store = InMemoryEventStore::<String>::new();
        let response = store.read_events(&tag(), &id(), 0).await.unwrap();
        assert_eq!(response.last_version, 0);
        assert!(response.events.is_empty());
        assert!(response.end_of_stream);
    }

    #[tokio::test]
    async fn append_assigns_consecutive_versions_and_log_entries() {
        let store = InMemoryEventStore::<String>::new();
        store
            .append_events(&tag(), &id(), 0, vec!["a".into(), "b".into()])
            .await
            .unwrap();

        let response = store.read_events(&tag(), &id(), 0).await.unwrap();
        assert_eq!(response.last_version, 2);
        assert_eq!(response.events, vec!["a", "b"]);

        let log = store.read_operation_log(0).await.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].op_nr, 1);
        assert_eq!(log[0].version, 1);
        assert_eq!(log[1].op_nr, 2);
        assert_eq!(log[1].version, 2);
    }

    #[tokio::test]
    async fn append_with_stale_expected_version_conflicts() {
        let store = InMemoryEventStore::<String>::new();
        store
            .append_events(&tag(), &id(), 0, vec!["a".into()])
            .await
            .unwrap();

        let err = store
            .append_events(&tag(), &id(), 0, vec!["b".into()])
            .await
            .unwrap_err();

        match err {
            EventflowError::UnexpectedVersion {
                expected, actual, ..
            } => {
                assert_eq!(expected, 0);
                assert_eq!(actual, 1);
            }
            other => panic!("expected UnexpectedVersion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn only_one_of_two_concurrent_appends_with_same_expected_version_succeeds() {
        let store = std::sync::Arc::new(InMemoryEventStore::<String>::new());
        store
            .append_events(&tag(), &id(), 0, vec!["seed".into()])
            .await
            .unwrap();

        let store_a = store.clone();
        let store_b = store.clone();
        let (result_a, result_b) = tokio::join!(
            store_a.append_events(&tag(), &id(), 1, vec!["x".into()]),
            store_b.append_events(&tag(), &id(), 1, vec!["y".into()])
        );

        let successes = [&result_a, &result_b].into_iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn operation_log_read_is_monotone_and_repeat_is_no_op() {
        let store = InMemoryEventStore::<String>::new();
        store
            .append_events(&tag(), &id(), 0, vec!["a".into(), "b".into()])
            .await
            .unwrap();

        let first = store.read_operation_log(0).await.unwrap();
        assert_eq!(first.len(), 2);

        let second = store.read_operation_log(2).await.unwrap();
        assert!(second.is_empty());
    }
}
