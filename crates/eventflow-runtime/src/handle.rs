//! The aggregate runtime's single operation: load, fold, handle, append.

use eventflow_core::{AggregateId, EventflowError};
use eventflow_store::EventStore;
use tracing::{debug, instrument, warn};

use crate::definition::AggregateDefinition;

/// Load all persisted events for `(tag, id)`, replay them through the
/// compiled flow, apply `cmd` to the resulting command handler, and on
/// success append the emitted events with optimistic concurrency.
///
/// This is the full cycle described by the aggregate runtime contract:
/// the definition is stateless between calls, and every call starts from
/// scratch by reloading the stream.
#[instrument(skip(store, definition, cmd), fields(tag = %definition.tag(), id = %id))]
pub async fn handle_command<C, E, S>(
    store: &S,
    definition: &AggregateDefinition<C, E>,
    id: &AggregateId,
    cmd: C,
) -> Result<Vec<E>, EventflowError>
where
    C: 'static,
    E: Clone + Send + Sync + 'static,
    S: EventStore<E>,
{
    let tag = definition.tag();
    let response = store.read_events(tag, id, 0).await?;

    let mut consumer = definition.initial_consumer();
    for event in &response.events {
        consumer = consumer.and_then(|c| c.step_on_event(event));
    }

    let Some(consumer) = consumer else {
        // The flow reached its terminal state while folding history; no
        // handler is in force for any further command.
        warn!("flow already terminated; no handler in force");
        return Err(EventflowError::CannotFindHandler);
    };

    let handler = consumer.current_command_handler();
    let Some(result) = handler(&cmd) else {
        warn!("no clause matched command");
        return Err(EventflowError::CannotFindHandler);
    };

    let events = result.map_err(EventflowError::CommandFailure)?;

    if events.is_empty() {
        debug!("command accepted with no events to append");
        return Ok(events);
    }

    store
        .append_events(tag, id, response.last_version, events.clone())
        .await?;

    debug!(
        appended = events.len(),
        new_version = response.last_version + events.len() as u64,
        "appended events"
    );

    Ok(events)
}
