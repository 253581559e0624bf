//! `advance`: fold new operation-log entries into a projection.

use eventflow_core::{EventDecodingFailure, EventflowError};
use eventflow_store::{EventData, EventStore};
use tracing::{instrument, warn};

use crate::projection::Projection;

/// Read operation-log entries past `projection`'s cursor, in `opNr`
/// order, dispatch each to any handler whose tag matches, and advance the
/// cursor to the highest `opNr` seen.
///
/// On a decode failure the whole call fails and `projection` is left
/// completely unchanged — not even the entries processed earlier in this
/// same call are committed. Other projections built from the same store
/// are unaffected, since each `Projection` is an independent value.
#[instrument(skip(projection, store, decode))]
pub async fn advance<D, Ev, R, S>(
    projection: &mut Projection<D, Ev>,
    store: &S,
    decode: impl Fn(&R) -> Result<Ev, EventDecodingFailure>,
) -> Result<(), EventflowError>
where
    D: Clone,
    S: EventStore<R>,
{
    let entries = store.read_operation_log(projection.cursor).await?;
    if entries.is_empty() {
        return Ok(());
    }

    let mut data = projection.data.clone();
    let mut cursor = projection.cursor;

    for entry in &entries {
        let mut matching = projection
            .handlers
            .iter()
            .filter(|(tag, _)| *tag == entry.tag)
            .peekable();

        if matching.peek().is_some() {
            let raw = store
                .read_event_payload(&entry.tag, &entry.id, entry.version)
                .await?;
            let decoded = decode(&raw.payload).map_err(|failure| {
                warn!(raw = %failure.raw, reason = %failure.reason, "event decoding failed");
                EventflowError::DecodingFailure(failure.to_string())
            })?;
            let event_data = EventData {
                tag: raw.tag,
                id: raw.id,
                version: raw.version,
                payload: decoded,
            };
            for (_, handler) in matching {
                data = handler(data, &event_data);
            }
        }
        cursor = entry.op_nr;
    }

    projection.data = data;
    projection.cursor = cursor;
    Ok(())
}
