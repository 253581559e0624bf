//! A `serde_json`-backed [`EventCodec`] instance for [`CounterEvent`].
//!
//! No codec instance ships in `eventflow-core` (§6, §1): encoding a
//! specific event type is a concern for that type's author, not the core.
//! This is that instance for the worked example, not a reusable library
//! codec.

use eventflow_core::{EventCodec, EventDecodingFailure};

use crate::events::CounterEvent;

pub struct CounterEventCodec;

impl EventCodec for CounterEventCodec {
    type Event = CounterEvent;

    fn encode(event: &Self::Event) -> String {
        serde_json::to_string(event)
            .unwrap_or_else(|err| unreachable!("CounterEvent always serializes: {err}"))
    }

    fn decode(raw: &str) -> Result<Self::Event, EventDecodingFailure> {
        serde_json::from_str(raw).map_err(|err| EventDecodingFailure {
            raw: raw.to_string(),
            reason: err.to_string(),
        })
    }
}
