//! The event codec contract (§6).
//!
//! No instance ships in this crate — encoding user event types is
//! explicitly out of scope for the core. Store and projection consumers
//! that need to turn bytes into typed events supply their own `EventCodec`
//! impl, typically backed by `serde_json` at the call site.

use std::fmt;

/// Raised when a raw payload cannot be decoded into the expected event
/// type, whether from corruption or a schema mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDecodingFailure {
    pub raw: String,
    pub reason: String,
}

impl fmt::Display for EventDecodingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decode event ({}): {}", self.reason, self.raw)
    }
}

impl std::error::Error for EventDecodingFailure {}

/// Bidirectional text encoding for one event type.
///
/// Implementers must satisfy `decode(encode(e)) == Ok(e)` for every valid
/// `e`; the properties in this crate's test suite exercise that law only
/// for the worked example codec, since no codec instance ships here.
pub trait EventCodec {
    type Event;

    fn encode(event: &Self::Event) -> String;
    fn decode(raw: &str) -> Result<Self::Event, EventDecodingFailure>;
}
