//! Shared value types and error taxonomy for eventflow.
//!
//! Every other crate in this workspace depends on this one and nothing
//! else in it, so the identifiers and error enum defined here are the
//! single vocabulary every boundary speaks.

pub mod codec;
pub mod error;
pub mod ids;

pub use codec::{EventCodec, EventDecodingFailure};
pub use error::EventflowError;
pub use ids::{AggregateId, EmptyIdentifierError, Tag};
