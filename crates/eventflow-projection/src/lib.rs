//! The projection driver: folds the global operation log from a
//! resumable cursor, dispatching each entry to tag-matched handlers.

pub mod advance;
pub mod projection;

pub use advance::advance;
pub use projection::Projection;
