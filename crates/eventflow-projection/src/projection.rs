//! A read model built by folding the global operation log with
//! user-supplied, per-tag handlers.

use std::rc::Rc;

use eventflow_core::Tag;
use eventflow_store::EventData;

/// A projection's accumulated data plus its resume cursor and the
/// handlers that fold new events into that data.
///
/// `cursor` is the highest `opNr` already folded; `advance` is the only
/// thing that changes it.
pub struct Projection<D, Ev> {
    pub(crate) cursor: u64,
    pub(crate) data: D,
    pub(crate) handlers: Vec<(Tag, Rc<dyn Fn(D, &EventData<Ev>) -> D>)>,
}

impl<D, Ev> Projection<D, Ev> {
    /// Start a fresh projection at cursor 0 with the given initial data
    /// and no registered handlers.
    pub fn new(initial_data: D) -> Self {
        Self {
            cursor: 0,
            data: initial_data,
            handlers: Vec::new(),
        }
    }

    /// Resume a projection from a previously saved cursor and data.
    pub fn resume(cursor: u64, data: D) -> Self {
        Self {
            cursor,
            data,
            handlers: Vec::new(),
        }
    }

    /// Register a pure fold handler for events carrying `tag`.
    #[must_use]
    pub fn on(mut self, tag: Tag, handler: impl Fn(D, &EventData<Ev>) -> D + 'static) -> Self {
        self.handlers.push((tag, Rc::new(handler)));
        self
    }

    #[must_use]
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn into_data(self) -> D {
        self.data
    }
}
