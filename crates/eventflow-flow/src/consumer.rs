//! Compilation of a [`Flow`] into a [`StreamConsumer`]: a lazy state
//! machine that advances on each event while exposing the command handler
//! currently in force.

use std::rc::Rc;

use crate::ast::{CmdFn, Flow};

/// The compiled state of a flow at some point during event replay.
///
/// `StreamConsumer` is an immutable value; advancing it on a non-matching
/// event yields a value that behaves identically to the original (same
/// handler, same future stepping behavior) rather than mutating anything
/// in place. Cloning is a cheap `Rc` bump, not a rebuild.
pub struct StreamConsumer<C, E> {
    handler: Rc<CmdFn<C, E>>,
    step: Rc<dyn Fn(&Self, &E) -> Option<Self>>,
}

impl<C, E> Clone for StreamConsumer<C, E> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            step: self.step.clone(),
        }
    }
}

impl<C, E> StreamConsumer<C, E> {
    /// The command handler in force at this point in the flow.
    #[must_use]
    pub fn current_command_handler(&self) -> &Rc<CmdFn<C, E>> {
        &self.handler
    }

    /// Advance past `event`.
    ///
    /// Returns `Some(self)` (an `Rc`-cheap clone) when `event` does not
    /// match the current wait point, `Some(next)` when it does, and
    /// `None` when the flow has reached its end.
    pub fn step_on_event(&self, event: &E) -> Option<Self> {
        (self.step)(self, event)
    }
}

/// Compile a [`Flow`] into a [`StreamConsumer`], or `None` if the flow is
/// already at its end.
///
/// `initial_handler` is the handler to fall back on if `flow` reaches a
/// wait point without ever installing its own handler first; in practice
/// every well-formed flow installs a handler before its first wait, so
/// this is usually only exercised at the very first compilation of an
/// aggregate's logic, before any `installHandler` node has been seen.
pub fn compile<C, E>(initial_handler: Rc<CmdFn<C, E>>, flow: Flow<C, E>) -> Option<StreamConsumer<C, E>>
where
    C: 'static,
    E: 'static,
{
    match flow {
        Flow::InstallHandler(h, next) => compile(h, *next),
        Flow::WaitFor(matcher) => {
            let handler = initial_handler.clone();
            Some(StreamConsumer {
                handler,
                step: Rc::new(move |this: &StreamConsumer<C, E>, event: &E| {
                    match matcher(event) {
                        Some(next_flow) => compile(initial_handler.clone(), next_flow),
                        None => Some(this.clone()),
                    }
                }),
            })
        }
        Flow::Done => None,
    }
}
