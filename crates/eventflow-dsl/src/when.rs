//! `when(...)` clause builder: the left-hand side of the declarative DSL.
//!
//! A clause is built in two phases. [`When`] narrows the full command type
//! `C` down to a clause-specific `Cmd` (by projection, not reflection) and
//! accumulates guards; a terminal method (`emit`, `emit_structural`, or
//! `fail_with_message`) consumes it and produces a [`Clause<C, E>`] with
//! `Cmd` erased, so clauses of different shapes can sit in the same `Vec`
//! passed to [`crate::handler`].

use std::rc::Rc;

use eventflow_flow::{CmdFn, CommandHandlerResult, Flow};

/// A command clause under construction: a projection from `C` plus zero or
/// more guards, not yet given an emit action.
pub struct When<C, Cmd> {
    project: Rc<dyn Fn(&C) -> Option<Cmd>>,
    guards: Vec<(Rc<dyn Fn(&Cmd) -> bool>, String)>,
}

/// Start a clause: `project` returns `Some(cmd)` iff the incoming command
/// is of this clause's runtime kind (and, if the projection itself
/// encodes a predicate, that predicate too).
pub fn when<C: 'static, Cmd: 'static>(project: impl Fn(&C) -> Option<Cmd> + 'static) -> When<C, Cmd> {
    When {
        project: Rc::new(project),
        guards: Vec::new(),
    }
}

/// A catch-all clause matching any command, for terminating a handler
/// chain with `anyOther().fail_with_message(...)`. Must be declared last:
/// the DSL does not prevent an earlier `any_other` from shadowing later
/// clauses, since first-match-wins is a declaration-order contract, not a
/// type-level one.
pub fn any_other<C: 'static>() -> When<C, ()> {
    when(|_: &C| Some(()))
}

impl<C: 'static, Cmd: 'static> When<C, Cmd> {
    /// Evaluated in declared order at command time. Every failing guard
    /// contributes `message` to the failure list; guards never panic.
    #[must_use]
    pub fn guard(mut self, predicate: impl Fn(&Cmd) -> bool + 'static, message: impl Into<String>) -> Self {
        self.guards.push((Rc::new(predicate), message.into()));
        self
    }

    /// Every guard whose predicate rejects `cmd`, in declared order.
    fn evaluate_guards(&self, cmd: &Cmd) -> Vec<String> {
        self.guards
            .iter()
            .filter(|(predicate, _)| !predicate(cmd))
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Emit events computed from the matched command.
    pub fn emit<E: 'static>(self, emit: impl Fn(Cmd) -> Vec<E> + 'static) -> Clause<C, E> {
        let project = self.project;
        let guards_failed = move |cmd: &Cmd| -> Vec<String> { self.evaluate_guards(cmd) };

        let command_handler: Rc<CmdFn<C, E>> = Rc::new(move |c: &C| -> Option<CommandHandlerResult<E>> {
            let cmd = project(c)?;
            let failures = guards_failed(&cmd);
            if failures.is_empty() {
                Some(Ok(emit(cmd)))
            } else {
                Some(Err(failures))
            }
        });

        Clause {
            command_handler,
            switch: None,
        }
    }

    /// Structural promotion: emit one event by copying the matched
    /// command's fields one-to-one via a `From<Cmd> for E` impl supplied
    /// by the author. A command/event pair that cannot be promoted this
    /// way is a compile error here, not a runtime failure, since `E: From<Cmd>`
    /// is required at this call site.
    pub fn emit_structural<E: From<Cmd> + 'static>(self) -> Clause<C, E> {
        self.emit(|cmd| vec![E::from(cmd)])
    }

    /// Unconditionally fail any command this clause matches. Used for the
    /// `anyOther.failWithMessage` catch-all, but valid on any `When`.
    pub fn fail_with_message<E: 'static>(self, message: impl Into<String>) -> Clause<C, E> {
        let project = self.project;
        let message = message.into();
        let command_handler: Rc<CmdFn<C, E>> = Rc::new(move |c: &C| -> Option<CommandHandlerResult<E>> {
            project(c).map(|_cmd| Err(vec![message.clone()]))
        });

        Clause {
            command_handler,
            switch: None,
        }
    }
}

/// A fully-built clause: a command handler plus, optionally, the event
/// matcher and continuation that fire when this clause's `switch` event
/// is observed.
pub struct Clause<C, E> {
    pub(crate) command_handler: Rc<CmdFn<C, E>>,
    pub(crate) switch: Option<Rc<dyn Fn(&E) -> Option<Flow<C, E>>>>,
}

impl<C: 'static, E: 'static> Clause<C, E> {
    /// Advance the flow to `next(event)` once an event matching
    /// `event_matcher` is observed. A clause without a `switch` call never
    /// advances the flow; it only ever contributes to command handling.
    ///
    /// `next` is a factory over the matched event, not a `Flow` value: a
    /// looping flow (the counter's `Increment`/`Decrement` cycle, for
    /// instance) refers to itself as its own continuation and needs the
    /// event's payload to carry state forward (e.g. the running count),
    /// and building that continuation eagerly would recurse forever
    /// before the first event ever arrives. Taking `impl Fn(&E) ->
    /// Flow<C, E>` defers construction to the moment the event actually
    /// matches and hands the matched event to the factory, mirroring how
    /// [`eventflow_flow::wait_for`]'s own continuation resumes with the
    /// value the matcher produced.
    #[must_use]
    pub fn switch(
        mut self,
        event_matcher: impl Fn(&E) -> bool + 'static,
        next: impl Fn(&E) -> Flow<C, E> + 'static,
    ) -> Self {
        self.switch = Some(Rc::new(move |event: &E| {
            event_matcher(event).then(|| next(event))
        }));
        self
    }
}
