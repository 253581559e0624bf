//! A given/when/then harness for testing compiled flows, in the spirit of
//! the fluent decider-test builders this workspace's domain crates already
//! use, generalized here to operate on a compiled [`StreamConsumer`]
//! directly rather than a vendor `Decider` type.

use std::rc::Rc;

use crate::ast::{CmdFn, CommandHandlerResult, Flow};
use crate::consumer::{compile, StreamConsumer};

/// Fluent given/when/then test builder for a [`Flow`].
///
/// ```
/// # use eventflow_flow::ast::{install_handler, wait_for, done};
/// # use eventflow_flow::spec::FlowTestSpecification;
/// # #[derive(Debug, Clone, PartialEq)] enum Cmd { Ping }
/// # #[derive(Debug, Clone, PartialEq)] enum Evt { Pinged }
/// let flow = || install_handler(
///     |c: &Cmd| match c { Cmd::Ping => Some(Ok(vec![Evt::Pinged])) },
///     wait_for(|e: &Evt| matches!(e, Evt::Pinged).then_some(()), |()| done()),
/// );
///
/// FlowTestSpecification::for_flow(flow)
///     .given(vec![])
///     .when(Cmd::Ping)
///     .then(vec![Evt::Pinged]);
/// ```
pub struct FlowTestSpecification<C, E> {
    build_flow: Rc<dyn Fn() -> Flow<C, E>>,
}

impl<C: 'static, E: 'static> FlowTestSpecification<C, E> {
    /// Start a specification for a flow built fresh by `build_flow` (flows
    /// are not `Clone`, so a factory closure stands in for one).
    pub fn for_flow(build_flow: impl Fn() -> Flow<C, E> + 'static) -> Self {
        Self {
            build_flow: Rc::new(build_flow),
        }
    }

    /// Replay `given_events` through a freshly compiled flow, then hand
    /// off to [`GivenState`] to apply a command.
    #[must_use]
    pub fn given(&self, given_events: Vec<E>) -> GivenState<C, E> {
        let empty_handler: Rc<CmdFn<C, E>> = Rc::new(|_: &C| None);
        let mut consumer = compile(empty_handler, (self.build_flow)());

        for event in &given_events {
            consumer = consumer.and_then(|c| c.step_on_event(event));
        }

        GivenState { consumer }
    }
}

/// The state after folding the `given` events, awaiting a `when` command.
pub struct GivenState<C, E> {
    consumer: Option<StreamConsumer<C, E>>,
}

impl<C, E> GivenState<C, E> {
    /// Apply `command` to the current consumer's handler.
    #[must_use]
    pub fn when(&self, command: C) -> WhenResult<E> {
        let result = self
            .consumer
            .as_ref()
            .and_then(|consumer| (consumer.current_command_handler())(&command));
        WhenResult { result }
    }
}

/// The outcome of applying a `when` command, ready for a `then`/`then_error`
/// assertion.
pub struct WhenResult<E> {
    result: Option<CommandHandlerResult<E>>,
}

impl<E: std::fmt::Debug + PartialEq> WhenResult<E> {
    /// Assert the command succeeded and emitted exactly `expected_events`.
    pub fn then(self, expected_events: Vec<E>) {
        match self.result {
            Some(Ok(events)) => assert_eq!(events, expected_events),
            Some(Err(messages)) => panic!("expected success, got guard failures: {messages:?}"),
            None => panic!("expected success, but no handler matched the command"),
        }
    }

    /// Assert the command failed with exactly `expected_messages`, in
    /// order.
    pub fn then_error(self, expected_messages: Vec<&str>) {
        match self.result {
            Some(Err(messages)) => assert_eq!(messages, expected_messages),
            Some(Ok(events)) => panic!("expected guard failures, got success: {events:?}"),
            None => panic!("expected guard failures, but no handler matched the command"),
        }
    }

    /// Assert no installed handler matched the command at all.
    pub fn then_no_handler(self) {
        assert!(
            self.result.is_none(),
            "expected no handler to match, but one did"
        );
    }
}
