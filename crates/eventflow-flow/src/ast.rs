//! The Flow AST: a two-node free-structured program.
//!
//! `Flow<C, E>` describes an aggregate's behavior as an alternation of
//! "install this command handler" and "wait for an event matching this
//! predicate" steps. The generic resume value `A` from `waitFor(matcher)
//! -> A` in the source grammar is never stored in the AST itself — see
//! [`wait_for`] for why.

use std::rc::Rc;

/// The outcome of a command handler: either a non-empty list of guard
/// failure messages, or the (possibly empty) list of events to emit.
pub type CommandHandlerResult<E> = Result<Vec<E>, Vec<String>>;

/// A partial function from command to handler result. Composed left to
/// right via [`or_else`].
pub type CmdFn<C, E> = dyn Fn(&C) -> Option<CommandHandlerResult<E>>;

/// A partial function from event to a resumed value, fused with its
/// continuation by [`wait_for`].
type EventStep<C, E> = dyn Fn(&E) -> Option<Flow<C, E>>;

/// A node in the Flow program.
///
/// `A`, the value a `waitFor` resumes with, does not appear as a type
/// parameter here: storing an arbitrary intermediate type in the AST node
/// itself would require type erasure (`Box<dyn Any>`) and a downcast at
/// compile time, which is unsound without extra bookkeeping. Instead,
/// [`wait_for`] fuses the matcher and its continuation into one closure of
/// type `Fn(&E) -> Option<Flow<C, E>>`, so the stored AST stays monomorphic
/// over just `(C, E)`.
pub enum Flow<C, E> {
    /// Install `h` as the command handler in force, then continue as
    /// `next`.
    InstallHandler(Rc<CmdFn<C, E>>, Box<Flow<C, E>>),
    /// Suspend until an event matches; the fused closure both tests the
    /// event and produces the next Flow.
    WaitFor(Rc<EventStep<C, E>>),
    /// The program has nothing left to do.
    Done,
}

/// Install `h` as the currently-in-force command handler, then continue
/// as `next`.
pub fn install_handler<C, E>(
    h: impl Fn(&C) -> Option<CommandHandlerResult<E>> + 'static,
    next: Flow<C, E>,
) -> Flow<C, E> {
    Flow::InstallHandler(Rc::new(h), Box::new(next))
}

/// Suspend until `matcher` yields a value for some event, then resume the
/// continuation `k` with that value.
///
/// This is the Rust realization of `waitFor(matcher) -> A` followed by
/// `>>= k`: rather than storing `A` in the AST, the matcher and `k` are
/// fused into a single closure at construction time.
pub fn wait_for<C, E, A>(
    matcher: impl Fn(&E) -> Option<A> + 'static,
    k: impl Fn(A) -> Flow<C, E> + 'static,
) -> Flow<C, E> {
    Flow::WaitFor(Rc::new(move |event: &E| matcher(event).map(&k)))
}

/// The terminal Flow: no handler is installed, no event is awaited.
#[must_use]
pub fn done<C, E>() -> Flow<C, E> {
    Flow::Done
}

/// Left-biased composition of two partial command handlers: `a` is tried
/// first, `b` only if `a` returns `None`.
pub fn or_else_cmd<C, E>(
    a: impl Fn(&C) -> Option<CommandHandlerResult<E>> + 'static,
    b: impl Fn(&C) -> Option<CommandHandlerResult<E>> + 'static,
) -> impl Fn(&C) -> Option<CommandHandlerResult<E>> {
    move |c| a(c).or_else(|| b(c))
}

/// Left-biased composition of two partial event matchers.
pub fn or_else_event<E, A>(
    a: impl Fn(&E) -> Option<A> + 'static,
    b: impl Fn(&E) -> Option<A> + 'static,
) -> impl Fn(&E) -> Option<A> {
    move |e| a(e).or_else(|| b(e))
}
