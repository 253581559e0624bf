//! `handler(clause, clause, ...)`: combines clauses into one Flow step.

use eventflow_flow::{install_handler, wait_for, CommandHandlerResult, Flow};

use crate::when::Clause;

/// Install a command handler that is the left-to-right `orElse` of each
/// clause's command handler, then wait for an event matching the
/// left-to-right `orElse` of each clause's `switch` matcher, advancing to
/// that clause's continuation. Clauses without a `switch` never advance
/// the flow; they only ever contribute to command handling while this
/// wait point is in force.
pub fn handler<C: 'static, E: 'static>(clauses: Vec<Clause<C, E>>) -> Flow<C, E> {
    let command_handlers: Vec<_> = clauses
        .iter()
        .map(|clause| clause.command_handler.clone())
        .collect();

    let combined_handler = move |command: &C| -> Option<CommandHandlerResult<E>> {
        command_handlers
            .iter()
            .find_map(|handler| handler(command))
    };

    let switch_matchers: Vec<_> = clauses
        .into_iter()
        .filter_map(|clause| clause.switch)
        .collect();

    let combined_matcher = move |event: &E| -> Option<Flow<C, E>> {
        switch_matchers.iter().find_map(|matcher| matcher(event))
    };

    install_handler(combined_handler, wait_for(combined_matcher, |flow| flow))
}
