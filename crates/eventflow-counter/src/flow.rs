//! The counter aggregate's flow: the worked example every other crate's
//! doc comments point to for "see `eventflow-counter` for a complete
//! example."
//!
//! `Create` structurally promotes into `Created` and switches into the
//! active loop; `Increment`/`Decrement` each emit and switch back into the
//! loop, carrying the running count forward as the resumed value of each
//! `switch` rather than storing it anywhere else. The flow *is* the
//! counter's state.

use eventflow_dsl::{handler, when};
use eventflow_flow::Flow;

use crate::commands::{CounterCommand, CreateCounter};
use crate::events::CounterEvent;

/// The counter's initial flow: accepts only `Create`, then switches into
/// [`active_flow`] seeded with the command's starting value.
#[must_use]
pub fn counter_flow() -> Flow<CounterCommand, CounterEvent> {
    handler(vec![when(|c: &CounterCommand| match c {
        CounterCommand::Create { id, start } => Some(CreateCounter {
            id: id.clone(),
            start: *start,
        }),
        _ => None,
    })
    .emit_structural::<CounterEvent>()
    .switch(
        |e: &CounterEvent| matches!(e, CounterEvent::Created { .. }),
        |e: &CounterEvent| match e {
            CounterEvent::Created { start, .. } => active_flow(*start),
            _ => unreachable!("switch only invokes next on a matched Created event"),
        },
    )])
}

/// The counter's steady-state loop at `count`: accepts `Increment`
/// unconditionally and `Decrement` guarded by `count > 0`, looping back to
/// itself at the updated count either way.
fn active_flow(count: i64) -> Flow<CounterCommand, CounterEvent> {
    handler(vec![
        when(|c: &CounterCommand| match c {
            CounterCommand::Increment { id } => Some(id.clone()),
            _ => None,
        })
        .emit(|id| vec![CounterEvent::Incremented { id }])
        .switch(
            |e: &CounterEvent| matches!(e, CounterEvent::Incremented { .. }),
            move |_e: &CounterEvent| active_flow(count + 1),
        ),
        when(|c: &CounterCommand| match c {
            CounterCommand::Decrement { id } => Some(id.clone()),
            _ => None,
        })
        .guard(move |_| count > 0, "Counter cannot be decremented")
        .emit(|id| vec![CounterEvent::Decremented { id }])
        .switch(
            |e: &CounterEvent| matches!(e, CounterEvent::Decremented { .. }),
            move |_e: &CounterEvent| active_flow(count - 1),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventflow_flow::{compile, CmdFn};
    use std::rc::Rc;

    fn empty_handler() -> Rc<CmdFn<CounterCommand, CounterEvent>> {
        Rc::new(|_: &CounterCommand| None)
    }

    #[test]
    fn decrement_at_zero_fails_but_increment_then_decrement_succeeds() {
        let consumer = compile(empty_handler(), counter_flow()).unwrap();
        let consumer = consumer
            .step_on_event(&CounterEvent::Created {
                id: "a".to_string(),
                start: 0,
            })
            .unwrap();

        let result = (consumer.current_command_handler())(&CounterCommand::Decrement {
            id: "a".to_string(),
        });
        assert_eq!(
            result,
            Some(Err(vec!["Counter cannot be decremented".to_string()]))
        );

        let consumer = consumer
            .step_on_event(&CounterEvent::Incremented {
                id: "a".to_string(),
            })
            .unwrap();
        let result = (consumer.current_command_handler())(&CounterCommand::Decrement {
            id: "a".to_string(),
        });
        assert_eq!(
            result,
            Some(Ok(vec![CounterEvent::Decremented {
                id: "a".to_string()
            }]))
        );
    }
}
