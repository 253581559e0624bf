//! Property tests for the universal laws a compiled flow must satisfy,
//! independent of any particular aggregate's domain logic.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use proptest::prelude::*;

    use crate::ast::{done, install_handler, wait_for};
    use crate::consumer::compile;
    use crate::CmdFn;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Cmd {
        A,
        B,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Evt {
        Matched,
        Noise(u8),
    }

    fn handler_a() -> impl Fn(&Cmd) -> Option<Result<Vec<Evt>, Vec<String>>> {
        |c: &Cmd| match c {
            Cmd::A => Some(Ok(vec![])),
            Cmd::B => None,
        }
    }

    fn handler_b() -> impl Fn(&Cmd) -> Option<Result<Vec<Evt>, Vec<String>>> {
        |c: &Cmd| match c {
            Cmd::B => Some(Ok(vec![])),
            Cmd::A => None,
        }
    }

    fn shadowing_flow() -> crate::Flow<Cmd, Evt> {
        install_handler(
            handler_a(),
            wait_for(
                |e: &Evt| matches!(e, Evt::Matched).then_some(()),
                |()| install_handler(handler_b(), done()),
            ),
        )
    }

    proptest! {
        /// Law 2: after a non-matching event, the consumer behaves
        /// identically to the pre-event consumer for every command.
        #[test]
        fn flow_re_entry_is_stable_under_noise(noise in proptest::collection::vec(0u8..255, 0..20)) {
            let empty: Rc<CmdFn<Cmd, Evt>> = Rc::new(|_: &Cmd| None);
            let mut consumer = compile(empty, shadowing_flow()).unwrap();

            for byte in noise {
                let before_a = (consumer.current_command_handler())(&Cmd::A);
                let before_b = (consumer.current_command_handler())(&Cmd::B);

                let after = consumer.step_on_event(&Evt::Noise(byte)).unwrap();

                let after_a = (after.current_command_handler())(&Cmd::A);
                let after_b = (after.current_command_handler())(&Cmd::B);

                prop_assert_eq!(before_a, after_a);
                prop_assert_eq!(before_b, after_b);

                consumer = after;
            }
        }
    }

    #[test]
    fn handler_shadowing_switches_after_the_wait_completes() {
        let empty: Rc<CmdFn<Cmd, Evt>> = Rc::new(|_: &Cmd| None);
        let consumer = compile(empty, shadowing_flow()).unwrap();

        // Before the wait completes: H1 (handler_a) is in force.
        assert_eq!(
            (consumer.current_command_handler())(&Cmd::A),
            Some(Ok(vec![]))
        );
        assert_eq!((consumer.current_command_handler())(&Cmd::B), None);

        let after = consumer.step_on_event(&Evt::Matched).unwrap();

        // After: H2 (handler_b) is in force.
        assert_eq!((after.current_command_handler())(&Cmd::A), None);
        assert_eq!(
            (after.current_command_handler())(&Cmd::B),
            Some(Ok(vec![]))
        );
    }
}
