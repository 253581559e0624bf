//! Property test for guard aggregation (§8 law 4): every failing guard,
//! and only the failing ones, contribute their message to the result, in
//! declared order.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::handler::handler;
    use crate::when::when;
    use eventflow_flow::{compile, CmdFn};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Cmd {
        value: i64,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Evt;

    fn empty_handler() -> Rc<CmdFn<Cmd, Evt>> {
        Rc::new(|_: &Cmd| None)
    }

    proptest! {
        #[test]
        fn guard_aggregation_matches_first_and_second_predicate_outcomes(
            value in -1000i64..1000
        ) {
            let flow = handler(vec![when(|c: &Cmd| Some(c.clone()))
                .guard(|c: &Cmd| c.value > 0, "must be positive")
                .guard(|c: &Cmd| c.value % 2 == 0, "must be even")
                .emit(|_| vec![Evt])]);

            let consumer = compile(empty_handler(), flow).unwrap();
            let result = (consumer.current_command_handler())(&Cmd { value });

            let mut expected_failures = Vec::new();
            if !(value > 0) {
                expected_failures.push("must be positive".to_string());
            }
            if value % 2 != 0 {
                expected_failures.push("must be even".to_string());
            }

            if expected_failures.is_empty() {
                prop_assert_eq!(result, Some(Ok(vec![Evt])));
            } else {
                prop_assert_eq!(result, Some(Err(expected_failures)));
            }
        }
    }

    #[test]
    fn both_guards_failing_returns_messages_in_declaration_order() {
        let flow = handler(vec![when(|c: &Cmd| Some(c.clone()))
            .guard(|c: &Cmd| c.value > 0, "must be positive")
            .guard(|c: &Cmd| c.value % 2 == 0, "must be even")
            .emit(|_| vec![Evt])]);

        let consumer = compile(empty_handler(), flow).unwrap();
        let result = (consumer.current_command_handler())(&Cmd { value: -3 });

        assert_eq!(
            result,
            Some(Err(vec![
                "must be positive".to_string(),
                "must be even".to_string()
            ]))
        );
    }
}
