//! Property-based tests for the state machine.
//!
//! These tests use proptest to drive machines through random operation
//! sequences and check that history invariants hold throughout.

use proptest::prelude::*;
use std::sync::Arc;
use waypoint::{Configuration, MachineOptions, StateMachine};

const ROUTINE: &str = include_str!("../fixtures/daily_routine.json");

const STATES: [&str; 5] = ["normal", "busy", "hungry", "sleeping", "flying"];
const EVENTS: [&str; 6] = ["study", "get_tired", "get_hungry", "eat", "get_up", "dance"];

#[derive(Clone, Debug)]
enum Op {
    Trigger(&'static str),
    Change(&'static str),
    Undo,
    Redo,
    Reset,
    Clear,
}

prop_compose! {
    fn arbitrary_op()(variant in 0..6u8, state in 0..STATES.len(), event in 0..EVENTS.len()) -> Op {
        match variant {
            0 => Op::Trigger(EVENTS[event]),
            1 => Op::Change(STATES[state]),
            2 => Op::Undo,
            3 => Op::Redo,
            4 => Op::Reset,
            _ => Op::Clear,
        }
    }
}

fn config() -> Arc<Configuration> {
    Arc::new(Configuration::from_json_str(ROUTINE).unwrap())
}

fn apply(machine: &mut StateMachine, op: &Op) {
    match op {
        Op::Trigger(event) => {
            let _ = machine.trigger(event.to_string());
        }
        Op::Change(state) => {
            let _ = machine.change_state(state.to_string());
        }
        Op::Undo => {
            machine.undo();
        }
        Op::Redo => {
            machine.redo();
        }
        Op::Reset => machine.reset(),
        Op::Clear => machine.clear_history(),
    }
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let config = config();
        let mut machine = StateMachine::new(Arc::clone(&config)).unwrap();

        for op in &ops {
            apply(&mut machine, op);
            let history = machine.history();
            prop_assert!(history.cursor() < history.entries().len());
            prop_assert!(config.contains(machine.state()));
        }
    }

    #[test]
    fn undo_then_redo_restores_state(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut machine = StateMachine::new(config()).unwrap();
        for op in &ops {
            apply(&mut machine, op);
        }

        let before = machine.state().clone();
        if machine.undo() {
            prop_assert!(machine.redo());
        }
        prop_assert_eq!(machine.state(), &before);
    }

    #[test]
    fn successful_change_discards_redo(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        event in 0..EVENTS.len(),
    ) {
        let mut machine = StateMachine::new(config()).unwrap();
        for op in &ops {
            apply(&mut machine, op);
        }
        machine.undo();

        let from = machine.state().clone();
        let expected = config().target(&from, &EVENTS[event].to_string()).cloned();
        match machine.trigger(EVENTS[event].to_string()) {
            Ok(state) => {
                prop_assert_eq!(Some(state), expected);
                prop_assert!(!machine.redo());
            }
            Err(_) => {
                prop_assert!(expected.is_none());
                prop_assert_eq!(machine.state(), &from);
            }
        }
    }

    #[test]
    fn rejected_operations_do_not_touch_history(
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        let mut machine = StateMachine::new(config()).unwrap();
        for op in &ops {
            apply(&mut machine, op);
        }

        let path: Vec<String> = machine.history().path().into_iter().cloned().collect();
        let cursor = machine.history().cursor();

        prop_assert!(machine.change_state("flying".to_string()).is_err());
        prop_assert!(machine.trigger("dance".to_string()).is_err());

        let after: Vec<String> = machine.history().path().into_iter().cloned().collect();
        prop_assert_eq!(path, after);
        prop_assert_eq!(machine.history().cursor(), cursor);
    }

    #[test]
    fn history_limit_is_respected(
        limit in 1usize..6,
        ops in prop::collection::vec(arbitrary_op(), 0..40),
    ) {
        let options = MachineOptions::default().history_limit(limit);
        let mut machine = StateMachine::with_options(config(), options).unwrap();

        for op in &ops {
            apply(&mut machine, op);
            prop_assert!(machine.history().entries().len() <= limit);
        }
    }

    #[test]
    fn clear_history_disables_undo(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut machine = StateMachine::new(config()).unwrap();
        for op in &ops {
            apply(&mut machine, op);
        }

        machine.clear_history();

        prop_assert_eq!(machine.state(), "normal");
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
    }
}
