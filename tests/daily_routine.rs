//! End-to-end walk through the daily routine configuration.

use std::sync::Arc;
use waypoint::core::Identifier;
use waypoint::{identifier_enum, Configuration, MachineError, StateMachine};

const ROUTINE: &str = include_str!("../fixtures/daily_routine.json");

fn machine() -> StateMachine {
    let config: Configuration = Configuration::from_json_str(ROUTINE).unwrap();
    StateMachine::new(Arc::new(config)).unwrap()
}

fn s(name: &str) -> String {
    name.to_string()
}

#[test]
fn undo_redo_scenario() {
    let mut machine = machine();
    assert_eq!(machine.state(), "normal");

    machine.trigger(s("study")).unwrap();
    assert_eq!(machine.state(), "busy");

    machine.trigger(s("get_hungry")).unwrap();
    assert_eq!(machine.state(), "hungry");

    assert!(machine.undo());
    assert_eq!(machine.state(), "busy");

    assert!(machine.undo());
    assert_eq!(machine.state(), "normal");

    assert!(!machine.undo());
    assert_eq!(machine.state(), "normal");

    assert!(machine.redo());
    assert!(machine.redo());
    assert_eq!(machine.state(), "hungry");

    machine.trigger(s("eat")).unwrap();
    assert_eq!(machine.state(), "normal");
    assert!(!machine.redo());
}

#[test]
fn rejected_operations_leave_state_alone() {
    let mut machine = machine();
    machine.trigger(s("study")).unwrap();

    assert_eq!(
        machine.trigger(s("get_up")),
        Err(MachineError::InvalidTransition {
            from: s("busy"),
            event: s("get_up"),
        })
    );
    assert_eq!(
        machine.change_state(s("dancing")),
        Err(MachineError::InvalidState {
            state: s("dancing")
        })
    );
    assert_eq!(machine.state(), "busy");
}

#[test]
fn states_lookup() {
    let machine = machine();

    assert_eq!(
        machine.states(None),
        vec![s("normal"), s("busy"), s("hungry"), s("sleeping")]
    );

    assert_eq!(
        machine.states(Some(&s("get_hungry"))),
        vec![s("busy"), s("sleeping")]
    );
    assert!(machine.states(Some(&s("fly"))).is_empty());
}

#[test]
fn states_and_events_follow_declaration_order() {
    let mut machine = machine();
    machine.change_state(s("sleeping")).unwrap();

    assert_eq!(machine.events(), vec![s("get_hungry"), s("get_up")]);
    assert_eq!(
        machine.config().states().keys().collect::<Vec<_>>(),
        vec!["normal", "busy", "hungry", "sleeping"]
    );
}

#[test]
fn full_day_with_reset_and_clear() {
    let mut machine = machine();
    machine.trigger(s("study")).unwrap();
    machine.trigger(s("get_tired")).unwrap();
    machine.trigger(s("get_up")).unwrap();
    assert_eq!(machine.state(), "normal");

    machine.change_state(s("hungry")).unwrap();
    machine.reset();
    assert_eq!(machine.state(), "normal");

    assert!(machine.undo());
    assert_eq!(machine.state(), "hungry");

    machine.clear_history();
    assert_eq!(machine.state(), "normal");
    assert!(!machine.undo());
    assert!(!machine.redo());
}

identifier_enum! {
    enum Mood {
        Normal = "normal",
        Busy = "busy",
        Hungry = "hungry",
        Sleeping = "sleeping",
    }
}

identifier_enum! {
    enum Activity {
        Study = "study",
        GetTired = "get_tired",
        GetHungry = "get_hungry",
        Eat = "eat",
        GetUp = "get_up",
    }
}

#[test]
fn typed_identifiers_load_the_same_fixture() {
    let config: Configuration<Mood, Activity> = Configuration::from_json_str(ROUTINE).unwrap();
    let mut machine = StateMachine::new(Arc::new(config)).unwrap();

    assert_eq!(machine.trigger(Activity::Study), Ok(Mood::Busy));
    assert_eq!(machine.trigger(Activity::GetHungry), Ok(Mood::Hungry));
    assert!(machine.undo());
    assert_eq!(machine.state(), &Mood::Busy);

    let err = machine.trigger(Activity::Eat).unwrap_err();
    assert_eq!(
        err,
        MachineError::InvalidTransition {
            from: Mood::Busy,
            event: Activity::Eat,
        }
    );
    assert_eq!(err.to_string(), "the state is not set: no transition 'eat' from 'busy'");

    let err = machine.trigger(Activity::GetUp).unwrap_err();
    assert!(matches!(err, MachineError::InvalidTransition { from: Mood::Busy, .. }));

    assert_eq!(machine.states(None).len(), Mood::ALL.len());
    assert_eq!(
        machine.states(None),
        vec![Mood::Normal, Mood::Busy, Mood::Hungry, Mood::Sleeping]
    );
    assert_eq!(
        machine.states(Some(&Activity::GetUp)),
        vec![Mood::Sleeping]
    );
    assert_eq!(Mood::Normal.name(), "normal");
}
