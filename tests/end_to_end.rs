//! End-to-end scenarios driving a machine through the public API.

use tabular_fsm::{payload, schema, FsmError, Machine, StepResult, Value};

fn counter_machine(strict: bool) -> Machine<&'static str, &'static str> {
    let mut machine = Machine::new(schema! { "count" => Integer }, strict);
    machine.add_state("A", payload! { "count" => 0 }).unwrap();
    machine.add_state("B", payload! { "count" => 1 }).unwrap();
    machine.add_state_transition("A", "B", "go").unwrap();
    machine.set_initial_state("A").unwrap();
    machine
}

#[test]
fn go_moves_a_to_b_then_strict_machine_rejects() {
    let mut machine = counter_machine(true);

    assert_eq!(
        machine.input("go"),
        Ok(StepResult::Transitioned { from: "A", to: "B" })
    );
    assert_eq!(machine.current_state(), Some(&"B"));

    assert_eq!(
        machine.input("go"),
        Err(FsmError::UnresolvedInput {
            state: "\"B\"".to_string(),
            input: "\"go\"".to_string(),
        })
    );
    assert_eq!(machine.current_state(), Some(&"B"));
}

#[test]
fn lenient_machine_stays_put_on_unresolved_input() {
    let mut machine = counter_machine(false);
    machine.input("go").unwrap();

    assert_eq!(machine.input("go"), Ok(StepResult::Ignored { state: "B" }));
    assert_eq!(machine.current_state(), Some(&"B"));
}

#[test]
fn removing_destination_clears_source_transitions() {
    let mut machine = counter_machine(true);
    machine.remove_state(&"B").unwrap();

    assert!(machine.describe_transitions(&"A").unwrap().is_empty());
    assert!(machine.is_terminal(&"A").unwrap());
    assert_eq!(machine.transition_count(), 0);
}

#[test]
fn restart_after_many_steps_returns_to_initial() {
    let mut machine = counter_machine(true);
    machine.add_state_transition("B", "A", "back").unwrap();

    for _ in 0..10 {
        machine.input("go").unwrap();
        machine.input("back").unwrap();
    }
    machine.input("go").unwrap();

    machine.restart().unwrap();
    assert_eq!(machine.current_state(), Some(&"A"));
}

#[test]
fn change_state_overwrites_payload_in_place() {
    let mut machine = counter_machine(true);
    machine.change_state(&"A", payload! { "count" => 42 }).unwrap();

    assert_eq!(
        machine.describe_state(&"A").unwrap(),
        vec![("count".to_string(), Value::Integer(42))]
    );
    assert_eq!(machine.describe_transitions(&"A").unwrap(), vec![("go", "B")]);
}

#[test]
fn dump_lists_states_then_transitions() {
    let mut machine = counter_machine(true);
    machine.input("go").unwrap();

    let text = machine.describe_all().to_string();
    let states_at = text.find("States:").unwrap();
    let table_at = text.find("Transition table:").unwrap();

    assert!(states_at < table_at);
    assert!(text.contains("Current state: \"B\""));
}
