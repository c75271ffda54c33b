//! Coin-operated Turnstile
//!
//! This example demonstrates a two-state machine driven by inputs.
//!
//! Key concepts:
//! - Declaring a schema and schema-checked state payloads
//! - Wiring transitions keyed by input tokens
//! - Strict versus lenient handling of unresolved inputs
//! - Cascading removal of a state and its transitions
//!
//! Run with: RUST_LOG=debug cargo run --example turnstile

use tabular_fsm::{
    payload, schema, FsmError, MachineBuilder, MachineConfig, UnresolvedInputPolicy,
};

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum Gate {
    Locked,
    Unlocked,
    Broken,
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum Event {
    Coin,
    Push,
    Kick,
}

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let mut machine = MachineBuilder::<Gate, Event>::new()
        .schema(schema! { "fare" => Integer, "open" => Bool })
        .state(Gate::Locked, payload! { "fare" => 2, "open" => false })
        .state(Gate::Unlocked, payload! { "fare" => 0, "open" => true })
        .state(Gate::Broken, payload! { "fare" => 0, "open" => false })
        .transition(Gate::Locked, Gate::Unlocked, Event::Coin)
        .transition(Gate::Unlocked, Gate::Locked, Event::Push)
        .transition(Gate::Locked, Gate::Broken, Event::Kick)
        .initial(Gate::Locked)
        .build()?;

    println!("{}", machine.describe_all());

    for event in [Event::Coin, Event::Push, Event::Coin] {
        let step = machine.input(event.clone())?;
        println!("{event:?} -> {:?}", step.state());
    }

    match machine.input(Event::Coin) {
        Err(err) => println!("Strict machine rejected input: {err}"),
        Ok(step) => println!("Unexpected step: {step:?}"),
    }

    machine.restart()?;
    machine.remove_state(&Gate::Broken)?;
    println!(
        "\nAfter removing Broken, Locked has transitions: {:?}",
        machine.describe_transitions(&Gate::Locked)?
    );

    let config = MachineConfig::default().with_unresolved_input(UnresolvedInputPolicy::IgnoreAndLog);
    let mut lenient = MachineBuilder::<Gate, Event>::new()
        .config(config)
        .state(Gate::Locked, payload! {})
        .initial(Gate::Locked)
        .build()?;
    lenient.input(Event::Push)?;
    println!("Lenient machine stayed in {:?}", lenient.current_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
