//! Daily Routine
//!
//! This example walks a machine through a day and back again.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Triggering events and relabeling states directly
//! - Undo/redo and how a new change discards the redo branch
//! - Structured logging of every state change
//!
//! Run with: RUST_LOG=waypoint=debug cargo run --example daily_routine [config.json]

use std::error::Error;
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use waypoint::{Configuration, StateMachine};

const ROUTINE: &str = include_str!("../fixtures/daily_routine.json");

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_filter(filter),
    );

    if subscriber.try_init().is_err() {
        tracing::debug!("Global tracing subscriber already initialized");
    }
}

fn load_config() -> Result<Configuration, Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => Configuration::from_reader(File::open(path)?)?,
        None => Configuration::from_json_str(ROUTINE)?,
    };
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    println!("=== Daily Routine Example ===\n");

    let config = Arc::new(load_config()?);
    let mut machine = StateMachine::new(Arc::clone(&config))?;
    println!("Start: {}", machine.state());

    for event in ["study", "get_hungry"] {
        let state = machine.trigger(event.to_string())?;
        println!("  {event:>10} -> {state}");
    }

    println!("\n1. Walking back through the day:");
    while machine.undo() {
        println!("  undo -> {}", machine.state());
    }
    println!("  nothing left to undo");

    println!("\n2. Redoing twice:");
    machine.redo();
    machine.redo();
    println!("  now {}", machine.state());

    println!("\n3. Eating discards the redo branch:");
    machine.trigger("eat".to_string())?;
    println!("  now {}, redo available: {}", machine.state(), machine.can_redo());

    println!("\n4. Invalid requests are rejected without side effects:");
    if let Err(err) = machine.trigger("get_up".to_string()) {
        println!("  {err}");
    }
    if let Err(err) = machine.change_state("flying".to_string()) {
        println!("  {err}");
    }
    println!("  still {}", machine.state());

    println!("\n5. Who reacts to `get_hungry`?");
    println!("  {:?}", machine.states(Some(&"get_hungry".to_string())));

    println!("\nPath taken:");
    for entry in machine.history().entries() {
        println!("  {} ({:?})", entry.state, entry.cause);
    }

    machine.clear_history();
    println!("\nHistory cleared, back at {}", machine.state());

    println!("\n=== Example Complete ===");
    Ok(())
}
