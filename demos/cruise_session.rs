//! Cruise Session
//!
//! Drives one Volt session through a set, release and cancel sequence and
//! prints the events each cycle produces.
//!
//! Key concepts:
//! - Persisted state threaded by `Session` between cycles
//! - Button edges typed by the held code on release
//! - Actuation dropping enable while the driver is on the gas
//!
//! Run with: cargo run --example cruise_session

use gm_interface::core::{AccState, CanonicalState, CruiseButton, RawSignalSnapshot};
use gm_interface::interface::{CommandContext, ControlCommand, Controller, Session};
use gm_interface::{InterfaceConfig, Variant};

// Prints what a real command builder would put on the bus
struct ConsoleController;

impl Controller for ConsoleController {
    type Command = String;

    fn build_commands(&mut self, context: &CommandContext<'_>) -> Vec<String> {
        vec![format!(
            "frame {} enabled={} gas={:.2}",
            context.frame, context.enabled, context.actuators.gas
        )]
    }
}

fn print_cycle(label: &str, state: &CanonicalState) {
    let buttons: Vec<_> = state
        .button_events
        .iter()
        .map(|b| format!("{}{}", b.kind, if b.pressed { "↓" } else { "↑" }))
        .collect();
    let events: Vec<_> = state.events.iter().map(|e| e.kind.to_string()).collect();
    println!("  {label:<18} buttons={buttons:?} events={events:?}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Cruise Session Example ===\n");

    let config = InterfaceConfig::new(Variant::Volt);
    let yaw = |_steer: f64, _speed: f64| 0.0;
    let car = config.build_interface(yaw, ConsoleController)?;
    let mut session = Session::with_persisted(car, config.initial_persisted()?);

    let mut raw = RawSignalSnapshot {
        v_ego: 25.0,
        v_ego_raw: 25.0,
        ..RawSignalSnapshot::nominal()
    };

    println!("Engaging:");
    print_cycle("cruising", session.step(&raw, 0.0));

    raw.cruise_buttons = CruiseButton::DecelSet;
    print_cycle("set pressed", session.step(&raw, 0.0));

    raw.cruise_buttons = CruiseButton::Unpress;
    print_cycle("set released", session.step(&raw, 0.0));

    println!("\nActuating:");
    raw.acc_state = AccState::Active;
    session.step(&raw, 25.0);
    let command = ControlCommand {
        enabled: true,
        ..ControlCommand::default()
    };
    for line in session.actuate(&command) {
        println!("  {line}");
    }

    raw.gas_pressed = true;
    print_cycle("gas pressed", session.step(&raw, 25.0));
    for line in session.actuate(&command) {
        println!("  {line}");
    }
    raw.gas_pressed = false;

    println!("\nDisengaging:");
    raw.cruise_buttons = CruiseButton::Cancel;
    print_cycle("cancel pressed", session.step(&raw, 25.0));

    println!("\nFrames sent: {}", session.persisted().frame);
    Ok(())
}
