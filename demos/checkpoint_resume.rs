//! Checkpoint and Resume
//!
//! Shows how the between-cycle memory of a session survives a restart.
//!
//! Key concepts:
//! - JSON checkpoints for inspection, binary for compactness
//! - Atomic writes (temp file, then rename)
//! - Variant check on resume
//!
//! Run with: cargo run --example checkpoint_resume

use gm_interface::checkpoint::SessionCheckpoint;
use gm_interface::core::{AccState, RawSignalSnapshot};
use gm_interface::interface::{CommandContext, Controller, Session};
use gm_interface::{InterfaceConfig, Variant};
use std::fs;

struct NoCommands;

impl Controller for NoCommands {
    type Command = ();

    fn build_commands(&mut self, _context: &CommandContext<'_>) -> Vec<()> {
        Vec::new()
    }
}

fn flat_yaw(_steer: f64, _speed: f64) -> f64 {
    0.0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Checkpoint and Resume Example ===\n");

    let config = InterfaceConfig::new(Variant::BuickRegal);
    let mut session = Session::new(config.build_interface(flat_yaw, NoCommands)?);

    // Two distance presses: 2 -> 1 -> 3
    let mut raw = RawSignalSnapshot::nominal();
    for pressed in [1, 0, 1] {
        raw.distance_button = pressed;
        session.step(&raw, 0.0);
    }
    // Lane keep only toggles with cruise engaged
    raw.acc_state = AccState::Active;
    raw.lka_button = 1;
    session.step(&raw, 0.0);
    println!(
        "Before restart: follow level {}, lane keep {}",
        session.persisted().follow_level.get(),
        session.persisted().lane_keep_mode
    );

    let checkpoint = session.checkpoint();
    let path = std::env::temp_dir().join(format!("gm-session-{}.json", checkpoint.id));
    let temp = path.with_extension("tmp");
    fs::write(&temp, checkpoint.to_json()?)?;
    fs::rename(&temp, &path)?;
    println!("Checkpoint written to {}", path.display());
    println!("  binary size: {} bytes", checkpoint.to_binary()?.len());

    // Simulated restart
    drop(session);

    let restored = SessionCheckpoint::from_json(&fs::read_to_string(&path)?)?;
    let wrong_car = InterfaceConfig::new(Variant::Volt).build_interface(flat_yaw, NoCommands)?;
    if let Err(e) = Session::resume(wrong_car, restored.clone()) {
        println!("Refused: {e}");
    }

    let car = config.build_interface(flat_yaw, NoCommands)?;
    let resumed = Session::resume(car, restored)?;
    println!(
        "After restart: follow level {}, lane keep {}",
        resumed.persisted().follow_level.get(),
        resumed.persisted().lane_keep_mode
    );

    fs::remove_file(&path)?;
    Ok(())
}
