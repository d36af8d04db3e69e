//! Orchestration around the pure core.
//!
//! [`CarInterface`] composes translation, edge detection and event
//! derivation per cycle and forwards actuator requests to the external
//! [`Controller`]. [`Session`] is the thin imperative shell that owns the
//! persisted state between cycles.

mod car;
mod controller;
mod session;

pub use car::{CarInterface, DEFAULT_MAX_HUD_SET_SPEED};
pub use controller::{Actuators, CommandContext, ControlCommand, Controller, HudControl, VisualAlert};
pub use session::Session;
