//! GM car interface: per-cycle state translation and safety events.
//!
//! Sits between the signal parser and a generic driving-automation control
//! loop. Every cycle it turns a [`RawSignalSnapshot`](crate::core::RawSignalSnapshot)
//! plus explicitly threaded [`PersistedCycleState`](crate::core::PersistedCycleState)
//! into a [`CanonicalState`](crate::core::CanonicalState) carrying button edges and
//! an ordered list of tagged safety [`Event`](crate::core::Event)s.
//!
//! # Core Concepts
//!
//! - **Parameters**: static per-variant data via [`params::params_for`]
//! - **Translation**: pure raw-to-canonical mapping in [`translate`]
//! - **Edges**: button and blinker transitions in [`buttons`]
//! - **Events**: declarative, ordered rule table in [`events`]
//! - **Curves**: longitudinal shaping in [`curves`]
//!
//! The core is pure; [`interface::Session`] is the only owner of mutable
//! cycle memory.
//!
//! # Example
//!
//! ```rust
//! use gm_interface::core::{EventKind, PersistedCycleState, RawSignalSnapshot};
//! use gm_interface::interface::{CarInterface, CommandContext, Controller};
//! use gm_interface::params::Variant;
//!
//! struct NoCommands;
//!
//! impl Controller for NoCommands {
//!     type Command = ();
//!     fn build_commands(&mut self, _context: &CommandContext<'_>) -> Vec<()> {
//!         Vec::new()
//!     }
//! }
//!
//! let yaw = |_angle: f64, _speed: f64| 0.0;
//! let car = CarInterface::new(Variant::Volt.params(), yaw, NoCommands);
//!
//! let raw = RawSignalSnapshot { park_brake: true, ..RawSignalSnapshot::nominal() };
//! let (state, _next) = car.update(&PersistedCycleState::default(), &raw, 0.0);
//!
//! assert!(state.has_event(EventKind::ParkBrake));
//! assert!(state.has_event(EventKind::SpeedTooLow));
//! ```

#[macro_use]
mod macros;

pub mod buttons;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod curves;
pub mod events;
pub mod interface;
pub mod params;
pub mod translate;

// Re-export commonly used types
pub use crate::core::{
    ButtonEvent, ButtonType, CanonicalState, Event, EventKind, PersistedCycleState,
    RawSignalSnapshot, Severity,
};
pub use config::InterfaceConfig;
pub use interface::{CarInterface, Session};
pub use params::{params_for, ParamTable, ParamsError, Variant};
