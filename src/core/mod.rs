//! Value types exchanged once per control cycle.
//!
//! - [`RawSignalSnapshot`]: decoded physical signals handed in by the parser
//! - [`CanonicalState`]: the vehicle-agnostic snapshot produced every cycle
//! - [`PersistedCycleState`]: memory threaded explicitly between cycles
//! - [`Event`] and [`ButtonEvent`]: per-cycle outputs, never persisted
//!
//! Nothing in this module has behaviour beyond small pure accessors.

mod event;
mod persisted;
mod signals;
mod state;

pub use event::{ButtonEvent, ButtonType, Event, EventError, EventKind, Severity};
pub use persisted::{FollowLevel, PersistedCycleState};
pub use signals::{AccState, CruiseButton, Gear, RawSignalSnapshot};
pub use state::{CanonicalState, CruiseState, FaultFlags, SignalError, WheelSpeeds};
