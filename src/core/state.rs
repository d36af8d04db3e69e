//! Canonical vehicle state produced once per cycle.

use super::event::{ButtonEvent, Event, EventKind, Severity};
use super::persisted::FollowLevel;
use super::signals::Gear;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signal-level problems surfaced alongside a best-effort state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("Signal batch failed bus validation; state is best effort")]
    InvalidSignalBatch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelSpeeds {
    pub fl: f64,
    pub fr: f64,
    pub rl: f64,
    pub rr: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CruiseState {
    pub available: bool,
    pub enabled: bool,
    /// Cruise is holding at a stop and waits for a resume.
    pub standstill: bool,
}

/// Fault and status flags the event rules consult.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultFlags {
    pub steer_error: bool,
    pub steer_not_allowed: bool,
    pub brake_error: bool,
    pub esp_disabled: bool,
    pub park_brake: bool,
    /// Native full-range cruise reports itself engaged.
    pub acc_active: bool,
}

/// Vehicle-agnostic snapshot of one control cycle.
///
/// Built fresh every cycle and never modified once returned from
/// [`CarInterface::update`](crate::interface::CarInterface::update).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalState {
    pub bus_valid: bool,

    pub v_ego: f64,
    pub v_ego_raw: f64,
    pub a_ego: f64,
    pub standstill: bool,
    pub wheel_speeds: WheelSpeeds,
    pub yaw_rate: f64,

    pub gas: f64,
    pub gas_pressed: bool,
    pub brake: f64,
    pub brake_pressed: bool,
    pub brake_lights: bool,

    pub steering_angle: f64,
    pub steering_torque: f64,
    pub steering_pressed: bool,
    pub steering_rate_limited: bool,

    pub cruise_state: CruiseState,

    pub left_blinker: bool,
    pub right_blinker: bool,
    pub door_open: bool,
    pub seatbelt_unlatched: bool,
    pub gear: Gear,
    pub gear_valid: bool,
    pub main_on: bool,

    pub follow_level: FollowLevel,
    pub lane_keep_mode: bool,
    pub faults: FaultFlags,

    pub button_events: Vec<ButtonEvent>,
    pub events: Vec<Event>,
}

impl CanonicalState {
    /// `Err` when the bus was invalid this cycle. Informational only.
    pub fn signal_status(&self) -> Result<(), SignalError> {
        if self.bus_valid {
            Ok(())
        } else {
            Err(SignalError::InvalidSignalBatch)
        }
    }

    pub fn has_event(&self, kind: EventKind) -> bool {
        self.events.iter().any(|e| e.kind == kind)
    }

    /// Any event carrying `tag`.
    pub fn any_tagged(&self, tag: Severity) -> bool {
        self.events.iter().any(|e| e.has(tag))
    }
}
