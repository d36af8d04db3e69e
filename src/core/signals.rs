//! Raw signal snapshot as decoded from the powertrain and chassis buses.

use serde::{Deserialize, Serialize};

/// Cruise stalk button code as reported by the powertrain bus.
///
/// `Unpress` is the idle sentinel. `Init` is reported before the stalk
/// module has come up and is never a real press.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum CruiseButton {
    Init,
    #[default]
    Unpress,
    ResAccel,
    DecelSet,
    Main,
    Cancel,
    Other(u8),
}

impl CruiseButton {
    /// Map a raw bus code onto a button.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Init,
            1 => Self::Unpress,
            2 => Self::ResAccel,
            3 => Self::DecelSet,
            5 => Self::Main,
            6 => Self::Cancel,
            other => Self::Other(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Init => 0,
            Self::Unpress => 1,
            Self::ResAccel => 2,
            Self::DecelSet => 3,
            Self::Main => 5,
            Self::Cancel => 6,
            Self::Other(code) => *code,
        }
    }

    pub fn is_pressed(&self) -> bool {
        *self != Self::Unpress
    }
}

/// PCM adaptive cruise status.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum AccState {
    #[default]
    Off,
    Active,
    Faulted,
    Standstill,
}

impl AccState {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Active,
            3 => Self::Faulted,
            4 => Self::Standstill,
            _ => Self::Off,
        }
    }
}

/// Transmission gear selector position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Gear {
    #[default]
    Unknown,
    Park,
    Drive,
    Neutral,
    Reverse,
    Low,
}

/// One cycle's worth of decoded signals.
///
/// Produced by the external signal parser and consumed exactly once. The
/// `valid` flag is the parser's verdict and is never re-derived here.
/// Speeds are in m/s, the steering angle is in degrees.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSignalSnapshot {
    pub valid: bool,

    pub v_ego: f64,
    pub v_ego_raw: f64,
    pub a_ego: f64,
    pub wheel_speed_fl: f64,
    pub wheel_speed_fr: f64,
    pub wheel_speed_rl: f64,
    pub wheel_speed_rr: f64,

    pub steering_angle_deg: f64,
    pub steering_torque: f64,
    pub steer_override: bool,

    /// Accelerator pedal position, 0..=254.
    pub pedal_gas: f64,
    pub gas_pressed: bool,
    /// Driver brake pressure, 0..=0xd0.
    pub user_brake: f64,
    pub brake_pressed: bool,
    pub friction_brakes_active: bool,

    pub cruise_buttons: CruiseButton,
    pub lka_button: u8,
    pub distance_button: u8,

    pub left_blinker: bool,
    pub right_blinker: bool,
    pub doors_closed: bool,
    pub seatbelt_latched: bool,

    pub gear: Gear,
    pub gear_valid: bool,

    pub steer_error: bool,
    pub steer_not_allowed: bool,
    pub brake_error: bool,
    pub esp_disabled: bool,
    pub park_brake: bool,

    pub main_on: bool,
    pub acc_active: bool,
    pub acc_state: AccState,
}

impl RawSignalSnapshot {
    /// A valid snapshot of a parked-but-ready car: doors closed, belt
    /// latched, gear in drive, no faults, cruise main switch on.
    pub fn nominal() -> Self {
        Self {
            valid: true,
            doors_closed: true,
            seatbelt_latched: true,
            gear: Gear::Drive,
            gear_valid: true,
            main_on: true,
            ..Self::default()
        }
    }
}
