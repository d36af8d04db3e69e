//! Raw signals to canonical state.

use crate::core::{
    AccState, CanonicalState, CruiseState, FaultFlags, PersistedCycleState, RawSignalSnapshot,
    WheelSpeeds,
};
use tracing::warn;

/// Full-scale accelerator pedal reading.
pub const GAS_FULL_SCALE: f64 = 254.0;
/// Full-scale driver brake pressure reading.
pub const BRAKE_FULL_SCALE: f64 = 208.0;
/// Raw speed (m/s) below which the car counts as stopped.
pub const STANDSTILL_SPEED: f64 = 0.01;

/// Vehicle dynamics model used to derive yaw rate.
///
/// Any `Fn(f64, f64) -> f64` taking (steering angle in radians, speed in
/// m/s) is a model.
pub trait VehicleModel {
    fn yaw_rate(&self, steering_angle_rad: f64, speed: f64) -> f64;
}

impl<F> VehicleModel for F
where
    F: Fn(f64, f64) -> f64,
{
    fn yaw_rate(&self, steering_angle_rad: f64, speed: f64) -> f64 {
        self(steering_angle_rad, speed)
    }
}

pub fn is_standstill(raw: &RawSignalSnapshot) -> bool {
    raw.v_ego_raw < STANDSTILL_SPEED
}

/// Build the canonical snapshot for this cycle.
///
/// Never fails: an invalid bus still yields a best-effort state with
/// `bus_valid == false`. Button and safety events are left empty and the
/// mode flags are copied from `prev`; the orchestrator fills them in.
pub fn translate<M>(raw: &RawSignalSnapshot, prev: &PersistedCycleState, model: &M) -> CanonicalState
where
    M: VehicleModel + ?Sized,
{
    if !raw.valid {
        warn!("Signal batch invalid, building best-effort state");
    }

    CanonicalState {
        bus_valid: raw.valid,

        v_ego: raw.v_ego,
        v_ego_raw: raw.v_ego_raw,
        a_ego: raw.a_ego,
        standstill: is_standstill(raw),
        wheel_speeds: WheelSpeeds {
            fl: raw.wheel_speed_fl,
            fr: raw.wheel_speed_fr,
            rl: raw.wheel_speed_rl,
            rr: raw.wheel_speed_rr,
        },
        yaw_rate: model.yaw_rate(raw.steering_angle_deg.to_radians(), raw.v_ego),

        gas: raw.pedal_gas / GAS_FULL_SCALE,
        gas_pressed: raw.gas_pressed,
        brake: raw.user_brake / BRAKE_FULL_SCALE,
        brake_pressed: raw.brake_pressed,
        brake_lights: raw.friction_brakes_active,

        steering_angle: raw.steering_angle_deg,
        steering_torque: raw.steering_torque,
        steering_pressed: raw.steer_override,
        steering_rate_limited: false,

        cruise_state: CruiseState {
            available: raw.main_on,
            enabled: raw.acc_state != AccState::Off,
            standstill: raw.acc_state == AccState::Standstill,
        },

        left_blinker: raw.left_blinker,
        right_blinker: raw.right_blinker,
        door_open: !raw.doors_closed,
        seatbelt_unlatched: !raw.seatbelt_latched,
        gear: raw.gear,
        gear_valid: raw.gear_valid,
        main_on: raw.main_on,

        follow_level: prev.follow_level,
        lane_keep_mode: prev.lane_keep_mode,
        faults: FaultFlags {
            steer_error: raw.steer_error,
            steer_not_allowed: raw.steer_not_allowed,
            brake_error: raw.brake_error,
            esp_disabled: raw.esp_disabled,
            park_brake: raw.park_brake,
            acc_active: raw.acc_active,
        },

        button_events: Vec::new(),
        events: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_yaw(_angle: f64, _speed: f64) -> f64 {
        0.0
    }

    #[test]
    fn pedals_are_normalized() {
        let raw = RawSignalSnapshot {
            pedal_gas: 127.0,
            user_brake: 0xd0 as f64,
            ..RawSignalSnapshot::nominal()
        };
        let state = translate(&raw, &PersistedCycleState::default(), &no_yaw);

        assert_eq!(state.gas, 0.5);
        assert_eq!(state.brake, 1.0);
    }

    #[test]
    fn yaw_rate_gets_radians_and_speed() {
        let raw = RawSignalSnapshot {
            steering_angle_deg: 180.0,
            v_ego: 7.0,
            ..RawSignalSnapshot::nominal()
        };
        let model = |angle: f64, speed: f64| angle * speed;
        let state = translate(&raw, &PersistedCycleState::default(), &model);

        assert!((state.yaw_rate - std::f64::consts::PI * 7.0).abs() < 1e-12);
    }

    #[test]
    fn standstill_uses_raw_speed() {
        let mut raw = RawSignalSnapshot::nominal();
        assert!(translate(&raw, &PersistedCycleState::default(), &no_yaw).standstill);

        raw.v_ego_raw = 0.5;
        assert!(!translate(&raw, &PersistedCycleState::default(), &no_yaw).standstill);
    }

    #[test]
    fn cruise_state_follows_acc_status() {
        let mut raw = RawSignalSnapshot::nominal();
        raw.acc_state = AccState::Standstill;
        let state = translate(&raw, &PersistedCycleState::default(), &no_yaw);

        assert!(state.cruise_state.available);
        assert!(state.cruise_state.enabled);
        assert!(state.cruise_state.standstill);

        raw.acc_state = AccState::Off;
        raw.main_on = false;
        let state = translate(&raw, &PersistedCycleState::default(), &no_yaw);
        assert!(!state.cruise_state.available);
        assert!(!state.cruise_state.enabled);
    }

    #[test]
    fn door_and_belt_are_inverted() {
        let raw = RawSignalSnapshot {
            doors_closed: false,
            seatbelt_latched: false,
            ..RawSignalSnapshot::nominal()
        };
        let state = translate(&raw, &PersistedCycleState::default(), &no_yaw);
        assert!(state.door_open);
        assert!(state.seatbelt_unlatched);
    }

    #[test]
    fn invalid_bus_still_produces_state() {
        let raw = RawSignalSnapshot {
            valid: false,
            v_ego: 3.0,
            ..RawSignalSnapshot::nominal()
        };
        let state = translate(&raw, &PersistedCycleState::default(), &no_yaw);

        assert!(!state.bus_valid);
        assert_eq!(state.v_ego, 3.0);
        assert!(state.signal_status().is_err());
    }
}
