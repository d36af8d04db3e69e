//! Per-variant vehicle parameter table.
//!
//! Every variant shares identical behaviour and differs only in data, so the
//! table is a static mapping from [`Variant`] to an immutable [`ParamTable`].
//!
//! # Example
//!
//! ```rust
//! use gm_interface::params::{params_for, Variant};
//!
//! let volt = params_for("CHEVROLET VOLT PREMIUM 2017").unwrap();
//! assert_eq!(volt.variant, Variant::Volt);
//! assert!(!volt.supports_native_full_range_cruise);
//!
//! assert!(params_for("NOT A CAR").is_err());
//! ```

mod error;
mod variants;

pub use error::ParamsError;
pub use variants::{SafetyModel, Variant, LB_TO_KG, MPH_TO_MS};

use serde::{Deserialize, Serialize};
use variants::data_for;

/// Standard cargo mass added to every curb weight, in kg.
pub const STD_CARGO_KG: f64 = 136.0;

/// Tire stiffness factor shared by all GM variants (not optimized yet).
pub const GM_TIRE_STIFFNESS_FACTOR: f64 = 0.444;

/// Reference vehicle the inertia and tire stiffness are scaled from.
mod reference {
    use super::{LB_TO_KG, STD_CARGO_KG};

    pub const MASS: f64 = 2923.0 * LB_TO_KG + STD_CARGO_KG;
    pub const WHEELBASE: f64 = 2.70;
    pub const CENTER_TO_FRONT: f64 = WHEELBASE * 0.4;
    pub const CENTER_TO_REAR: f64 = WHEELBASE - CENTER_TO_FRONT;
    pub const ROTATIONAL_INERTIA: f64 = 2500.0;
    pub const TIRE_STIFFNESS_FRONT: f64 = 192150.0;
    pub const TIRE_STIFFNESS_REAR: f64 = 202500.0;
}

/// A breakpoint/value lookup curve, evaluated with [`crate::curves::interp`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub bp: Vec<f64>,
    pub v: Vec<f64>,
}

impl Curve {
    pub fn new(bp: &[f64], v: &[f64]) -> Self {
        Self {
            bp: bp.to_vec(),
            v: v.to_vec(),
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(&[0.0], &[value])
    }

    pub fn eval(&self, x: f64) -> f64 {
        crate::curves::interp(x, &self.bp, &self.v)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LateralPid {
    pub kp: Curve,
    pub ki: Curve,
    pub kf: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalTuning {
    pub kp: Curve,
    pub ki: Curve,
    pub deadzone: Curve,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteerControlType {
    Torque,
    Angle,
}

/// Immutable per-variant parameters. Created once at configuration time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamTable {
    pub car_name: String,
    pub variant: Variant,
    pub safety_model: SafetyModel,

    /// Loaded mass in kg, standard cargo included.
    pub mass: f64,
    pub wheelbase: f64,
    pub steer_ratio: f64,
    pub steer_ratio_rear: f64,
    pub center_to_front: f64,
    pub rotational_inertia: f64,
    pub tire_stiffness_front: f64,
    pub tire_stiffness_rear: f64,

    /// Minimum engage speed in m/s; `-1.0` when the PCM decides.
    pub min_enable_speed: f64,
    pub supports_native_full_range_cruise: bool,
    pub community_feature: bool,
    /// Running behind a relay harness that cuts the stock camera off the bus.
    pub is_panda_black: bool,
    pub enable_camera: bool,
    pub openpilot_longitudinal_control: bool,

    pub lateral_tuning: LateralPid,
    pub steer_rate_cost: f64,
    pub longitudinal_tuning: LongitudinalTuning,

    pub steer_max: Curve,
    pub gas_max: Curve,
    pub brake_max: Curve,

    pub stopping_control: bool,
    pub start_accel: f64,
    pub steer_actuator_delay: f64,
    pub steer_limit_timer: f64,
    pub radar_time_step: f64,
    pub steer_control_type: SteerControlType,
}

/// Look up the parameter table for a fingerprint string.
///
/// Pure and total over [`Variant`]; any other id is `UnknownVariant`.
pub fn params_for(id: &str) -> Result<ParamTable, ParamsError> {
    let variant: Variant = id.parse()?;
    Ok(variant.params())
}

impl Variant {
    /// Parameter table for this variant on stock wiring.
    pub fn params(self) -> ParamTable {
        self.params_with(false)
    }

    /// Parameter table for this variant, `has_relay` set when the stock
    /// camera is cut off by a relay harness.
    pub fn params_with(self, has_relay: bool) -> ParamTable {
        let data = data_for(self);
        let mass = data.curb_mass.kg() + STD_CARGO_KG;
        let center_to_front = data.wheelbase * data.center_to_front_ratio;
        let (tire_stiffness_front, tire_stiffness_rear) = scale_tire_stiffness(
            mass,
            data.wheelbase,
            center_to_front,
            GM_TIRE_STIFFNESS_FACTOR,
        );
        let (kp, ki) = data.lateral_pid.unwrap_or((0.2, 0.0));
        // CT6 ships with a camera harness; the others need the relay
        let enable_camera = has_relay || self == Variant::CadillacCt6;

        ParamTable {
            car_name: "gm".to_string(),
            variant: data.variant,
            safety_model: data.safety_model,
            mass,
            wheelbase: data.wheelbase,
            steer_ratio: data.steer_ratio,
            steer_ratio_rear: 0.0,
            center_to_front,
            rotational_inertia: scale_rot_inertia(mass, data.wheelbase),
            tire_stiffness_front,
            tire_stiffness_rear,
            min_enable_speed: data.min_enable_mph.map_or(-1.0, |mph| mph * MPH_TO_MS),
            supports_native_full_range_cruise: data.native_full_range_cruise,
            community_feature: true,
            is_panda_black: has_relay,
            enable_camera,
            openpilot_longitudinal_control: enable_camera,
            lateral_tuning: LateralPid {
                kp: Curve::constant(kp),
                ki: Curve::constant(ki),
                kf: 0.00004,
            },
            steer_rate_cost: data.steer_rate_cost.unwrap_or(1.0),
            longitudinal_tuning: LongitudinalTuning {
                kp: Curve::new(&[5.0, 35.0], &[2.4, 1.5]),
                ki: Curve::constant(0.36),
                deadzone: Curve::constant(0.0),
            },
            steer_max: Curve::constant(1.0),
            gas_max: Curve::constant(0.5),
            brake_max: Curve::constant(1.0),
            stopping_control: true,
            start_accel: 0.8,
            steer_actuator_delay: 0.1,
            steer_limit_timer: 0.4,
            // GM radar runs at 15Hz
            radar_time_step: 0.0667,
            steer_control_type: SteerControlType::Torque,
        }
    }
}

/// Scale the reference yaw inertia by mass and wheelbase squared.
pub fn scale_rot_inertia(mass: f64, wheelbase: f64) -> f64 {
    reference::ROTATIONAL_INERTIA * mass * wheelbase.powi(2)
        / (reference::MASS * reference::WHEELBASE.powi(2))
}

/// Scale reference front/rear cornering stiffness by mass and CG position.
pub fn scale_tire_stiffness(
    mass: f64,
    wheelbase: f64,
    center_to_front: f64,
    tire_stiffness_factor: f64,
) -> (f64, f64) {
    let center_to_rear = wheelbase - center_to_front;
    let mass_ratio = mass / reference::MASS;

    let front = reference::TIRE_STIFFNESS_FRONT * tire_stiffness_factor * mass_ratio
        * (center_to_rear / wheelbase)
        / (reference::CENTER_TO_REAR / reference::WHEELBASE);
    let rear = reference::TIRE_STIFFNESS_REAR * tire_stiffness_factor * mass_ratio
        * (center_to_front / wheelbase)
        / (reference::CENTER_TO_FRONT / reference::WHEELBASE);

    (front, rear)
}
