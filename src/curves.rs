//! Longitudinal shaping curves consumed by the external control loop.
//!
//! Both curves are pure: no state, no side effects, total over finite input.

/// Below this speed (m/s) a creep offset is subtracted from the pedal floor.
pub const CREEP_SPEED: f64 = 2.68;
/// Creep offset at standstill, as a pedal fraction.
pub const CREEP_BRAKE_VALUE: f64 = 0.10;
/// Acceleration (m/s²) that maps to a full pedal command.
pub const PEDAL_FULL_SCALE_ACCEL: f64 = 4.8;
/// Acceleration/deceleration aggression. Lower is more aggressive.
pub const FOLLOW_AGGRESSION: f64 = 0.15;

/// Linear interpolation over breakpoints `bp`, clamped at both ends.
///
/// `bp` must be ascending and the same length as `v`. An empty table
/// evaluates to zero and a single-point table to its only value. A NaN `x`
/// on a wider table evaluates to NaN.
///
/// ```
/// use gm_interface::curves::interp;
///
/// assert_eq!(interp(5.0, &[0.0, 10.0], &[0.0, 1.0]), 0.5);
/// assert_eq!(interp(-3.0, &[10.0, 20.0], &[0.85, 1.0]), 0.85);
/// assert_eq!(interp(99.0, &[10.0, 20.0], &[0.85, 1.0]), 1.0);
/// ```
pub fn interp(x: f64, bp: &[f64], v: &[f64]) -> f64 {
    debug_assert_eq!(bp.len(), v.len(), "breakpoints and values differ in length");
    let n = bp.len().min(v.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return v[0];
    }
    if x <= bp[0] {
        return v[0];
    }
    if x >= bp[n - 1] {
        return v[n - 1];
    }

    let hi = bp[..n].iter().position(|&b| x < b).unwrap_or(n - 1).max(1);
    let lo = hi - 1;
    v[lo] + (x - bp[lo]) * (v[hi] - v[lo]) / (bp[hi] - bp[lo])
}

/// Creep compensation at `speed`: zero at or above [`CREEP_SPEED`], rising
/// linearly to [`CREEP_BRAKE_VALUE`] at standstill.
pub fn creep_brake(speed: f64) -> f64 {
    if speed >= CREEP_SPEED {
        0.0
    } else {
        (CREEP_SPEED - speed) / CREEP_SPEED * CREEP_BRAKE_VALUE
    }
}

/// Pedal command floor for a requested acceleration.
///
/// Keeps the car from creeping forward at low speed without an explicit
/// accelerator request, and is continuous across [`CREEP_SPEED`].
///
/// ```
/// use gm_interface::curves::pedal_floor;
///
/// assert_eq!(pedal_floor(4.8, 2.68), 1.0);
/// assert_eq!(pedal_floor(0.0, 0.0), -0.10);
/// ```
pub fn pedal_floor(accel: f64, speed: f64) -> f64 {
    accel / PEDAL_FULL_SCALE_ACCEL - creep_brake(speed)
}

/// Upper bound on the pedal command the control loop may request.
///
/// The baseline ceiling grows from 0.85 to 1.0 between 10 and 20 m/s so that
/// low-speed launches do not overshoot. It is damped when the ego speed is
/// at or above target, or when the car is accelerating harder than asked
/// while close to target. A large target acceleration raises the ceiling for
/// quicker restarts.
pub fn accel_override(a_ego: f64, a_target: f64, v_ego: f64, v_target: f64) -> f64 {
    let max_accel = interp(v_ego, &[10.0, 20.0], &[0.85, 1.0]);

    let e_a = a_ego - a_target;
    let e_v = v_ego - v_target;

    // only limit when v_ego is close to or above v_target
    let speed_limiter = interp(e_v, &[0.0, 0.5], &[1.0, 0.1]);
    let accel_limiter = interp(e_a, &[0.3, 1.1], &[1.0, 0.1])
        .max(interp(e_v, &[-1.0, 0.0], &[1.0, 0.0]));

    max_accel.max(a_target / FOLLOW_AGGRESSION) * speed_limiter.min(accel_limiter)
}
