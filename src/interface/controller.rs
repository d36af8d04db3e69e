//! Seam to the external command builder.

use crate::core::CanonicalState;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Actuators {
    pub gas: f64,
    pub brake: f64,
    pub steer: f64,
    pub steer_angle: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualAlert {
    #[default]
    None,
    FcwAlert,
    SteerRequired,
    BrakePressed,
    WrongGear,
    SeatbeltUnbuckled,
    SpeedTooHigh,
    LdwLeft,
    LdwRight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HudControl {
    pub set_speed: f64,
    pub lanes_visible: bool,
    pub lead_visible: bool,
    pub visual_alert: VisualAlert,
}

/// What the control loop asks for this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlCommand {
    /// Includes pre-enable.
    pub enabled: bool,
    pub actuators: Actuators,
    pub hud: HudControl,
}

/// Everything the controller needs to build this cycle's outbound commands.
#[derive(Clone, Copy, Debug)]
pub struct CommandContext<'a> {
    pub enabled: bool,
    pub state: &'a CanonicalState,
    pub frame: u64,
    pub actuators: &'a Actuators,
    pub hud_set_speed: f64,
    pub lanes_visible: bool,
    pub lead_visible: bool,
    pub visual_alert: VisualAlert,
}

/// Turns an actuator request into low-level outbound commands.
pub trait Controller {
    type Command;

    fn build_commands(&mut self, context: &CommandContext<'_>) -> Vec<Self::Command>;

    /// Whether the last steering command was rate limited.
    fn steer_rate_limited(&self) -> bool {
        false
    }
}
