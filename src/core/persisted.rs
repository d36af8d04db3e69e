//! Memory carried from one cycle to the next.

use super::signals::CruiseButton;
use serde::{Deserialize, Serialize};

/// Following-distance setting shown on the HUD, cycling 3 → 2 → 1 → 3.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FollowLevel(u8);

impl FollowLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// Returns `None` outside `1..=3`.
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// One step closer, wrapping from the closest setting back to the farthest.
    pub fn closer(&self) -> Self {
        if self.0 <= Self::MIN {
            Self(Self::MAX)
        } else {
            Self(self.0 - 1)
        }
    }
}

impl Default for FollowLevel {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for FollowLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| format!("follow level {level} outside 1..=3"))
    }
}

impl From<FollowLevel> for u8 {
    fn from(level: FollowLevel) -> Self {
        level.0
    }
}

/// State threaded explicitly through every orchestrator call.
///
/// Owned by exactly one session and replaced, never shared, once per cycle.
/// The `prev_*` fields hold last cycle's raw inputs for edge detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedCycleState {
    pub prev_left_blinker: bool,
    pub prev_right_blinker: bool,
    pub prev_cruise_buttons: CruiseButton,
    pub prev_lka_button: u8,
    pub prev_distance_button: u8,
    pub prev_gas_pressed: bool,
    pub prev_brake_pressed: bool,
    pub prev_acc_active: bool,
    pub lane_keep_mode: bool,
    pub follow_level: FollowLevel,
    pub frame: u64,
}

impl Default for PersistedCycleState {
    fn default() -> Self {
        Self {
            prev_left_blinker: false,
            prev_right_blinker: false,
            prev_cruise_buttons: CruiseButton::Unpress,
            prev_lka_button: 0,
            prev_distance_button: 0,
            prev_gas_pressed: false,
            prev_brake_pressed: false,
            prev_acc_active: false,
            lane_keep_mode: true,
            follow_level: FollowLevel::default(),
            frame: 0,
        }
    }
}

impl PersistedCycleState {
    pub fn with_follow_level(mut self, level: FollowLevel) -> Self {
        self.follow_level = level;
        self
    }
}
