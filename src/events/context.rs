//! Inputs visible to event rules.

use crate::core::{ButtonEvent, CanonicalState, PersistedCycleState};
use crate::params::ParamTable;

/// Everything a rule may look at for one cycle.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub state: &'a CanonicalState,
    /// Persisted state as it stood before this cycle.
    pub prev: &'a PersistedCycleState,
    pub buttons: &'a [ButtonEvent],
    pub params: &'a ParamTable,
    /// Cruise set speed currently shown on the HUD.
    pub hud_set_speed: f64,
}

impl RuleContext<'_> {
    /// Gas pressed this cycle but not the last.
    pub fn gas_rising_edge(&self) -> bool {
        self.state.gas_pressed && !self.prev.prev_gas_pressed
    }

    /// Native cruise engaged this cycle but not the last.
    pub fn acc_rising_edge(&self) -> bool {
        self.state.faults.acc_active && !self.prev.prev_acc_active
    }
}
