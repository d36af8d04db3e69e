//! Per-cycle orchestration: translate, detect edges, derive events.

use crate::buttons::detect_edges;
use crate::core::{CanonicalState, PersistedCycleState, RawSignalSnapshot};
use crate::events::{rules_for, RuleContext, RuleSet};
use crate::interface::controller::{CommandContext, ControlCommand, Controller};
use crate::params::ParamTable;
use crate::translate::{translate, VehicleModel};
use tracing::debug;

/// HUD set speeds above this are sent to the controller as zero.
pub const DEFAULT_MAX_HUD_SET_SPEED: f64 = 70.0;

/// Orchestrator for one vehicle.
///
/// Holds only immutable configuration plus the external collaborators;
/// cycle memory is threaded through [`PersistedCycleState`] values.
pub struct CarInterface<M, C> {
    params: ParamTable,
    rules: RuleSet,
    model: M,
    controller: C,
    max_hud_set_speed: f64,
}

impl<M: VehicleModel, C: Controller> CarInterface<M, C> {
    pub fn new(params: ParamTable, model: M, controller: C) -> Self {
        let rules = rules_for(&params);
        Self {
            params,
            rules,
            model,
            controller,
            max_hud_set_speed: DEFAULT_MAX_HUD_SET_SPEED,
        }
    }

    pub fn with_max_hud_set_speed(mut self, speed: f64) -> Self {
        self.max_hud_set_speed = speed;
        self
    }

    pub fn params(&self) -> &ParamTable {
        &self.params
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Run one cycle: translate, detect edges, derive events.
    ///
    /// Returns this cycle's state and the persisted state for the next
    /// call. Never fails; an invalid bus only clears `bus_valid`.
    pub fn update(
        &self,
        prev: &PersistedCycleState,
        raw: &RawSignalSnapshot,
        hud_set_speed: f64,
    ) -> (CanonicalState, PersistedCycleState) {
        let mut state = translate(raw, prev, &self.model);
        state.steering_rate_limited = self.controller.steer_rate_limited();

        let edges = detect_edges(raw, prev);
        state.lane_keep_mode = edges.persisted.lane_keep_mode;
        state.follow_level = edges.persisted.follow_level;

        let events = self.rules.evaluate(&RuleContext {
            state: &state,
            prev,
            buttons: &edges.buttons,
            params: &self.params,
            hud_set_speed,
        });
        state.button_events = edges.buttons;
        state.events = events;

        let mut next = edges.persisted;
        next.prev_acc_active = raw.acc_active;
        next.prev_gas_pressed = state.gas_pressed;
        next.prev_brake_pressed = state.brake_pressed;

        (state, next)
    }

    /// Forward an actuator request to the controller.
    ///
    /// Engagement is dropped while the driver presses the gas, since the PCM
    /// faults if a cruise command overlaps user gas. The returned persisted
    /// state has its frame counter advanced.
    pub fn apply(
        &mut self,
        command: &ControlCommand,
        state: &CanonicalState,
        persisted: &PersistedCycleState,
    ) -> (Vec<C::Command>, PersistedCycleState) {
        let enabled = command.enabled && !state.gas_pressed;
        let hud_set_speed = if command.hud.set_speed > self.max_hud_set_speed {
            0.0
        } else {
            command.hud.set_speed
        };

        let commands = self.controller.build_commands(&CommandContext {
            enabled,
            state,
            frame: persisted.frame,
            actuators: &command.actuators,
            hud_set_speed,
            lanes_visible: command.hud.lanes_visible,
            lead_visible: command.hud.lead_visible,
            visual_alert: command.hud.visual_alert,
        });
        debug!(frame = persisted.frame, enabled, sent = commands.len(), "Commands built");

        let mut next = persisted.clone();
        next.frame += 1;
        (commands, next)
    }
}
