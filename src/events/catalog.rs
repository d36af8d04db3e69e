//! The GM rule table.

use crate::core::{ButtonType, Event, EventKind, Gear, Severity};
use crate::events::builder::RuleSetBuilder;
use crate::events::context::RuleContext;
use crate::events::rules::RuleSet;
use crate::params::ParamTable;

use Severity::*;

/// The ECM faults if resume enables while the set speed is at or above this.
pub const MAX_RESUME_SET_SPEED: f64 = 70.0;

/// Rule table for a variant: shared rules, then the cruise-capability branch.
pub fn rules_for(params: &ParamTable) -> RuleSet {
    if params.supports_native_full_range_cruise {
        native_cruise_rules()
    } else {
        standard_rules()
    }
}

fn shared(builder: RuleSetBuilder) -> RuleSetBuilder {
    builder
        .when(EventKind::ManualSteeringRequired, &[Warning], |ctx| {
            !ctx.state.lane_keep_mode
        })
        .when(
            EventKind::SteerUnavailable,
            &[NoEntry, ImmediateDisable, Permanent],
            |ctx| ctx.state.faults.steer_error,
        )
        .when(EventKind::SteerTempUnavailable, &[NoEntry, Warning], |ctx| {
            ctx.state.faults.steer_not_allowed
        })
        .when(EventKind::DoorOpen, &[NoEntry, SoftDisable], |ctx| {
            ctx.state.door_open
        })
        .when(EventKind::SeatbeltNotLatched, &[NoEntry, SoftDisable], |ctx| {
            ctx.state.seatbelt_unlatched
        })
}

/// Variants whose factory cruise handles stop-and-go: follow the PCM.
pub fn native_cruise_rules() -> RuleSet {
    shared(RuleSetBuilder::new("native_cruise"))
        .when(EventKind::PcmEnable, &[Enable], |ctx| ctx.acc_rising_edge())
        .when(EventKind::PcmDisable, &[UserDisable], |ctx| {
            !ctx.state.faults.acc_active
        })
        .build()
}

/// Variants where engagement is driven by the cruise stalk buttons.
pub fn standard_rules() -> RuleSet {
    shared(RuleSetBuilder::new("standard"))
        .when(
            EventKind::BrakeUnavailable,
            &[NoEntry, ImmediateDisable, Permanent],
            |ctx| ctx.state.faults.brake_error,
        )
        .when(EventKind::WrongGear, &[NoEntry, SoftDisable], |ctx| {
            !ctx.state.gear_valid
        })
        .when(EventKind::EspDisabled, &[NoEntry, SoftDisable], |ctx| {
            ctx.state.faults.esp_disabled
        })
        .when(EventKind::WrongCarMode, &[NoEntry, UserDisable], |ctx| {
            !ctx.state.main_on
        })
        .when(EventKind::ReverseGear, &[NoEntry, ImmediateDisable], |ctx| {
            ctx.state.gear == Gear::Reverse
        })
        .when(EventKind::SpeedTooLow, &[NoEntry], |ctx| {
            ctx.state.v_ego < ctx.params.min_enable_speed
        })
        .when(EventKind::ParkBrake, &[NoEntry, UserDisable], |ctx| {
            ctx.state.faults.park_brake
        })
        // disable on gas rising edge or whenever the brake is held
        .when(EventKind::PedalPressed, &[NoEntry, UserDisable], |ctx| {
            ctx.gas_rising_edge() || ctx.state.brake_pressed
        })
        .when(EventKind::PedalPressed, &[PreEnable], |ctx| {
            ctx.state.gas_pressed
        })
        .when(EventKind::ResumeRequired, &[Warning], |ctx| {
            ctx.state.cruise_state.standstill
        })
        .rule(button_events)
        .build()
}

/// Enable on accel/decel release, disable on cancel/main press.
fn button_events(ctx: &RuleContext<'_>) -> Vec<Event> {
    let mut events = Vec::new();
    for button in ctx.buttons {
        if button.is_release_of(ButtonType::AccelCruise)
            && ctx.hud_set_speed > 0.0
            && ctx.hud_set_speed < MAX_RESUME_SET_SPEED
        {
            events.push(Event::new(EventKind::ButtonEnable, &[Enable]));
        }
        if button.is_release_of(ButtonType::DecelCruise) {
            events.push(Event::new(EventKind::ButtonEnable, &[Enable]));
        }
        if button.is_press_of(ButtonType::Cancel) {
            events.push(Event::new(EventKind::ButtonCancel, &[UserDisable]));
        }
        // the ECM forgets its set speed on main off; keep the HUD in sync
        if button.is_press_of(ButtonType::MainToggle) {
            events.push(Event::new(EventKind::ButtonCancel, &[ResetVCruise, UserDisable]));
        }
    }
    events
}
