//! Discrete-input edge detection.
//!
//! Compares this cycle's buttons and blinkers with the values remembered in
//! [`PersistedCycleState`] and reports each transition once. Two inputs
//! never surface as button events: the lane-keep button flips the persisted
//! lane-keep mode directly, and the distance button steps the persisted
//! follow level.

use crate::core::{AccState, ButtonEvent, ButtonType, CruiseButton, PersistedCycleState, RawSignalSnapshot};
use crate::translate::is_standstill;
use tracing::{debug, info};

/// Button events for one cycle plus the persisted state they imply.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeOutcome {
    pub buttons: Vec<ButtonEvent>,
    /// `prev` with button memory rolled forward and mode flags applied.
    pub persisted: PersistedCycleState,
}

/// Detect discrete-input edges between `prev` and `raw`.
///
/// Calling this again with the same `raw` and the returned `persisted`
/// yields no events.
pub fn detect_edges(raw: &RawSignalSnapshot, prev: &PersistedCycleState) -> EdgeOutcome {
    let mut next = prev.clone();
    let mut buttons = Vec::new();
    let cruise_enabled = raw.acc_state != AccState::Off;

    if raw.left_blinker != prev.prev_left_blinker {
        buttons.push(ButtonEvent::new(ButtonType::LeftBlinker, raw.left_blinker));
    }
    if raw.right_blinker != prev.prev_right_blinker {
        buttons.push(ButtonEvent::new(ButtonType::RightBlinker, raw.right_blinker));
    }

    if raw.cruise_buttons != prev.prev_cruise_buttons {
        let (held, pressed) = if raw.cruise_buttons.is_pressed() {
            (raw.cruise_buttons, true)
        } else {
            (prev.prev_cruise_buttons, false)
        };

        let kind = match held {
            // no speed bump when resuming from a stop
            CruiseButton::ResAccel if cruise_enabled && is_standstill(raw) => ButtonType::Unknown,
            CruiseButton::ResAccel => ButtonType::AccelCruise,
            CruiseButton::DecelSet => {
                if !cruise_enabled && !next.lane_keep_mode {
                    info!("Set pressed with cruise off, lane keep mode forced on");
                    next.lane_keep_mode = true;
                }
                ButtonType::DecelCruise
            }
            CruiseButton::Cancel => ButtonType::Cancel,
            CruiseButton::Main => ButtonType::MainToggle,
            CruiseButton::Init | CruiseButton::Unpress | CruiseButton::Other(_) => ButtonType::Unknown,
        };
        buttons.push(ButtonEvent::new(kind, pressed));
    }

    if cruise_enabled && raw.lka_button != 0 && raw.lka_button != prev.prev_lka_button {
        next.lane_keep_mode = !next.lane_keep_mode;
        info!(lane_keep_mode = next.lane_keep_mode, "Lane keep mode toggled");
    }

    if raw.distance_button != 0 && raw.distance_button != prev.prev_distance_button {
        next.follow_level = next.follow_level.closer();
        info!(follow_level = next.follow_level.get(), "Follow distance changed");
    }

    next.prev_left_blinker = raw.left_blinker;
    next.prev_right_blinker = raw.right_blinker;
    next.prev_cruise_buttons = raw.cruise_buttons;
    next.prev_lka_button = raw.lka_button;
    next.prev_distance_button = raw.distance_button;

    for button in &buttons {
        debug!(button = button.kind.name(), pressed = button.pressed, "Button edge");
    }

    EdgeOutcome {
        buttons,
        persisted: next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawSignalSnapshot {
        RawSignalSnapshot::nominal()
    }

    fn with_held(button: CruiseButton) -> PersistedCycleState {
        PersistedCycleState {
            prev_cruise_buttons: button,
            ..PersistedCycleState::default()
        }
    }

    #[test]
    fn no_change_no_events() {
        let outcome = detect_edges(&raw(), &PersistedCycleState::default());
        assert!(outcome.buttons.is_empty());
    }

    #[test]
    fn blinker_edges_report_new_value() {
        let mut r = raw();
        r.left_blinker = true;
        let on = detect_edges(&r, &PersistedCycleState::default());
        assert_eq!(on.buttons, vec![ButtonEvent::new(ButtonType::LeftBlinker, true)]);

        r.left_blinker = false;
        r.right_blinker = true;
        let swap = detect_edges(&r, &on.persisted);
        assert_eq!(
            swap.buttons,
            vec![
                ButtonEvent::new(ButtonType::LeftBlinker, false),
                ButtonEvent::new(ButtonType::RightBlinker, true),
            ]
        );
    }

    #[test]
    fn cruise_press_uses_new_code() {
        let mut r = raw();
        r.cruise_buttons = CruiseButton::Cancel;
        let outcome = detect_edges(&r, &PersistedCycleState::default());

        assert_eq!(outcome.buttons, vec![ButtonEvent::new(ButtonType::Cancel, true)]);
        assert_eq!(outcome.persisted.prev_cruise_buttons, CruiseButton::Cancel);
    }

    #[test]
    fn cruise_release_resolves_type_from_held_code() {
        let outcome = detect_edges(&raw(), &with_held(CruiseButton::Main));
        assert_eq!(outcome.buttons, vec![ButtonEvent::new(ButtonType::MainToggle, false)]);

        let outcome = detect_edges(&raw(), &with_held(CruiseButton::ResAccel));
        assert_eq!(outcome.buttons, vec![ButtonEvent::new(ButtonType::AccelCruise, false)]);
    }

    #[test]
    fn switching_codes_without_release_is_a_press_of_the_new_code() {
        let mut r = raw();
        r.cruise_buttons = CruiseButton::DecelSet;
        let outcome = detect_edges(&r, &with_held(CruiseButton::ResAccel));

        assert_eq!(outcome.buttons, vec![ButtonEvent::new(ButtonType::DecelCruise, true)]);
    }

    #[test]
    fn resume_at_standstill_with_cruise_active_is_suppressed() {
        let mut r = raw();
        r.acc_state = AccState::Active;
        r.v_ego_raw = 0.0;
        r.cruise_buttons = CruiseButton::ResAccel;

        let press = detect_edges(&r, &PersistedCycleState::default());
        assert_eq!(press.buttons, vec![ButtonEvent::new(ButtonType::Unknown, true)]);

        r.cruise_buttons = CruiseButton::Unpress;
        let release = detect_edges(&r, &press.persisted);
        assert_eq!(release.buttons, vec![ButtonEvent::new(ButtonType::Unknown, false)]);
    }

    #[test]
    fn resume_while_moving_is_accel() {
        let mut r = raw();
        r.acc_state = AccState::Active;
        r.v_ego_raw = 12.0;
        r.cruise_buttons = CruiseButton::ResAccel;

        let outcome = detect_edges(&r, &PersistedCycleState::default());
        assert_eq!(outcome.buttons, vec![ButtonEvent::new(ButtonType::AccelCruise, true)]);
    }

    #[test]
    fn set_with_cruise_off_forces_lane_keep_on() {
        let prev = PersistedCycleState {
            lane_keep_mode: false,
            ..PersistedCycleState::default()
        };
        let mut r = raw();
        r.cruise_buttons = CruiseButton::DecelSet;

        let outcome = detect_edges(&r, &prev);
        assert!(outcome.persisted.lane_keep_mode);
        assert_eq!(outcome.buttons, vec![ButtonEvent::new(ButtonType::DecelCruise, true)]);
    }

    #[test]
    fn set_with_cruise_on_leaves_lane_keep_alone() {
        let prev = PersistedCycleState {
            lane_keep_mode: false,
            ..PersistedCycleState::default()
        };
        let mut r = raw();
        r.acc_state = AccState::Active;
        r.cruise_buttons = CruiseButton::DecelSet;

        let outcome = detect_edges(&r, &prev);
        assert!(!outcome.persisted.lane_keep_mode);
    }

    #[test]
    fn init_code_is_unknown() {
        let mut r = raw();
        r.cruise_buttons = CruiseButton::Init;
        let outcome = detect_edges(&r, &PersistedCycleState::default());
        assert_eq!(outcome.buttons, vec![ButtonEvent::new(ButtonType::Unknown, true)]);
    }

    #[test]
    fn lane_keep_button_toggles_only_with_cruise_active() {
        let mut r = raw();
        r.lka_button = 1;
        let idle = detect_edges(&r, &PersistedCycleState::default());
        assert!(idle.persisted.lane_keep_mode);
        assert!(idle.buttons.is_empty());

        r.acc_state = AccState::Active;
        let toggled = detect_edges(&r, &PersistedCycleState::default());
        assert!(!toggled.persisted.lane_keep_mode);
        assert!(toggled.buttons.is_empty());

        // held button does not toggle again; release does not toggle either
        let held = detect_edges(&r, &toggled.persisted);
        assert!(!held.persisted.lane_keep_mode);
        r.lka_button = 0;
        let released = detect_edges(&r, &held.persisted);
        assert!(!released.persisted.lane_keep_mode);
    }

    #[test]
    fn distance_button_steps_on_press_only() {
        let mut r = raw();
        r.distance_button = 1;
        let pressed = detect_edges(&r, &PersistedCycleState::default());
        assert_eq!(pressed.persisted.follow_level.get(), 1);

        r.distance_button = 0;
        let released = detect_edges(&r, &pressed.persisted);
        assert_eq!(released.persisted.follow_level.get(), 1);

        r.distance_button = 1;
        let wrapped = detect_edges(&r, &released.persisted);
        assert_eq!(wrapped.persisted.follow_level.get(), 3);
    }

    #[test]
    fn edges_are_idempotent_once_rolled_forward() {
        let mut r = raw();
        r.left_blinker = true;
        r.cruise_buttons = CruiseButton::Main;
        r.distance_button = 1;

        let first = detect_edges(&r, &PersistedCycleState::default());
        assert_eq!(first.buttons.len(), 2);

        let second = detect_edges(&r, &first.persisted);
        assert!(second.buttons.is_empty());
        assert_eq!(second.persisted, first.persisted);
    }
}
