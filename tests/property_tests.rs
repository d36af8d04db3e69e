//! Property-based tests for the cycle core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use gm_interface::buttons::detect_edges;
use gm_interface::core::{
    AccState, CruiseButton, EventKind, FollowLevel, Gear, PersistedCycleState, RawSignalSnapshot,
};
use gm_interface::curves::{accel_override, creep_brake, interp, pedal_floor};
use gm_interface::interface::{CarInterface, CommandContext, Controller};
use gm_interface::params::Variant;
use proptest::prelude::*;

struct Silent;

impl Controller for Silent {
    type Command = ();

    fn build_commands(&mut self, _context: &CommandContext<'_>) -> Vec<()> {
        Vec::new()
    }
}

fn no_yaw(_angle: f64, _speed: f64) -> f64 {
    0.0
}

fn car(variant: Variant) -> CarInterface<fn(f64, f64) -> f64, Silent> {
    CarInterface::new(variant.params(), no_yaw as fn(f64, f64) -> f64, Silent)
}

const NATIVE_ONLY: &[EventKind] = &[EventKind::PcmEnable, EventKind::PcmDisable];

const STANDARD_ONLY: &[EventKind] = &[
    EventKind::BrakeUnavailable,
    EventKind::WrongGear,
    EventKind::EspDisabled,
    EventKind::WrongCarMode,
    EventKind::ReverseGear,
    EventKind::SpeedTooLow,
    EventKind::ParkBrake,
    EventKind::PedalPressed,
    EventKind::ResumeRequired,
    EventKind::ButtonEnable,
    EventKind::ButtonCancel,
];

prop_compose! {
    fn arbitrary_button()(code in 0..8u8) -> CruiseButton {
        CruiseButton::from_code(code)
    }
}

prop_compose! {
    fn arbitrary_acc_state()(code in 0..5u8) -> AccState {
        AccState::from_code(code)
    }
}

prop_compose! {
    fn arbitrary_gear()(variant in 0..6u8) -> Gear {
        match variant {
            0 => Gear::Unknown,
            1 => Gear::Park,
            2 => Gear::Drive,
            3 => Gear::Neutral,
            4 => Gear::Reverse,
            _ => Gear::Low,
        }
    }
}

prop_compose! {
    fn arbitrary_inputs()(
        cruise_buttons in arbitrary_button(),
        lka_button in 0..2u8,
        distance_button in 0..2u8,
        blinkers in (any::<bool>(), any::<bool>()),
        pedals in (any::<bool>(), any::<bool>()),
        acc_state in arbitrary_acc_state(),
        acc_active in any::<bool>(),
    ) -> RawSignalSnapshot {
        RawSignalSnapshot {
            cruise_buttons,
            lka_button,
            distance_button,
            left_blinker: blinkers.0,
            right_blinker: blinkers.1,
            gas_pressed: pedals.0,
            brake_pressed: pedals.1,
            acc_state,
            acc_active,
            ..RawSignalSnapshot::nominal()
        }
    }
}

prop_compose! {
    fn arbitrary_raw()(
        inputs in arbitrary_inputs(),
        valid in any::<bool>(),
        v_ego in 0.0..40.0f64,
        doors_closed in any::<bool>(),
        seatbelt_latched in any::<bool>(),
        gear in arbitrary_gear(),
        gear_valid in any::<bool>(),
        faults in prop::array::uniform5(any::<bool>()),
        main_on in any::<bool>(),
    ) -> RawSignalSnapshot {
        RawSignalSnapshot {
            valid,
            v_ego,
            v_ego_raw: v_ego,
            doors_closed,
            seatbelt_latched,
            gear,
            gear_valid,
            steer_error: faults[0],
            steer_not_allowed: faults[1],
            brake_error: faults[2],
            esp_disabled: faults[3],
            park_brake: faults[4],
            main_on,
            ..inputs
        }
    }
}

prop_compose! {
    fn arbitrary_persisted()(
        prev in arbitrary_inputs(),
        lane_keep_mode in any::<bool>(),
        level in 1..=3u8,
        frame in any::<u32>(),
    ) -> PersistedCycleState {
        PersistedCycleState {
            prev_left_blinker: prev.left_blinker,
            prev_right_blinker: prev.right_blinker,
            prev_cruise_buttons: prev.cruise_buttons,
            prev_lka_button: prev.lka_button,
            prev_distance_button: prev.distance_button,
            prev_gas_pressed: prev.gas_pressed,
            prev_brake_pressed: prev.brake_pressed,
            prev_acc_active: prev.acc_active,
            lane_keep_mode,
            follow_level: FollowLevel::new(level).unwrap(),
            frame: u64::from(frame),
        }
    }
}

proptest! {
    #[test]
    fn accel_override_never_exceeds_baseline_at_zero_error(
        a in -5.0..5.0f64,
        s in 0.0..50.0f64,
    ) {
        let ceiling = interp(s, &[10.0, 20.0], &[0.85, 1.0]).max(a / 0.15);
        prop_assert!(accel_override(a, a, s, s) <= ceiling + 1e-12);
    }

    #[test]
    fn creep_offset_is_bounded(speed in 0.0..50.0f64) {
        let creep = creep_brake(speed);
        prop_assert!((0.0..=0.10 + 1e-12).contains(&creep));
    }

    #[test]
    fn creep_offset_is_non_increasing_through_rollback(s1 in -1.0..50.0f64, s2 in -1.0..50.0f64) {
        let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        prop_assert!(creep_brake(lo) + 1e-12 >= creep_brake(hi));
        prop_assert!(creep_brake(lo) >= 0.0);
    }

    #[test]
    fn pedal_floor_is_monotonic_in_speed(accel in -3.0..3.0f64, s1 in 0.0..10.0f64, s2 in 0.0..10.0f64) {
        let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        prop_assert!(pedal_floor(accel, lo) <= pedal_floor(accel, hi) + 1e-12);
    }

    #[test]
    fn edge_detection_is_idempotent(raw in arbitrary_raw(), prev in arbitrary_persisted()) {
        let first = detect_edges(&raw, &prev);
        let second = detect_edges(&raw, &first.persisted);

        prop_assert!(second.buttons.is_empty());
        prop_assert_eq!(second.persisted, first.persisted);
    }

    #[test]
    fn follow_level_cycles_on_presses(presses in 1..20usize) {
        let mut persisted = PersistedCycleState::default()
            .with_follow_level(FollowLevel::new(3).unwrap());
        let mut raw = RawSignalSnapshot::nominal();
        let mut seen = Vec::new();

        for _ in 0..presses {
            raw.distance_button = 1;
            persisted = detect_edges(&raw, &persisted).persisted;
            seen.push(persisted.follow_level.get());
            raw.distance_button = 0;
            persisted = detect_edges(&raw, &persisted).persisted;
        }

        for (i, level) in seen.iter().enumerate() {
            prop_assert!((1..=3).contains(level));
            prop_assert_eq!(*level, [2, 1, 3][i % 3]);
        }
    }

    #[test]
    fn native_variant_never_emits_standard_events(
        raw in arbitrary_raw(),
        prev in arbitrary_persisted(),
        hud in 0.0..100.0f64,
    ) {
        let (state, _) = car(Variant::CadillacCt6).update(&prev, &raw, hud);
        for event in &state.events {
            prop_assert!(!STANDARD_ONLY.contains(&event.kind), "unexpected {}", event.kind);
        }
    }

    #[test]
    fn standard_variant_never_emits_native_events(
        raw in arbitrary_raw(),
        prev in arbitrary_persisted(),
        hud in 0.0..100.0f64,
    ) {
        let (state, _) = car(Variant::Malibu).update(&prev, &raw, hud);
        for event in &state.events {
            prop_assert!(!NATIVE_ONLY.contains(&event.kind), "unexpected {}", event.kind);
        }
    }

    #[test]
    fn every_event_is_tagged(raw in arbitrary_raw(), prev in arbitrary_persisted()) {
        for variant in [Variant::Volt, Variant::CadillacCt6] {
            let (state, _) = car(variant).update(&prev, &raw, 40.0);
            for event in &state.events {
                prop_assert!(event.tags().count() > 0);
            }
        }
    }

    #[test]
    fn update_is_deterministic(raw in arbitrary_raw(), prev in arbitrary_persisted()) {
        let car = car(Variant::Volt);
        let first = car.update(&prev, &raw, 30.0);
        let second = car.update(&prev, &raw, 30.0);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn update_never_advances_frame(raw in arbitrary_raw(), prev in arbitrary_persisted()) {
        let (_, next) = car(Variant::Volt).update(&prev, &raw, 0.0);
        prop_assert_eq!(next.frame, prev.frame);
    }
}
