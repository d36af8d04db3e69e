//! Safety events and button events emitted each cycle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

named_enum! {
    /// Severity tag attached to an [`Event`].
    ///
    /// Tags are interpreted by the external enable/disable state machine;
    /// nothing in this crate acts on them.
    pub enum Severity {
        NoEntry => "noEntry",
        Warning => "warning",
        SoftDisable => "softDisable",
        ImmediateDisable => "immediateDisable",
        Permanent => "permanent",
        UserDisable => "userDisable",
        Enable => "enable",
        PreEnable => "preEnable",
        ResetVCruise => "resetVCruise",
    }
}

named_enum! {
    /// Reason code of an [`Event`].
    pub enum EventKind {
        ManualSteeringRequired => "manualSteeringRequired",
        SteerUnavailable => "steerUnavailable",
        SteerTempUnavailable => "steerTempUnavailable",
        DoorOpen => "doorOpen",
        SeatbeltNotLatched => "seatbeltNotLatched",
        PcmEnable => "pcmEnable",
        PcmDisable => "pcmDisable",
        BrakeUnavailable => "brakeUnavailable",
        WrongGear => "wrongGear",
        EspDisabled => "espDisabled",
        WrongCarMode => "wrongCarMode",
        ReverseGear => "reverseGear",
        SpeedTooLow => "speedTooLow",
        ParkBrake => "parkBrake",
        PedalPressed => "pedalPressed",
        ResumeRequired => "resumeRequired",
        ButtonEnable => "buttonEnable",
        ButtonCancel => "buttonCancel",
    }
}

named_enum! {
    /// Semantic type of a discrete-input transition.
    pub enum ButtonType {
        LeftBlinker => "leftBlinker",
        RightBlinker => "rightBlinker",
        AccelCruise => "accelCruise",
        DecelCruise => "decelCruise",
        Cancel => "cancel",
        MainToggle => "mainToggle",
        Unknown => "unknown",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event {0} carries no severity tags")]
    Untagged(EventKind),
}

/// A tagged safety/control signal for the external control loop.
///
/// The tag set is never empty: [`Event::new`] is the only constructor and
/// deserialized events are rejected without a tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    pub kind: EventKind,
    tags: BTreeSet<Severity>,
}

#[derive(Deserialize)]
struct EventRecord {
    kind: EventKind,
    tags: BTreeSet<Severity>,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        if record.tags.is_empty() {
            return Err(EventError::Untagged(record.kind));
        }
        Ok(Self {
            kind: record.kind,
            tags: record.tags,
        })
    }
}

impl Event {
    pub fn new(kind: EventKind, tags: &[Severity]) -> Self {
        debug_assert!(!tags.is_empty(), "event {kind} created without tags");
        Self {
            kind,
            tags: tags.iter().copied().collect(),
        }
    }

    pub fn has(&self, tag: Severity) -> bool {
        self.tags.contains(&tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = Severity> + '_ {
        self.tags.iter().copied()
    }
}

/// A press or release of a discrete input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonEvent {
    #[serde(rename = "type")]
    pub kind: ButtonType,
    pub pressed: bool,
}

impl ButtonEvent {
    pub fn new(kind: ButtonType, pressed: bool) -> Self {
        Self { kind, pressed }
    }

    pub fn is_release_of(&self, kind: ButtonType) -> bool {
        self.kind == kind && !self.pressed
    }

    pub fn is_press_of(&self, kind: ButtonType) -> bool {
        self.kind == kind && self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_tags_are_a_set() {
        let event = Event::new(
            EventKind::PedalPressed,
            &[Severity::UserDisable, Severity::NoEntry, Severity::NoEntry],
        );

        assert_eq!(event.tags().count(), 2);
        assert!(event.has(Severity::NoEntry));
        assert!(event.has(Severity::UserDisable));
        assert!(!event.has(Severity::Enable));
    }

    #[test]
    fn event_serializes_with_wire_names() {
        let event = Event::new(EventKind::ButtonCancel, &[Severity::ResetVCruise]);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"buttonCancel","tags":["resetVCruise"]}"#);
    }

    #[test]
    fn event_deserializes_with_tags() {
        let event: Event =
            serde_json::from_str(r#"{"kind":"doorOpen","tags":["noEntry","softDisable"]}"#).unwrap();
        assert_eq!(
            event,
            Event::new(EventKind::DoorOpen, &[Severity::NoEntry, Severity::SoftDisable])
        );
    }

    #[test]
    fn untagged_event_is_rejected() {
        let err = serde_json::from_str::<Event>(r#"{"kind":"doorOpen","tags":[]}"#).unwrap_err();
        assert!(err.to_string().contains("doorOpen carries no severity tags"));
    }

    #[test]
    fn button_event_press_and_release() {
        let press = ButtonEvent::new(ButtonType::Cancel, true);
        let release = ButtonEvent::new(ButtonType::Cancel, false);

        assert!(press.is_press_of(ButtonType::Cancel));
        assert!(!press.is_release_of(ButtonType::Cancel));
        assert!(release.is_release_of(ButtonType::Cancel));
        assert!(!release.is_press_of(ButtonType::MainToggle));
    }
}
