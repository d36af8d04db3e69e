//! Safety and control event derivation.
//!
//! Events are derived by an ordered, declarative rule table. Rules never
//! short-circuit each other: every rule is evaluated every cycle and each
//! match appends its events. The table is selected once per variant from
//! [`ParamTable::supports_native_full_range_cruise`], so rules of the other
//! branch can never fire.
//!
//! # Example
//!
//! ```rust
//! use gm_interface::core::{CanonicalState, EventKind, PersistedCycleState, Severity};
//! use gm_interface::events::RuleSetBuilder;
//! use gm_interface::events::RuleContext;
//! use gm_interface::params::Variant;
//!
//! let rules = RuleSetBuilder::new("custom")
//!     .when(EventKind::DoorOpen, &[Severity::NoEntry], |ctx| ctx.state.door_open)
//!     .build();
//!
//! let state = CanonicalState { door_open: true, ..CanonicalState::default() };
//! let prev = PersistedCycleState::default();
//! let params = Variant::Malibu.params();
//! let ctx = RuleContext { state: &state, prev: &prev, buttons: &[], params: &params, hud_set_speed: 0.0 };
//!
//! assert_eq!(rules.evaluate(&ctx)[0].kind, EventKind::DoorOpen);
//! ```

pub mod builder;
pub mod catalog;
pub mod context;
pub mod rules;

pub use builder::RuleSetBuilder;
pub use catalog::{native_cruise_rules, rules_for, standard_rules};
pub use context::RuleContext;
pub use rules::{EventRule, RuleSet};

use crate::core::{ButtonEvent, CanonicalState, Event, PersistedCycleState};
use crate::params::ParamTable;

/// Derive this cycle's events.
///
/// Pure: builds the variant's rule table and evaluates it. Long-lived
/// callers should hold on to [`rules_for`] instead of rebuilding it.
pub fn derive_events(
    state: &CanonicalState,
    prev: &PersistedCycleState,
    buttons: &[ButtonEvent],
    params: &ParamTable,
    hud_set_speed: f64,
) -> Vec<Event> {
    let context = RuleContext {
        state,
        prev,
        buttons,
        params,
        hud_set_speed,
    };
    rules_for(params).evaluate(&context)
}
