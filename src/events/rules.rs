//! Ordered rule table evaluated in full every cycle.

use crate::core::Event;
use crate::events::context::RuleContext;
use tracing::debug;

/// A rule inspects the context and emits zero or more events.
pub type EventRule = Box<dyn Fn(&RuleContext<'_>) -> Vec<Event> + Send + Sync>;

/// Ordered set of event rules.
///
/// Every rule runs every cycle; there is no short-circuit on the first
/// match. Events appear in rule order, and within a rule in the order the
/// rule emits them.
pub struct RuleSet {
    pub(crate) name: &'static str,
    pub(crate) rules: Vec<EventRule>,
}

impl RuleSet {
    pub fn evaluate(&self, context: &RuleContext<'_>) -> Vec<Event> {
        let events: Vec<Event> = self.rules.iter().flat_map(|rule| rule(context)).collect();

        if !events.is_empty() {
            debug!(
                rule_set = self.name,
                count = events.len(),
                kinds = ?events.iter().map(|e| e.kind.name()).collect::<Vec<_>>(),
                "Events derived"
            );
        }
        events
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .finish()
    }
}
