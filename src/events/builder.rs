//! Builder API for assembling rule sets.

use crate::core::{Event, EventKind, Severity};
use crate::events::context::RuleContext;
use crate::events::rules::{EventRule, RuleSet};

/// Builder for an ordered [`RuleSet`].
pub struct RuleSetBuilder {
    name: &'static str,
    rules: Vec<EventRule>,
}

impl RuleSetBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    /// Emit `kind` with `tags` whenever `predicate` holds.
    pub fn when<F>(mut self, kind: EventKind, tags: &[Severity], predicate: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        let tags = tags.to_vec();
        self.rules.push(Box::new(move |ctx: &RuleContext<'_>| {
            if predicate(ctx) {
                vec![Event::new(kind, &tags)]
            } else {
                Vec::new()
            }
        }));
        self
    }

    /// Add a rule that may emit several events.
    pub fn rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> Vec<Event> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn build(self) -> RuleSet {
        RuleSet {
            name: self.name,
            rules: self.rules,
        }
    }
}
