//! Recommendation rules engine
//!
//! Rules are declarative objects: a predicate over raw signals plus an
//! emission template. A single engine loop evaluates each section's rule
//! set in registration order, so every rule is individually testable and
//! no rule shares mutable state with another.
//!
//! Contract: a rule never fails on missing keys. An absent metric means
//! "cannot evaluate, skip", and an engine run with no firing rules
//! returns an empty list, never an absent one.

mod content;
mod performance;
mod seo;
mod technical;

pub use content::content_rules;
pub use performance::performance_rules;
pub use seo::seo_rules;
pub use technical::technical_rules;

use crate::models::{CategoryScore, Recommendation, Section};
use serde_json::Value;
use tracing::debug;

/// Inputs available to a rule evaluation: one section's raw signals plus
/// any category scores already computed for it.
pub struct RuleContext<'a> {
    pub raw: &'a Value,
    pub scores: &'a [CategoryScore],
}

impl<'a> RuleContext<'a> {
    pub fn new(raw: &'a Value, scores: &'a [CategoryScore]) -> Self {
        Self { raw, scores }
    }
}

/// Trait for all recommendation rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Evaluate the rule against one section's signals.
    ///
    /// Returns every recommendation the rule emits; most rules emit zero
    /// or one, a few (accessibility checks) emit one per failing signal.
    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation>;
}

/// Evaluates a section's rule set in registration order
pub struct RuleEngine {
    section: Section,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    pub fn new(section: Section, rules: Vec<Box<dyn Rule>>) -> Self {
        Self { section, rules }
    }

    /// Build the engine for a section with its standard rule set.
    pub fn for_section(section: Section) -> Self {
        let rules = match section {
            Section::Seo => seo_rules(),
            Section::Performance => performance_rules(),
            Section::Technical => technical_rules(),
            Section::Content => content_rules(),
        };
        Self::new(section, rules)
    }

    /// Run every rule and collect recommendations in discovery order.
    pub fn run(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        for rule in &self.rules {
            let emitted = rule.evaluate(ctx);
            if !emitted.is_empty() {
                debug!(
                    section = self.section.as_str(),
                    rule = rule.name(),
                    count = emitted.len(),
                    "rule fired"
                );
            }
            recommendations.extend(emitted);
        }
        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use serde_json::json;

    struct AlwaysFires;
    impl Rule for AlwaysFires {
        fn name(&self) -> &'static str {
            "always-fires"
        }
        fn evaluate(&self, _ctx: &RuleContext) -> Vec<Recommendation> {
            vec![Recommendation {
                issue: "Test issue".into(),
                priority: Priority::Low,
                recommendation: "Do the thing".into(),
                impact: "None".into(),
                ..Default::default()
            }]
        }
    }

    struct NeverFires;
    impl Rule for NeverFires {
        fn name(&self) -> &'static str {
            "never-fires"
        }
        fn evaluate(&self, _ctx: &RuleContext) -> Vec<Recommendation> {
            Vec::new()
        }
    }

    #[test]
    fn test_engine_preserves_registration_order() {
        let engine = RuleEngine::new(
            Section::Seo,
            vec![Box::new(NeverFires), Box::new(AlwaysFires), Box::new(AlwaysFires)],
        );
        let raw = json!({});
        let recs = engine.run(&RuleContext::new(&raw, &[]));
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn test_engine_empty_output_is_empty_vec() {
        let engine = RuleEngine::new(Section::Seo, vec![Box::new(NeverFires)]);
        let raw = json!({});
        assert!(engine.run(&RuleContext::new(&raw, &[])).is_empty());
    }

    #[test]
    fn test_all_section_engines_handle_empty_signals() {
        for section in Section::ORDERED {
            let engine = RuleEngine::for_section(section);
            let raw = json!({});
            // Must not panic on completely absent signals.
            let _ = engine.run(&RuleContext::new(&raw, &[]));
        }
    }
}
