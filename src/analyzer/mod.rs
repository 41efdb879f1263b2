//! Section analyzer
//!
//! Binds one collector's raw output to the matching scorers and rule set,
//! then optionally asks the generative-text collaborator for a prose
//! narrative. Narrative failure never escapes `analyze`: it degrades to a
//! literal placeholder string.

pub mod prompts;

use crate::ai::TextCompleter;
use crate::models::{
    clamp_score, CategoryScore, Section, SectionResult, NARRATIVE_UNAVAILABLE,
};
use crate::rules::{RuleContext, RuleEngine};
use crate::scoring;
use crate::signals;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-section orchestration: score, evaluate rules, narrate.
pub struct SectionAnalyzer {
    completer: Option<Arc<dyn TextCompleter>>,
}

impl SectionAnalyzer {
    pub fn new(completer: Option<Arc<dyn TextCompleter>>) -> Self {
        Self { completer }
    }

    /// Analyze one section's raw signals.
    ///
    /// `None` or empty raw data yields the explicit degraded result; this
    /// is a first-class state, not an error path.
    pub fn analyze(&self, section: Section, raw: Option<Value>) -> SectionResult {
        let Some(raw) = raw.filter(|r| !signals::is_empty(r)) else {
            debug!(section = section.as_str(), "no raw data, degrading section");
            return SectionResult::degraded(section);
        };

        let scores = section_scores(section, &raw);

        let engine = RuleEngine::for_section(section);
        let recommendations = engine.run(&RuleContext::new(&raw, &scores));
        debug!(
            section = section.as_str(),
            scores = scores.len(),
            recommendations = recommendations.len(),
            "section analyzed"
        );

        let narrative = self.completer.as_deref().map(|completer| {
            let prompt = prompts::section_prompt(section, &raw, &scores, &recommendations);
            match completer.complete(&prompt) {
                Ok(text) => text,
                Err(e) => {
                    warn!(section = section.as_str(), error = %e, "narrative generation failed");
                    NARRATIVE_UNAVAILABLE.to_string()
                }
            }
        });

        SectionResult {
            name: section,
            raw,
            scores,
            recommendations,
            narrative,
        }
    }
}

/// Category scores applicable to a section.
///
/// SEO carries the full five-component model plus the weighted overall.
/// Performance lifts the collector-reported score so downstream summary
/// checks and scoring share one number; technical and content have no
/// numeric model of their own.
fn section_scores(section: Section, raw: &Value) -> Vec<CategoryScore> {
    match section {
        Section::Seo => scoring::seo_scores(raw),
        Section::Performance => signals::f64_at(raw, "score")
            .map(|score| CategoryScore {
                category: "performance".to_string(),
                value: clamp_score(score.round() as i64),
                breakdown: Vec::new(),
            })
            .into_iter()
            .collect(),
        Section::Technical | Section::Content => Vec::new(),
    }
}
