//! Core data models for Siteaudit
//!
//! These models are used throughout the codebase for representing
//! raw collector signals, category scores, recommendations, and the
//! final audit report.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Narrative placeholder for a section whose collector returned no data.
pub const DATA_NOT_AVAILABLE: &str = "Data not available";

/// Narrative placeholder when the text-completion collaborator fails.
pub const NARRATIVE_UNAVAILABLE: &str = "Narrative generation unavailable";

/// Priority levels for recommendations
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// A prioritized improvement suggestion derived from raw signals and scores
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Recommendation {
    pub issue: String,
    pub priority: Priority,
    pub recommendation: String,
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

/// One scored criterion inside a CategoryScore breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub awarded: u32,
    pub possible: u32,
}

impl Criterion {
    pub fn new(name: impl Into<String>, awarded: u32, possible: u32) -> Self {
        Self {
            name: name.into(),
            awarded,
            possible,
        }
    }
}

/// A 0-100 normalized score for one quality dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub value: u8,
    pub breakdown: Vec<Criterion>,
}

impl CategoryScore {
    /// Build a score from its criterion breakdown using a simple average
    /// (awarded / possible * 100, rounded).
    pub fn from_breakdown(category: impl Into<String>, breakdown: Vec<Criterion>) -> Self {
        let possible: u32 = breakdown.iter().map(|c| c.possible).sum();
        let awarded: u32 = breakdown.iter().map(|c| c.awarded).sum();
        let value = if possible == 0 {
            0
        } else {
            ((awarded as f64 / possible as f64) * 100.0).round() as i64
        };
        Self {
            category: category.into(),
            value: clamp_score(value),
            breakdown,
        }
    }
}

/// Clamp an integer score into the 0-100 range
pub fn clamp_score(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// One analysis domain, with its own collector, scorer, and rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Seo,
    Performance,
    Technical,
    Content,
}

impl Section {
    /// Fixed processing order. Summary text depends on every section
    /// being analyzed in this order, regardless of collector completion.
    pub const ORDERED: [Section; 4] = [
        Section::Seo,
        Section::Performance,
        Section::Technical,
        Section::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Seo => "seo",
            Section::Performance => "performance",
            Section::Technical => "technical",
            Section::Content => "content",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Analysis output for one section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionResult {
    pub name: Section,
    pub raw: Value,
    pub scores: Vec<CategoryScore>,
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

impl SectionResult {
    /// The explicit degraded state for a section whose collector failed.
    /// This is a first-class result, not an error path.
    pub fn degraded(name: Section) -> Self {
        Self {
            name,
            raw: Value::Object(Default::default()),
            scores: Vec::new(),
            recommendations: Vec::new(),
            narrative: Some(DATA_NOT_AVAILABLE.to_string()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.narrative.as_deref() == Some(DATA_NOT_AVAILABLE)
    }
}

/// Cross-section executive summary
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Summary {
    pub critical_issues: Vec<String>,
    pub important_improvements: Vec<String>,
    pub positive_aspects: Vec<String>,
    pub conclusion: String,
    /// Always exactly three entries, chosen by fixed precedence chains.
    pub priority_actions: Vec<String>,
}

/// Complete audit report for one URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub url: String,
    pub timestamp: String,
    /// Keyed by section name; BTreeMap keeps serialized key order stable.
    pub sections: BTreeMap<Section, SectionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Value>,
    pub summary: Summary,
}
