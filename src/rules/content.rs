//! Content recommendation rules: depth, readability, keywords, tone, structure

use crate::models::{Priority, Recommendation};
use crate::rules::{Rule, RuleContext};
use crate::signals;
use serde_json::Value;

/// Minimum word count for meaningful content depth.
const MIN_WORD_COUNT: u64 = 300;

/// Flesch reading-ease band considered readable without being shallow.
const FLESCH_COMPLEX_BELOW: f64 = 60.0;
const FLESCH_SIMPLE_ABOVE: f64 = 80.0;

/// Minimum number of extracted key topics.
const MIN_KEYWORDS: usize = 3;

/// Sentiment compound magnitude above which tone reads as one-sided.
const SENTIMENT_STRONG: f64 = 0.8;

/// Thin content below the word-count floor.
pub struct WordCountRule;

impl Rule for WordCountRule {
    fn name(&self) -> &'static str {
        "word-count"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let word_count = signals::count_at(ctx.raw, "word_count").unwrap_or(0);
        if word_count >= MIN_WORD_COUNT {
            return Vec::new();
        }
        vec![Recommendation {
            issue: "Low word count".into(),
            priority: Priority::High,
            recommendation: format!("Add more content to reach at least {MIN_WORD_COUNT} words"),
            impact: "Better search rankings and content depth".into(),
            current: None,
            metric: Some(format!("{word_count} words")),
        }]
    }
}

/// Readability outside the target Flesch band.
pub struct ReadabilityRule;

impl Rule for ReadabilityRule {
    fn name(&self) -> &'static str {
        "readability"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let Some(flesch) = signals::f64_at(ctx.raw, "readability_scores.flesch_reading_ease")
        else {
            return Vec::new();
        };

        if flesch < FLESCH_COMPLEX_BELOW {
            vec![Recommendation {
                issue: "Content too complex".into(),
                priority: Priority::Medium,
                recommendation: "Simplify content for better readability".into(),
                impact: "Improved user engagement".into(),
                current: None,
                metric: Some(format!("Flesch score: {flesch}")),
            }]
        } else if flesch > FLESCH_SIMPLE_ABOVE {
            vec![Recommendation {
                issue: "Content may be too simple".into(),
                priority: Priority::Low,
                recommendation: "Consider adding more sophisticated content".into(),
                impact: "Better audience targeting".into(),
                current: None,
                metric: Some(format!("Flesch score: {flesch}")),
            }]
        } else {
            Vec::new()
        }
    }
}

/// Too few extracted key topics.
pub struct KeywordCoverageRule;

impl Rule for KeywordCoverageRule {
    fn name(&self) -> &'static str {
        "keyword-coverage"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let keywords: Vec<String> = signals::get(ctx.raw, "keywords")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if keywords.len() >= MIN_KEYWORDS {
            return Vec::new();
        }
        vec![Recommendation {
            issue: "Few key topics identified".into(),
            priority: Priority::Medium,
            recommendation: "Add more relevant keywords and topics".into(),
            impact: "Better topic coverage and SEO".into(),
            current: Some(if keywords.is_empty() {
                "none".to_string()
            } else {
                keywords.join(", ")
            }),
            metric: None,
        }]
    }
}

/// Strongly one-sided sentiment, positive or negative.
pub struct SentimentToneRule;

impl Rule for SentimentToneRule {
    fn name(&self) -> &'static str {
        "sentiment-tone"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let Some(compound) = signals::f64_at(ctx.raw, "sentiment_analysis.compound") else {
            return Vec::new();
        };
        if compound.abs() <= SENTIMENT_STRONG {
            return Vec::new();
        }
        let tone = if compound < 0.0 { "negative" } else { "positive" };
        vec![Recommendation {
            issue: format!("Strong {tone} tone"),
            priority: Priority::Medium,
            recommendation: "Consider balancing the content tone".into(),
            impact: "Better audience reception".into(),
            current: None,
            metric: Some(format!("Sentiment score: {compound:.2}")),
        }]
    }
}

/// No headings anywhere on the page.
pub struct ContentStructureRule;

impl Rule for ContentStructureRule {
    fn name(&self) -> &'static str {
        "content-structure"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let has_any_heading = signals::get(ctx.raw, "headings")
            .and_then(Value::as_object)
            .is_some_and(|headings| {
                headings.values().any(|level| match level {
                    Value::Number(n) => n.as_u64().unwrap_or(0) > 0,
                    Value::Array(items) => !items.is_empty(),
                    Value::Object(map) => map
                        .get("count")
                        .and_then(Value::as_u64)
                        .unwrap_or(0)
                        > 0,
                    _ => false,
                })
            });

        if has_any_heading {
            return Vec::new();
        }
        vec![Recommendation {
            issue: "Poor content structure".into(),
            priority: Priority::High,
            recommendation: "Add headings to structure content".into(),
            impact: "Better readability and SEO".into(),
            ..Default::default()
        }]
    }
}

/// The standard content rule set, in emission order.
pub fn content_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(WordCountRule),
        Box::new(ReadabilityRule),
        Box::new(KeywordCoverageRule),
        Box::new(SentimentToneRule),
        Box::new(ContentStructureRule),
    ]
}
