//! Health-status labels derived from scores and raw signals
//!
//! These labels feed the executive conclusion and the narrative prompts.
//! Thresholds are fixed audit methodology, not configuration.

use crate::signals;
use serde_json::Value;

/// SEO health from the overall SEO score.
pub fn seo_health_status(score: u8) -> &'static str {
    match score {
        90..=100 => "excellent",
        70..=89 => "good",
        50..=69 => "fair",
        _ => "poor",
    }
}

/// Performance rating from the performance score.
pub fn performance_rating(score: u8) -> &'static str {
    match score {
        90..=100 => "excellent",
        70..=89 => "good",
        50..=69 => "needs improvement",
        _ => "poor",
    }
}

/// Technical health from SSL validity and security header coverage.
pub fn technical_health(technical: &Value) -> &'static str {
    let ssl_valid = signals::bool_at(technical, "security.ssl_certificate.valid").unwrap_or(false);
    let header_count = signals::get(technical, "security.headers")
        .and_then(Value::as_object)
        .map(|headers| headers.values().filter(|v| !v.is_null()).count())
        .unwrap_or(0);

    if ssl_valid && header_count >= 3 {
        "strong"
    } else if ssl_valid {
        "moderate"
    } else {
        "needs significant improvement"
    }
}

/// Content rating from word count and keyword coverage.
pub fn content_rating(content: &Value) -> &'static str {
    let word_count = signals::count_at(content, "word_count").unwrap_or(0);
    let keywords = signals::get(content, "keywords")
        .and_then(Value::as_array)
        .map(|k| k.len())
        .unwrap_or(0);

    if word_count > 1000 && keywords >= 5 {
        "excellent"
    } else if word_count > 500 && keywords >= 3 {
        "good"
    } else if word_count > 300 {
        "adequate"
    } else {
        "needs improvement"
    }
}
