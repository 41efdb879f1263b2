//! Deterministic narrative prompts
//!
//! Each section's prompt is a fixed skeleton rendered from scores, raw
//! signals, and the top recommendations, so identical inputs always yield
//! an identical prompt. Only the model's phrasing varies.

use crate::models::{CategoryScore, Recommendation, Section};
use crate::scoring::{content_rating, seo_health_status, technical_health};
use crate::signals;
use serde_json::Value;

/// How many recommendations a prompt carries.
const PROMPT_RECOMMENDATION_LIMIT: usize = 3;

/// Build the narrative prompt for one analyzed section.
pub fn section_prompt(
    section: Section,
    raw: &Value,
    scores: &[CategoryScore],
    recommendations: &[Recommendation],
) -> String {
    let findings = match section {
        Section::Seo => seo_findings(raw, scores),
        Section::Performance => performance_findings(raw, scores),
        Section::Technical => technical_findings(raw),
        Section::Content => content_findings(raw),
    };

    format!(
        "You are a website quality consultant. Write a concise, professional \
         prose summary of this {section} audit for a non-technical reader. \
         Do not invent metrics beyond those listed.\n\n\
         {findings}\n\
         Top recommendations:\n{}\n\
         Summary:",
        format_recommendations(recommendations),
    )
}

fn score_value(scores: &[CategoryScore], category: &str) -> Option<u8> {
    scores.iter().find(|s| s.category == category).map(|s| s.value)
}

fn seo_findings(raw: &Value, scores: &[CategoryScore]) -> String {
    let overall = score_value(scores, "overall").unwrap_or(0);
    let title = signals::str_at(raw, "meta_tags.title").unwrap_or("Missing");
    let title_len = signals::str_at(raw, "meta_tags.title")
        .map(|t| t.chars().count())
        .unwrap_or(0);
    let description = if signals::has_text(raw, "meta_tags.meta_description") {
        "Present"
    } else {
        "Missing"
    };
    let internal = signals::count_at(raw, "links.internal.count").unwrap_or(0);
    let external = signals::count_at(raw, "links.external.count").unwrap_or(0);
    let with_alt = signals::count_at(raw, "images.with_alt").unwrap_or(0);
    let total_images = signals::count_at(raw, "images.total_count").unwrap_or(0);

    format!(
        "SEO findings:\n\
         - Overall score: {overall}/100 ({})\n\
         - Title tag: {title} ({title_len} characters)\n\
         - Meta description: {description}\n\
         - Heading structure: {}\n\
         - Internal links: {internal}, external links: {external}\n\
         - Image alt text: {with_alt}/{total_images} images\n",
        seo_health_status(overall),
        heading_structure(signals::get(raw, "headings").unwrap_or(&Value::Null)),
    )
}

fn performance_findings(raw: &Value, scores: &[CategoryScore]) -> String {
    let score = score_value(scores, "performance")
        .or_else(|| signals::f64_at(raw, "score").map(|s| s.round() as u8))
        .unwrap_or(0);
    let metric = |path: &str| {
        signals::f64_at(raw, path)
            .map(|v| format!("{v} s"))
            .unwrap_or_else(|| "N/A".to_string())
    };

    format!(
        "Performance findings:\n\
         - Performance score: {score}/100\n\
         - Page load time: {}\n\
         - First Contentful Paint: {}\n\
         - Largest Contentful Paint: {}\n",
        metric("load_time"),
        metric("metrics.fcp"),
        metric("metrics.lcp"),
    )
}

fn technical_findings(raw: &Value) -> String {
    let ssl = if signals::bool_at(raw, "security.ssl_certificate.valid").unwrap_or(false) {
        "Valid"
    } else {
        "Invalid or missing"
    };
    let schema = if signals::bool_at(raw, "seo_technical.schema_markup.has_schema").unwrap_or(false)
    {
        "Present"
    } else {
        "Missing"
    };
    let sitemap = if signals::bool_at(raw, "seo_technical.sitemap.exists").unwrap_or(false) {
        "Found"
    } else {
        "Missing"
    };

    format!(
        "Technical findings:\n\
         - SSL certificate: {ssl}\n\
         - Security headers: {}\n\
         - Schema markup: {schema}\n\
         - Sitemap: {sitemap}\n\
         - Overall technical health: {}\n",
        security_headers_summary(raw),
        technical_health(raw),
    )
}

fn content_findings(raw: &Value) -> String {
    let word_count = signals::count_at(raw, "word_count").unwrap_or(0);
    let flesch = signals::f64_at(raw, "readability_scores.flesch_reading_ease")
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let keywords = signals::get(raw, "keywords")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .filter(|joined| !joined.is_empty())
        .unwrap_or_else(|| "None identified".to_string());

    format!(
        "Content findings:\n\
         - Word count: {word_count}\n\
         - Flesch reading ease: {flesch}\n\
         - Key topics: {keywords}\n\
         - Sentiment: {}\n\
         - Content quality: {}\n",
        sentiment_text(signals::f64_at(raw, "sentiment_analysis.compound")),
        content_rating(raw),
    )
}

/// One-line description of the page's heading structure.
pub fn heading_structure(headings: &Value) -> String {
    if signals::is_empty(headings) || !headings.is_object() {
        return "No headings found".to_string();
    }
    let count = |level: &str| signals::count_at(headings, &format!("{level}.count")).unwrap_or(0);
    let h1 = count("h1");
    match h1 {
        0 => "Missing H1 heading".to_string(),
        1 => format!("Good structure (H1: 1, H2: {}, H3: {})", count("h2"), count("h3")),
        n => format!("Multiple H1 headings ({n})"),
    }
}

/// Coverage of the essential security headers.
pub fn security_headers_summary(technical: &Value) -> String {
    const ESSENTIAL: [&str; 4] = [
        "strict_transport_security",
        "x_frame_options",
        "x_content_type_options",
        "content_security_policy",
    ];
    let headers = signals::get(technical, "security.headers");
    let implemented = ESSENTIAL
        .iter()
        .filter(|name| headers.is_some_and(|h| signals::has_text(h, name)))
        .count();
    format!("{implemented}/{} essential headers implemented", ESSENTIAL.len())
}

/// Tone description from the sentiment compound score.
pub fn sentiment_text(compound: Option<f64>) -> &'static str {
    match compound {
        None => "Sentiment analysis not available",
        Some(c) if c > 0.5 => "Very positive tone",
        Some(c) if c > 0.0 => "Slightly positive tone",
        Some(c) if c < -0.5 => "Very negative tone",
        Some(c) if c < 0.0 => "Slightly negative tone",
        Some(_) => "Neutral tone",
    }
}

fn format_recommendations(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return "- No specific recommendations\n".to_string();
    }
    recommendations
        .iter()
        .take(PROMPT_RECOMMENDATION_LIMIT)
        .map(|rec| {
            format!(
                "- {}: {} (Priority: {})\n",
                rec.issue, rec.recommendation, rec.priority
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use serde_json::json;

    #[test]
    fn test_prompt_is_deterministic() {
        let raw = json!({"meta_tags": {"title": "Home"}, "headings": {"h1": {"count": 1}}});
        let a = section_prompt(Section::Seo, &raw, &[], &[]);
        let b = section_prompt(Section::Seo, &raw, &[], &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_carries_top_three_recommendations() {
        let recs: Vec<Recommendation> = (0..5)
            .map(|i| Recommendation {
                issue: format!("Issue {i}"),
                priority: Priority::High,
                recommendation: "Fix it".into(),
                impact: "High".into(),
                ..Default::default()
            })
            .collect();
        let raw = json!({});
        let prompt = section_prompt(Section::Performance, &raw, &[], &recs);
        assert!(prompt.contains("Issue 0"));
        assert!(prompt.contains("Issue 2"));
        assert!(!prompt.contains("Issue 3"));
    }

    #[test]
    fn test_heading_structure_text() {
        assert_eq!(heading_structure(&json!({})), "No headings found");
        assert_eq!(
            heading_structure(&json!({"h1": {"count": 0}})),
            "Missing H1 heading"
        );
        assert_eq!(
            heading_structure(&json!({"h1": {"count": 3}})),
            "Multiple H1 headings (3)"
        );
        assert_eq!(
            heading_structure(&json!({"h1": {"count": 1}, "h2": {"count": 4}})),
            "Good structure (H1: 1, H2: 4, H3: 0)"
        );
    }

    #[test]
    fn test_security_headers_summary() {
        let technical = json!({
            "security": {"headers": {
                "x_frame_options": "DENY",
                "content_security_policy": "default-src 'self'",
                "strict_transport_security": null,
            }}
        });
        assert_eq!(
            security_headers_summary(&technical),
            "2/4 essential headers implemented"
        );
        assert_eq!(
            security_headers_summary(&json!({})),
            "0/4 essential headers implemented"
        );
    }

    #[test]
    fn test_sentiment_text() {
        assert_eq!(sentiment_text(None), "Sentiment analysis not available");
        assert_eq!(sentiment_text(Some(0.9)), "Very positive tone");
        assert_eq!(sentiment_text(Some(-0.2)), "Slightly negative tone");
        assert_eq!(sentiment_text(Some(0.0)), "Neutral tone");
    }

    #[test]
    fn test_no_recommendations_placeholder() {
        let raw = json!({});
        let prompt = section_prompt(Section::Content, &raw, &[], &[]);
        assert!(prompt.contains("No specific recommendations"));
    }
}
