//! Executive summary synthesis
//!
//! Builds the cross-section summary from finished SectionResults: critical
//! issues, positive aspects, a deterministic conclusion, and exactly three
//! priority actions chosen by fixed precedence chains. Positive-signal
//! checks read raw signals directly and are independent of the rules
//! engine.

use crate::models::{Priority, Section, SectionResult, Summary};
use crate::scoring::{content_rating, performance_rating, seo_health_status, technical_health};
use crate::signals;
use serde_json::Value;
use std::collections::BTreeMap;

/// Load-time threshold separating a positive aspect from an improvement.
const GOOD_LOAD_TIME_SECS: f64 = 3.0;

pub fn build(sections: &BTreeMap<Section, SectionResult>) -> Summary {
    let raw = |section: Section| -> &Value {
        sections
            .get(&section)
            .map(|s| &s.raw)
            .unwrap_or(&Value::Null)
    };

    Summary {
        critical_issues: critical_issues(sections),
        important_improvements: important_improvements(raw(Section::Seo), raw(Section::Performance)),
        positive_aspects: positive_aspects(raw(Section::Performance), raw(Section::Technical)),
        conclusion: conclusion(sections),
        priority_actions: priority_actions(sections),
    }
}

/// Union of High-priority issues across sections, deduplicated by issue
/// text, in discovery order.
fn critical_issues(sections: &BTreeMap<Section, SectionResult>) -> Vec<String> {
    let mut seen = Vec::new();
    for section in Section::ORDERED {
        let Some(result) = sections.get(&section) else {
            continue;
        };
        for rec in &result.recommendations {
            if rec.priority == Priority::High && !seen.contains(&rec.issue) {
                seen.push(rec.issue.clone());
            }
        }
    }
    seen
}

fn important_improvements(seo: &Value, performance: &Value) -> Vec<String> {
    let mut improvements = Vec::new();

    let title_len = signals::str_at(seo, "meta_tags.title")
        .or_else(|| signals::str_at(seo, "title"))
        .map(|t| t.chars().count())
        .unwrap_or(0);
    if title_len > 60 {
        improvements.push("Title length exceeds recommended limit".to_string());
    }

    if let Some(load_time) = signals::f64_at(performance, "load_time") {
        if load_time >= GOOD_LOAD_TIME_SECS {
            improvements.push(format!("Slow page load time: {load_time:.2}s"));
        }
    }

    improvements
}

fn positive_aspects(performance: &Value, technical: &Value) -> Vec<String> {
    let mut aspects = Vec::new();

    if let Some(load_time) = signals::f64_at(performance, "load_time") {
        if load_time < GOOD_LOAD_TIME_SECS {
            aspects.push(format!("Good page load time: {load_time:.2}s"));
        }
    }

    if signals::bool_at(technical, "security.ssl_certificate.valid").unwrap_or(false) {
        aspects.push("Valid SSL certificate".to_string());
    }

    aspects
}

fn seo_overall(sections: &BTreeMap<Section, SectionResult>) -> u8 {
    sections
        .get(&Section::Seo)
        .and_then(|s| s.scores.iter().find(|c| c.category == "overall"))
        .map(|c| c.value)
        .unwrap_or(0)
}

/// Performance score, defaulting high when the collector never reported
/// one so a missing score does not read as a performance problem.
fn performance_score(sections: &BTreeMap<Section, SectionResult>) -> u8 {
    sections
        .get(&Section::Performance)
        .and_then(|s| s.scores.iter().find(|c| c.category == "performance"))
        .map(|c| c.value)
        .unwrap_or(100)
}

fn conclusion(sections: &BTreeMap<Section, SectionResult>) -> String {
    let raw = |section: Section| -> &Value {
        sections
            .get(&section)
            .map(|s| &s.raw)
            .unwrap_or(&Value::Null)
    };
    let seo_score = seo_overall(sections);
    let perf_score = performance_score(sections);
    let actions = priority_actions(sections);

    format!(
        "Overall Website Analysis Conclusion:\n\
         \n\
         This website analysis reveals a mixed profile of strengths and areas requiring improvement:\n\
         \n\
         1. SEO Performance:\n   - Overall SEO score: {seo_score}/100 - {}\n\
         2. Technical Health:\n   - Technical foundation is {}\n\
         3. Performance Metrics:\n   - Performance score: {perf_score}/100 - {}\n\
         4. Content Quality:\n   - Content quality is {}\n\
         \n\
         Priority Action Items:\n\
         1. {}\n\
         2. {}\n\
         3. {}\n\
         \n\
         Implementation of these recommendations will significantly improve the website's \
         overall effectiveness and user experience.",
        seo_health_status(seo_score),
        technical_health(raw(Section::Technical)),
        performance_rating(perf_score),
        content_rating(raw(Section::Content)),
        actions[0],
        actions[1],
        actions[2],
    )
}

/// Truthy signal: present, non-null, non-false, non-zero.
fn truthy(raw: &Value, path: &str) -> bool {
    match signals::get(raw, path) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0) != 0.0,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Exactly three actions, each chosen by its own precedence chain. The
/// chains are explicit orderings, not a scored ranking; ties break by
/// listed order.
fn priority_actions(sections: &BTreeMap<Section, SectionResult>) -> Vec<String> {
    let raw = |section: Section| -> &Value {
        sections
            .get(&section)
            .map(|s| &s.raw)
            .unwrap_or(&Value::Null)
    };
    let seo = raw(Section::Seo);
    let technical = raw(Section::Technical);
    let content = raw(Section::Content);

    let has_meta_description = signals::has_text(seo, "meta_tags.meta_description")
        || signals::has_text(seo, "meta_description");

    let first = if !has_meta_description {
        "Add a compelling meta description"
    } else if performance_score(sections) < 70 {
        "Improve page load performance"
    } else {
        "Implement missing security headers"
    };

    let word_count = signals::count_at(content, "word_count").unwrap_or(0);
    let second = if word_count < 300 {
        "Expand content length and depth"
    } else if !truthy(technical, "seo_technical.schema_markup.has_schema") {
        "Implement schema markup"
    } else {
        "Optimize images and resources"
    };

    let keyword_count = signals::get(content, "keywords")
        .and_then(Value::as_array)
        .map(|k| k.len())
        .unwrap_or(0);
    let third = if !truthy(technical, "accessibility.basic_checks.aria_landmarks") {
        "Improve accessibility with ARIA landmarks"
    } else if keyword_count < 3 {
        "Enhance keyword optimization"
    } else {
        "Implement additional performance optimizations"
    };

    vec![first.to_string(), second.to_string(), third.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryScore, Recommendation};
    use serde_json::json;

    fn section(name: Section, raw: Value) -> SectionResult {
        SectionResult {
            name,
            raw,
            scores: Vec::new(),
            recommendations: Vec::new(),
            narrative: None,
        }
    }

    fn high(issue: &str) -> Recommendation {
        Recommendation {
            issue: issue.to_string(),
            priority: Priority::High,
            recommendation: "Fix".into(),
            impact: "High".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_critical_issues_deduplicated_in_order() {
        let mut sections = BTreeMap::new();
        let mut seo = section(Section::Seo, json!({}));
        seo.recommendations = vec![high("Missing H1 heading"), high("Missing meta description")];
        let mut technical = section(Section::Technical, json!({}));
        technical.recommendations = vec![
            high("Missing meta description"), // duplicate across sections
            high("Missing Content Security Policy"),
            Recommendation {
                issue: "Minor".into(),
                priority: Priority::Low,
                ..Default::default()
            },
        ];
        sections.insert(Section::Seo, seo);
        sections.insert(Section::Technical, technical);

        let issues = critical_issues(&sections);
        assert_eq!(
            issues,
            vec![
                "Missing H1 heading",
                "Missing meta description",
                "Missing Content Security Policy",
            ]
        );
    }

    #[test]
    fn test_positive_aspects() {
        let performance = json!({"load_time": 1.8});
        let technical = json!({"security": {"ssl_certificate": {"valid": true}}});
        let aspects = positive_aspects(&performance, &technical);
        assert_eq!(
            aspects,
            vec!["Good page load time: 1.80s", "Valid SSL certificate"]
        );
    }

    #[test]
    fn test_slow_load_is_improvement_not_positive() {
        let performance = json!({"load_time": 5.2});
        assert!(positive_aspects(&performance, &Value::Null).is_empty());
        let improvements = important_improvements(&Value::Null, &performance);
        assert_eq!(improvements, vec!["Slow page load time: 5.20s"]);
    }

    #[test]
    fn test_priority_actions_first_chain() {
        // Missing meta description wins slot one.
        let mut sections = BTreeMap::new();
        sections.insert(Section::Seo, section(Section::Seo, json!({"meta_tags": {}})));
        let actions = priority_actions(&sections);
        assert_eq!(actions[0], "Add a compelling meta description");

        // With a description and a weak performance score, slot one moves on.
        let mut sections = BTreeMap::new();
        sections.insert(
            Section::Seo,
            section(
                Section::Seo,
                json!({"meta_tags": {"meta_description": "Fine."}}),
            ),
        );
        let mut perf = section(Section::Performance, json!({"score": 55}));
        perf.scores = vec![CategoryScore {
            category: "performance".into(),
            value: 55,
            breakdown: vec![],
        }];
        sections.insert(Section::Performance, perf);
        let actions = priority_actions(&sections);
        assert_eq!(actions[0], "Improve page load performance");
    }

    #[test]
    fn test_priority_actions_fallbacks() {
        // Healthy site: every chain falls through to its final action.
        let mut sections = BTreeMap::new();
        sections.insert(
            Section::Seo,
            section(
                Section::Seo,
                json!({"meta_tags": {"meta_description": "All good here."}}),
            ),
        );
        let mut perf = section(Section::Performance, json!({"score": 92}));
        perf.scores = vec![CategoryScore {
            category: "performance".into(),
            value: 92,
            breakdown: vec![],
        }];
        sections.insert(Section::Performance, perf);
        sections.insert(
            Section::Technical,
            section(
                Section::Technical,
                json!({
                    "seo_technical": {"schema_markup": {"has_schema": true}},
                    "accessibility": {"basic_checks": {"aria_landmarks": true}},
                }),
            ),
        );
        sections.insert(
            Section::Content,
            section(
                Section::Content,
                json!({"word_count": 900, "keywords": ["a", "b", "c", "d"]}),
            ),
        );

        let actions = priority_actions(&sections);
        assert_eq!(actions[0], "Implement missing security headers");
        assert_eq!(actions[1], "Optimize images and resources");
        assert_eq!(actions[2], "Implement additional performance optimizations");
    }

    #[test]
    fn test_priority_actions_always_three_even_when_degraded() {
        let sections = BTreeMap::new();
        assert_eq!(priority_actions(&sections).len(), 3);
    }

    #[test]
    fn test_conclusion_embeds_actions_and_labels() {
        let mut sections = BTreeMap::new();
        sections.insert(Section::Seo, section(Section::Seo, json!({"meta_tags": {}})));
        let text = conclusion(&sections);
        assert!(text.contains("Priority Action Items:"));
        assert!(text.contains("1. Add a compelling meta description"));
        assert!(text.contains("poor"));
    }
}
