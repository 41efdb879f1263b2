//! SEO category scorers
//!
//! Point allotments mirror the audit methodology: each criterion is worth a
//! fixed number of points and a page either earns them or it does not. The
//! breakdown on each score records every criterion so recommendation rules
//! and scoring share one source of truth for "is this signal present".

use crate::models::{clamp_score, CategoryScore, Criterion};
use crate::signals;
use serde_json::Value;

/// Weights for combining the five SEO component scores. Must sum to 1.0.
pub const OVERALL_WEIGHTS: [(&str, f64); 5] = [
    ("meta_tags", 0.25),
    ("headings", 0.20),
    ("links", 0.20),
    ("images", 0.15),
    ("mobile", 0.20),
];

/// Score meta tag completeness. Fixed allotments per present field:
/// title 20, description 20, keywords 15, robots 15, viewport 15, charset 15.
pub fn score_meta_tags(meta: &Value) -> CategoryScore {
    let present = |field: &str, points: u32| {
        let awarded = if signals::has_text(meta, field) {
            points
        } else {
            0
        };
        Criterion::new(field, awarded, points)
    };

    CategoryScore::from_breakdown(
        "meta_tags",
        vec![
            present("title", 20),
            present("meta_description", 20),
            present("meta_keywords", 15),
            present("robots", 15),
            present("viewport", 15),
            present("charset", 15),
        ],
    )
}

/// Score heading structure.
///
/// The H1 criterion requires exactly one H1: zero and multiple both score
/// zero there. H1 length checks every H1 text against a 70-character limit.
pub fn score_headings(headings: &Value) -> CategoryScore {
    let h1_count = signals::count_at(headings, "h1.count").unwrap_or(0);

    let h1_texts: Vec<&str> = signals::get(headings, "h1.content")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let h1_lengths_ok = h1_texts.iter().all(|text| text.chars().count() < 70);

    let total_headings: u64 = (1..=6)
        .map(|level| signals::count_at(headings, &format!("h{level}.count")).unwrap_or(0))
        .sum();

    CategoryScore::from_breakdown(
        "headings",
        vec![
            Criterion::new("single_h1", if h1_count == 1 { 40 } else { 0 }, 40),
            Criterion::new(
                "has_h2",
                if signals::count_at(headings, "h2.count").unwrap_or(0) > 0 {
                    20
                } else {
                    0
                },
                20,
            ),
            Criterion::new("h1_length", if h1_lengths_ok { 20 } else { 0 }, 20),
            Criterion::new(
                "heading_count",
                if total_headings < 15 { 20 } else { 0 },
                20,
            ),
        ],
    )
}

/// Score internal/external link profile.
///
/// The third criterion rewards having more internal than external links
/// regardless of magnitude; kept as specified pending product review.
pub fn score_links(links: &Value) -> CategoryScore {
    let internal = signals::count_at(links, "internal.count").unwrap_or(0);
    let external = signals::count_at(links, "external.count").unwrap_or(0);

    CategoryScore::from_breakdown(
        "links",
        vec![
            Criterion::new("has_internal", if internal > 0 { 40 } else { 0 }, 40),
            Criterion::new("has_external", if external > 0 { 30 } else { 0 }, 30),
            Criterion::new(
                "internal_majority",
                if internal > external { 30 } else { 0 },
                30,
            ),
        ],
    )
}

/// Score image alt-text coverage: round(100 * with_alt / total), zero when
/// the page has no images. No partial-credit floor.
pub fn score_images(images: &Value) -> CategoryScore {
    let total = signals::count_at(images, "total_count").unwrap_or(0);
    let with_alt = signals::count_at(images, "with_alt").unwrap_or(0);

    let value = if total == 0 {
        0
    } else {
        ((with_alt as f64 / total as f64) * 100.0).round() as i64
    };

    CategoryScore {
        category: "images".to_string(),
        value: clamp_score(value),
        breakdown: vec![Criterion::new(
            "alt_coverage",
            with_alt.min(total) as u32,
            total as u32,
        )],
    }
}

/// Score mobile-friendliness from the viewport meta tag.
pub fn score_mobile(mobile: &Value) -> CategoryScore {
    let has_viewport = signals::bool_at(mobile, "has_viewport").unwrap_or(false)
        || signals::has_text(mobile, "viewport_content");
    let content = signals::str_at(mobile, "viewport_content").unwrap_or("");

    CategoryScore::from_breakdown(
        "mobile",
        vec![
            Criterion::new("has_viewport", if has_viewport { 50 } else { 0 }, 50),
            Criterion::new(
                "device_width",
                if content.contains("width=device-width") {
                    25
                } else {
                    0
                },
                25,
            ),
            Criterion::new(
                "initial_scale",
                if content.contains("initial-scale=1") { 25 } else { 0 },
                25,
            ),
        ],
    )
}

/// Combine component scores into the overall SEO score using the fixed
/// weight table. Components absent from the input contribute zero.
///
/// Rounding is apportioned across the breakdown by largest remainder, so
/// the awarded points always sum back to `value`.
pub fn score_overall(components: &[CategoryScore]) -> CategoryScore {
    debug_assert!(
        (OVERALL_WEIGHTS.iter().map(|(_, w)| w).sum::<f64>() - 1.0).abs() < 1e-9,
        "overall weights must sum to 1.0"
    );

    let contributions: Vec<(&str, f64, u32)> = OVERALL_WEIGHTS
        .iter()
        .map(|&(name, weight)| {
            let value = components
                .iter()
                .find(|c| c.category == name)
                .map(|c| c.value as f64)
                .unwrap_or(0.0);
            (name, value * weight, (100.0 * weight).round() as u32)
        })
        .collect();

    let weighted: f64 = contributions.iter().map(|(_, c, _)| c).sum();
    let value = clamp_score(weighted.round() as i64);

    // Floor every contribution, then hand the rounding leftover out one
    // point at a time by largest fractional remainder (ties break by
    // weight-table order).
    let mut awarded: Vec<u32> = contributions.iter().map(|(_, c, _)| *c as u32).collect();
    let mut order: Vec<usize> = (0..contributions.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = contributions[a].1.fract();
        let fb = contributions[b].1.fract();
        fb.partial_cmp(&fa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    let mut leftover = u32::from(value).saturating_sub(awarded.iter().sum());
    for &i in &order {
        if leftover == 0 {
            break;
        }
        awarded[i] += 1;
        leftover -= 1;
    }

    let breakdown = contributions
        .iter()
        .zip(&awarded)
        .map(|(&(name, _, possible), &points)| Criterion::new(name, points, possible))
        .collect();

    CategoryScore {
        category: "overall".to_string(),
        value,
        breakdown,
    }
}

/// Compute the full SEO score set (five components plus overall) from the
/// SEO collector's raw payload.
pub fn seo_scores(raw: &Value) -> Vec<CategoryScore> {
    let empty = Value::Object(Default::default());
    let at = |key: &str| signals::get(raw, key).unwrap_or(&empty);

    let mut scores = vec![
        score_meta_tags(at("meta_tags")),
        score_headings(at("headings")),
        score_links(at("links")),
        score_images(at("images")),
        score_mobile(at("mobile_friendly")),
    ];
    scores.push(score_overall(&scores));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_tags_all_present() {
        let meta = json!({
            "title": "Acme Widgets - Quality Widgets Since 1999",
            "meta_description": "Buy quality widgets online.",
            "meta_keywords": "widgets, acme",
            "robots": "index, follow",
            "viewport": "width=device-width, initial-scale=1",
            "charset": "utf-8",
        });
        assert_eq!(score_meta_tags(&meta).value, 100);
    }

    #[test]
    fn test_meta_tags_missing_description() {
        let meta = json!({"title": "Home", "meta_description": null});
        let score = score_meta_tags(&meta);
        // Only the 20 title points are awarded.
        assert_eq!(score.value, 20);
        let desc = score
            .breakdown
            .iter()
            .find(|c| c.name == "meta_description")
            .unwrap();
        assert_eq!(desc.awarded, 0);
    }

    #[test]
    fn test_meta_tags_empty_input() {
        let score = score_meta_tags(&json!({}));
        assert_eq!(score.value, 0);
        assert_eq!(score.breakdown.len(), 6);
    }

    #[test]
    fn test_headings_single_h1() {
        let headings = json!({
            "h1": {"count": 1, "content": ["Welcome"]},
            "h2": {"count": 3, "content": ["A", "B", "C"]},
        });
        assert_eq!(score_headings(&headings).value, 100);
    }

    #[test]
    fn test_headings_zero_h1_scores_zero_on_first_criterion() {
        let headings = json!({"h1": {"count": 0}, "h2": {"count": 0}});
        let score = score_headings(&headings);
        let h1 = score.breakdown.iter().find(|c| c.name == "single_h1").unwrap();
        assert_eq!(h1.awarded, 0);
        // H1 length and heading count criteria still pass vacuously.
        assert_eq!(score.value, 40);
    }

    #[test]
    fn test_headings_multiple_h1_also_fails() {
        let headings = json!({"h1": {"count": 2, "content": ["One", "Two"]}});
        let h1 = score_headings(&headings)
            .breakdown
            .into_iter()
            .find(|c| c.name == "single_h1")
            .unwrap();
        assert_eq!(h1.awarded, 0);
    }

    #[test]
    fn test_headings_long_h1_fails_length() {
        let long = "x".repeat(80);
        let headings = json!({"h1": {"count": 1, "content": [long]}});
        let length = score_headings(&headings)
            .breakdown
            .into_iter()
            .find(|c| c.name == "h1_length")
            .unwrap();
        assert_eq!(length.awarded, 0);
    }

    #[test]
    fn test_headings_too_many() {
        let headings = json!({
            "h1": {"count": 1, "content": ["T"]},
            "h2": {"count": 8},
            "h3": {"count": 7},
        });
        let count = score_headings(&headings)
            .breakdown
            .into_iter()
            .find(|c| c.name == "heading_count")
            .unwrap();
        assert_eq!(count.awarded, 0);
    }

    #[test]
    fn test_links_internal_majority() {
        let links = json!({"internal": {"count": 12}, "external": {"count": 4}});
        assert_eq!(score_links(&links).value, 100);
    }

    #[test]
    fn test_links_external_majority() {
        let links = json!({"internal": {"count": 2}, "external": {"count": 9}});
        assert_eq!(score_links(&links).value, 70);
    }

    #[test]
    fn test_links_missing_counts() {
        assert_eq!(score_links(&json!({})).value, 0);
    }

    #[test]
    fn test_images_full_coverage() {
        let images = json!({"total_count": 10, "with_alt": 10});
        assert_eq!(score_images(&images).value, 100);
    }

    #[test]
    fn test_images_partial_coverage_rounds() {
        let images = json!({"total_count": 3, "with_alt": 2});
        assert_eq!(score_images(&images).value, 67);
    }

    #[test]
    fn test_images_zero_total_is_zero() {
        let images = json!({"total_count": 0, "with_alt": 0});
        assert_eq!(score_images(&images).value, 0);
    }

    #[test]
    fn test_mobile_full() {
        let mobile = json!({
            "has_viewport": true,
            "viewport_content": "width=device-width, initial-scale=1.0",
        });
        assert_eq!(score_mobile(&mobile).value, 100);
    }

    #[test]
    fn test_mobile_viewport_only() {
        let mobile = json!({"has_viewport": true, "viewport_content": "width=1024"});
        assert_eq!(score_mobile(&mobile).value, 50);
    }

    #[test]
    fn test_mobile_absent() {
        assert_eq!(score_mobile(&json!({})).value, 0);
    }

    #[test]
    fn test_overall_weighted_sum() {
        let components = vec![
            CategoryScore { category: "meta_tags".into(), value: 80, breakdown: vec![] },
            CategoryScore { category: "headings".into(), value: 100, breakdown: vec![] },
            CategoryScore { category: "links".into(), value: 70, breakdown: vec![] },
            CategoryScore { category: "images".into(), value: 50, breakdown: vec![] },
            CategoryScore { category: "mobile".into(), value: 100, breakdown: vec![] },
        ];
        // 80*.25 + 100*.20 + 70*.20 + 50*.15 + 100*.20 = 81.5 -> 82
        assert_eq!(score_overall(&components).value, 82);
    }

    #[test]
    fn test_overall_breakdown_reconstructs_value() {
        // Mixes chosen so per-component contributions carry fractional
        // points (12.5, 7.5) that naive rounding would inflate.
        let mixes: [[u8; 5]; 4] = [
            [50, 50, 50, 50, 50],
            [80, 100, 70, 50, 100],
            [33, 67, 41, 90, 12],
            [100, 100, 100, 100, 100],
        ];
        for mix in mixes {
            let components: Vec<CategoryScore> = OVERALL_WEIGHTS
                .iter()
                .zip(mix)
                .map(|(&(name, _), value)| CategoryScore {
                    category: name.into(),
                    value,
                    breakdown: vec![],
                })
                .collect();
            let score = score_overall(&components);
            let awarded: u32 = score.breakdown.iter().map(|c| c.awarded).sum();
            let possible: u32 = score.breakdown.iter().map(|c| c.possible).sum();
            assert_eq!(possible, 100);
            assert_eq!(
                awarded,
                u32::from(score.value),
                "breakdown must sum back to the overall value for {mix:?}"
            );
        }
    }

    #[test]
    fn test_overall_missing_component_counts_zero() {
        let components = vec![CategoryScore {
            category: "meta_tags".into(),
            value: 100,
            breakdown: vec![],
        }];
        assert_eq!(score_overall(&components).value, 25);
    }

    #[test]
    fn test_all_scores_bounded() {
        let raw = json!({
            "meta_tags": {"title": "T"},
            "headings": {"h1": {"count": 3}},
            "links": {"internal": {"count": 1000000}},
            "images": {"total_count": 5, "with_alt": 9},
            "mobile_friendly": {"has_viewport": true},
        });
        for score in seo_scores(&raw) {
            assert!(score.value <= 100, "{} out of range", score.category);
        }
    }
}
