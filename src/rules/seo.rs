//! SEO recommendation rules

use crate::models::{Priority, Recommendation};
use crate::rules::{Rule, RuleContext};
use crate::signals;
use serde_json::Value;

/// Recommended title length range in characters.
const TITLE_RANGE: (usize, usize) = (50, 60);

/// Recommended meta description length range in characters.
const DESCRIPTION_RANGE: (usize, usize) = (120, 155);

/// Read a meta field from the collector's `meta_tags` object, falling back
/// to a top-level key for collectors that report flat payloads.
fn meta_field<'a>(raw: &'a Value, name: &str) -> Option<&'a str> {
    signals::str_at(raw, &format!("meta_tags.{name}")).or_else(|| signals::str_at(raw, name))
}

/// Title length outside the 50-60 character sweet spot.
pub struct TitleLengthRule;

impl Rule for TitleLengthRule {
    fn name(&self) -> &'static str {
        "title-length"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let Some(title) = meta_field(ctx.raw, "title") else {
            return Vec::new();
        };
        let length = title.chars().count();

        if length < TITLE_RANGE.0 {
            vec![Recommendation {
                issue: "Title too short".into(),
                priority: Priority::High,
                recommendation: format!(
                    "Increase title length to {}-{} characters",
                    TITLE_RANGE.0, TITLE_RANGE.1
                ),
                impact: "Better search visibility and CTR".into(),
                current: Some(title.to_string()),
                metric: None,
            }]
        } else if length > TITLE_RANGE.1 {
            vec![Recommendation {
                issue: "Title too long".into(),
                priority: Priority::Medium,
                recommendation: format!(
                    "Reduce title length to {}-{} characters",
                    TITLE_RANGE.0, TITLE_RANGE.1
                ),
                impact: "Prevent title truncation in search results".into(),
                current: Some(title.to_string()),
                metric: None,
            }]
        } else {
            Vec::new()
        }
    }
}

/// Meta description missing, or outside the 120-155 character range.
pub struct MetaDescriptionRule;

impl Rule for MetaDescriptionRule {
    fn name(&self) -> &'static str {
        "meta-description"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let description = meta_field(ctx.raw, "meta_description").unwrap_or("");
        if description.is_empty() {
            return vec![Recommendation {
                issue: "Missing meta description".into(),
                priority: Priority::High,
                recommendation: "Add a compelling meta description of 120-155 characters".into(),
                impact: "Improved click-through rates from search results".into(),
                ..Default::default()
            }];
        }

        let length = description.chars().count();
        if length < DESCRIPTION_RANGE.0 {
            vec![Recommendation {
                issue: "Meta description too short".into(),
                priority: Priority::High,
                recommendation: format!(
                    "Expand meta description to {}-{} characters",
                    DESCRIPTION_RANGE.0, DESCRIPTION_RANGE.1
                ),
                impact: "Improved click-through rates".into(),
                current: Some(description.to_string()),
                metric: None,
            }]
        } else if length > DESCRIPTION_RANGE.1 {
            vec![Recommendation {
                issue: "Meta description too long".into(),
                priority: Priority::Medium,
                recommendation: format!(
                    "Shorten meta description to {} characters",
                    DESCRIPTION_RANGE.1
                ),
                impact: "Prevent truncation in search results".into(),
                current: Some(description.to_string()),
                metric: None,
            }]
        } else {
            Vec::new()
        }
    }
}

/// H1 structure: pages need exactly one H1.
pub struct H1CountRule;

impl Rule for H1CountRule {
    fn name(&self) -> &'static str {
        "h1-count"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let h1_count = signals::count_at(ctx.raw, "headings.h1.count").unwrap_or(0);

        if h1_count == 0 {
            vec![Recommendation {
                issue: "Missing H1 heading".into(),
                priority: Priority::High,
                recommendation: "Add a primary H1 heading".into(),
                impact: "Improved content hierarchy and SEO".into(),
                ..Default::default()
            }]
        } else if h1_count > 1 {
            vec![Recommendation {
                issue: "Multiple H1 headings".into(),
                priority: Priority::Medium,
                recommendation: "Use only one H1 heading per page".into(),
                impact: "Better content structure".into(),
                current: Some(format!("{h1_count} H1 headings")),
                metric: None,
            }]
        } else {
            Vec::new()
        }
    }
}

/// The standard SEO rule set, in emission order.
pub fn seo_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(TitleLengthRule),
        Box::new(MetaDescriptionRule),
        Box::new(H1CountRule),
    ]
}
