//! Technical recommendation rules: security headers and accessibility

use crate::models::{Priority, Recommendation};
use crate::rules::{Rule, RuleContext};
use crate::signals;
use serde_json::Value;

/// Missing X-Frame-Options response header.
pub struct XFrameOptionsRule;

impl Rule for XFrameOptionsRule {
    fn name(&self) -> &'static str {
        "x-frame-options"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        // No headers payload at all means the check could not run.
        let Some(headers) = signals::get(ctx.raw, "security.headers") else {
            return Vec::new();
        };
        if signals::has_text(headers, "x_frame_options") {
            return Vec::new();
        }
        vec![Recommendation {
            issue: "Missing X-Frame-Options header".into(),
            priority: Priority::High,
            recommendation: "Add X-Frame-Options header".into(),
            impact: "Prevent clickjacking attacks".into(),
            ..Default::default()
        }]
    }
}

/// Missing Content-Security-Policy response header.
pub struct ContentSecurityPolicyRule;

impl Rule for ContentSecurityPolicyRule {
    fn name(&self) -> &'static str {
        "content-security-policy"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let Some(headers) = signals::get(ctx.raw, "security.headers") else {
            return Vec::new();
        };
        if signals::has_text(headers, "content_security_policy") {
            return Vec::new();
        }
        vec![Recommendation {
            issue: "Missing Content Security Policy".into(),
            priority: Priority::High,
            recommendation: "Implement Content Security Policy".into(),
            impact: "Prevent XSS and other injections".into(),
            ..Default::default()
        }]
    }
}

/// Accessibility basic checks: one recommendation per failing check.
pub struct AccessibilityChecksRule;

impl Rule for AccessibilityChecksRule {
    fn name(&self) -> &'static str {
        "accessibility-basic-checks"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let Some(checks) = signals::get(ctx.raw, "accessibility.basic_checks")
            .and_then(Value::as_object)
        else {
            return Vec::new();
        };

        checks
            .iter()
            .filter(|(_, status)| matches!(status, Value::Bool(false)))
            .map(|(check, _)| Recommendation {
                issue: format!("Accessibility: {check}"),
                priority: Priority::High,
                recommendation: format!("Fix {check} for better accessibility"),
                impact: "Improved accessibility compliance".into(),
                ..Default::default()
            })
            .collect()
    }
}

/// The standard technical rule set, in emission order.
pub fn technical_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(XFrameOptionsRule),
        Box::new(ContentSecurityPolicyRule),
        Box::new(AccessibilityChecksRule),
    ]
}
