//! Performance recommendation rules
//!
//! Thresholds are fixed constants matching the audit methodology; they are
//! deliberately not configurable at call time. A production deployment
//! wanting per-site budgets would externalize them into config.

use crate::models::{Priority, Recommendation};
use crate::rules::{Rule, RuleContext};
use crate::signals;

/// Page load time budget in seconds.
const LOAD_TIME_LIMIT_SECS: f64 = 3.0;

/// First Contentful Paint budget in seconds.
const FCP_LIMIT_SECS: f64 = 2.0;

/// Largest Contentful Paint budget in seconds.
const LCP_LIMIT_SECS: f64 = 2.5;

/// Total page load time over budget.
pub struct LoadTimeRule;

impl Rule for LoadTimeRule {
    fn name(&self) -> &'static str {
        "load-time"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let Some(load_time) = signals::f64_at(ctx.raw, "load_time") else {
            return Vec::new();
        };
        if load_time <= LOAD_TIME_LIMIT_SECS {
            return Vec::new();
        }
        vec![Recommendation {
            issue: "Slow page load time".into(),
            priority: Priority::High,
            recommendation: "Optimize images, minify CSS/JS, use caching".into(),
            impact: "Improved user experience and SEO".into(),
            current: None,
            metric: Some(format!("{load_time:.2} seconds")),
        }]
    }
}

/// First Contentful Paint over budget.
pub struct FcpRule;

impl Rule for FcpRule {
    fn name(&self) -> &'static str {
        "first-contentful-paint"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let Some(fcp) = signals::f64_at(ctx.raw, "metrics.fcp") else {
            return Vec::new();
        };
        if fcp <= FCP_LIMIT_SECS {
            return Vec::new();
        }
        vec![Recommendation {
            issue: "High First Contentful Paint".into(),
            priority: Priority::High,
            recommendation: "Optimize critical rendering path".into(),
            impact: "Faster perceived load times".into(),
            current: None,
            metric: Some(format!("{fcp} seconds")),
        }]
    }
}

/// Largest Contentful Paint over budget.
pub struct LcpRule;

impl Rule for LcpRule {
    fn name(&self) -> &'static str {
        "largest-contentful-paint"
    }

    fn evaluate(&self, ctx: &RuleContext) -> Vec<Recommendation> {
        let Some(lcp) = signals::f64_at(ctx.raw, "metrics.lcp") else {
            return Vec::new();
        };
        if lcp <= LCP_LIMIT_SECS {
            return Vec::new();
        }
        vec![Recommendation {
            issue: "High Largest Contentful Paint".into(),
            priority: Priority::High,
            recommendation: "Optimize largest page element".into(),
            impact: "Better Core Web Vitals score".into(),
            current: None,
            metric: Some(format!("{lcp} seconds")),
        }]
    }
}

/// The standard performance rule set, in emission order.
pub fn performance_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(LoadTimeRule), Box::new(FcpRule), Box::new(LcpRule)]
}
