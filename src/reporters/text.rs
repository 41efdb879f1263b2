//! Text (terminal) reporter

use crate::models::{Priority, Report, Section};
use anyhow::Result;
use console::style;

/// How many recommendations to show per section.
const RECOMMENDATIONS_SHOWN: usize = 5;

fn priority_tag(priority: Priority) -> String {
    match priority {
        Priority::High => style("[H]").red().to_string(),
        Priority::Medium => style("[M]").yellow().to_string(),
        Priority::Low => style("[L]").blue().to_string(),
    }
}

fn score_style(value: u8) -> String {
    let text = format!("{value}/100");
    match value {
        70..=100 => style(text).green().to_string(),
        50..=69 => style(text).yellow().to_string(),
        _ => style(text).red().to_string(),
    }
}

/// Render report as formatted terminal output
pub fn render(report: &Report) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{} {}\n",
        style("Siteaudit Report").bold(),
        style(&report.url).underlined()
    ));
    out.push_str(&format!(
        "{}\n",
        style("──────────────────────────────────────").dim()
    ));

    for section in Section::ORDERED {
        let Some(result) = report.sections.get(&section) else {
            continue;
        };
        out.push_str(&format!(
            "\n{}\n",
            style(section.as_str().to_uppercase()).bold()
        ));

        if result.is_degraded() {
            out.push_str(&format!("  {}\n", style("data not available").dim()));
            continue;
        }

        if !result.scores.is_empty() {
            let line = result
                .scores
                .iter()
                .map(|s| format!("{}: {}", s.category, score_style(s.value)))
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(&format!("  {line}\n"));
        }

        for rec in result.recommendations.iter().take(RECOMMENDATIONS_SHOWN) {
            out.push_str(&format!(
                "  {} {} - {}\n",
                priority_tag(rec.priority),
                rec.issue,
                rec.recommendation
            ));
        }
        let hidden = result.recommendations.len().saturating_sub(RECOMMENDATIONS_SHOWN);
        if hidden > 0 {
            out.push_str(&format!("  {}\n", style(format!("(+{hidden} more)")).dim()));
        }

        if let Some(narrative) = &result.narrative {
            out.push_str(&format!("  {}\n", style(narrative).italic()));
        }
    }

    out.push_str(&format!("\n{}\n", style("SUMMARY").bold()));
    if !report.summary.critical_issues.is_empty() {
        out.push_str(&format!("  {}\n", style("Critical issues:").red()));
        for issue in &report.summary.critical_issues {
            out.push_str(&format!("    - {issue}\n"));
        }
    }
    if !report.summary.positive_aspects.is_empty() {
        out.push_str(&format!("  {}\n", style("Positive aspects:").green()));
        for aspect in &report.summary.positive_aspects {
            out.push_str(&format!("    - {aspect}\n"));
        }
    }
    out.push_str(&format!("  {}\n", style("Priority actions:").bold()));
    for (i, action) in report.summary.priority_actions.iter().enumerate() {
        out.push_str(&format!("    {}. {action}\n", i + 1));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_sections_and_summary() {
        let text = render(&test_report()).expect("render text");
        assert!(text.contains("SEO"));
        assert!(text.contains("Missing meta description"));
        assert!(text.contains("data not available"));
        assert!(text.contains("Priority actions:"));
        assert!(text.contains("1. Add a compelling meta description"));
    }

    #[test]
    fn test_text_render_skips_missing_sections() {
        let mut report = test_report();
        report.sections.clear();
        let text = render(&report).expect("render text");
        assert!(!text.contains("SEO\n"));
        assert!(text.contains("SUMMARY"));
    }
}
