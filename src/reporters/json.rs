//! JSON reporter
//!
//! Outputs the full Report as pretty-printed JSON, the same document
//! shape the sink persists. Useful for piping to jq or further
//! processing.

use crate::models::Report;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["url"], "https://example.com");
        assert_eq!(
            parsed["sections"]["performance"]["narrative"],
            "Data not available"
        );
    }

    #[test]
    fn test_json_keys_stable_across_renders() {
        let report = test_report();
        assert_eq!(render(&report).unwrap(), render(&report).unwrap());
    }
}
