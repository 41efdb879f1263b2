//! Report aggregation
//!
//! The aggregator owns one analysis run end to end: it fans out to the
//! configured collectors, feeds each section's raw signals through the
//! section analyzer in a fixed order, synthesizes the executive summary,
//! and hands the finished Report to the sink. A failing collector
//! degrades its section; it never aborts the run.

mod sink;
pub mod summary;

pub use sink::{JsonSink, SinkError};

use crate::ai::TextCompleter;
use crate::analyzer::SectionAnalyzer;
use crate::collectors::Collector;
use crate::config::AuditConfig;
use crate::models::{Report, Section};
use chrono::Utc;
use rayon::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Top-level orchestrator for one audit run.
pub struct ReportAggregator {
    config: AuditConfig,
    collectors: Vec<Box<dyn Collector>>,
    analyzer: SectionAnalyzer,
}

impl ReportAggregator {
    pub fn new(
        config: AuditConfig,
        collectors: Vec<Box<dyn Collector>>,
        completer: Option<Arc<dyn TextCompleter>>,
    ) -> Self {
        Self {
            config,
            collectors,
            analyzer: SectionAnalyzer::new(completer),
        }
    }

    /// Run the full pipeline and assemble one Report.
    ///
    /// Collectors run in parallel; they share no state and fill disjoint
    /// slots. Results are joined before analysis, which always proceeds
    /// in the fixed section order so summary text is deterministic for
    /// identical inputs.
    pub fn generate(&self, url: &str) -> Report {
        let collected: Vec<(Option<Section>, Option<Value>)> = self
            .collectors
            .par_iter()
            .map(|collector| {
                info!(collector = collector.name(), "collecting");
                let raw = match collector.collect_data(url) {
                    Ok(raw) => raw,
                    Err(e) => {
                        warn!(collector = collector.name(), error = %e, "collector failed");
                        None
                    }
                };
                (collector.section(), raw)
            })
            .collect();

        let mut slots: BTreeMap<Section, Option<Value>> = BTreeMap::new();
        let mut analytics = None;
        for (section, raw) in collected {
            match section {
                Some(section) => {
                    slots.insert(section, raw);
                }
                None => analytics = raw,
            }
        }

        let mut sections = BTreeMap::new();
        for section in Section::ORDERED {
            let raw = slots.remove(&section).flatten();
            sections.insert(section, self.analyzer.analyze(section, raw));
        }

        let summary = summary::build(&sections);

        Report {
            url: url.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            sections,
            analytics,
            summary,
        }
    }

    /// Generate and persist in one step. The sink write is the only
    /// fatal error after collection has completed.
    pub fn generate_and_save(&self, url: &str) -> Result<(Report, std::path::PathBuf), SinkError> {
        let report = self.generate(url);
        let sink = JsonSink::new(&self.config.output_dir);
        let path = sink.write(&report)?;
        Ok((report, path))
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::FileCollector;
    use crate::models::DATA_NOT_AVAILABLE;
    use anyhow::anyhow;
    use serde_json::json;

    struct FaultyCollector(Section);
    impl Collector for FaultyCollector {
        fn name(&self) -> &'static str {
            "faulty"
        }
        fn section(&self) -> Option<Section> {
            Some(self.0)
        }
        fn collect_data(&self, _url: &str) -> anyhow::Result<Option<Value>> {
            Err(anyhow!("connection reset"))
        }
    }

    fn aggregator(collectors: Vec<Box<dyn Collector>>) -> ReportAggregator {
        ReportAggregator::new(AuditConfig::default(), collectors, None)
    }

    #[test]
    fn test_all_sections_present_even_with_no_collectors() {
        let report = aggregator(vec![]).generate("https://example.com");
        assert_eq!(report.sections.len(), 4);
        for section in Section::ORDERED {
            assert!(report.sections[&section].is_degraded());
        }
        assert_eq!(report.summary.priority_actions.len(), 3);
    }

    #[test]
    fn test_failing_collector_degrades_its_section_only() {
        let collectors: Vec<Box<dyn Collector>> = vec![
            Box::new(FileCollector::new(
                Section::Seo,
                Some(json!({"meta_tags": {"title": "Home"}})),
            )),
            Box::new(FaultyCollector(Section::Performance)),
        ];
        let report = aggregator(collectors).generate("https://example.com");

        assert!(!report.sections[&Section::Seo].is_degraded());
        let performance = &report.sections[&Section::Performance];
        assert!(performance.is_degraded());
        assert_eq!(performance.narrative.as_deref(), Some(DATA_NOT_AVAILABLE));
        assert!(performance.scores.is_empty());
        assert_eq!(report.summary.priority_actions.len(), 3);
    }

    #[test]
    fn test_critical_issues_flow_from_sections() {
        let collectors: Vec<Box<dyn Collector>> = vec![Box::new(FileCollector::new(
            Section::Seo,
            Some(json!({
                "meta_tags": {"title": "Home", "meta_description": null},
                "headings": {"h1": {"count": 0}},
            })),
        ))];
        let report = aggregator(collectors).generate("https://example.com");

        let issues = &report.summary.critical_issues;
        assert!(issues.contains(&"Missing meta description".to_string()));
        assert!(issues.contains(&"Missing H1 heading".to_string()));
    }

    #[test]
    fn test_report_has_timestamp_and_url() {
        let report = aggregator(vec![]).generate("https://example.com/page");
        assert_eq!(report.url, "https://example.com/page");
        assert!(report.timestamp.parse::<chrono::DateTime<Utc>>().is_ok());
    }
}
