//! Collector boundary
//!
//! Collectors retrieve raw, unprocessed signals about a URL. The actual
//! scraping, browser automation, and third-party API plumbing live outside
//! this crate; the core consumes collectors only through the narrow
//! [`Collector`] contract and recovers locally from any failure.
//!
//! The file-backed collector here is the operational entry point for the
//! CLI: it serves pre-collected signals from a JSON document keyed by
//! section name, the exact shape external scrapers hand off.

use crate::models::Section;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Key under which analytics signals appear in a signals document.
const ANALYTICS_KEY: &str = "analytics";

/// Contract for all signal collectors.
///
/// A collector that cannot produce data returns `Ok(None)`; an `Err` is
/// an internal fault the aggregator recovers from by treating the slot
/// as `None`. Neither outcome ever aborts a run.
pub trait Collector: Send + Sync {
    /// Unique identifier, used in logs.
    fn name(&self) -> &'static str;

    /// The section this collector feeds; `None` for the analytics
    /// collector, whose raw payload is attached to the report unanalyzed.
    fn section(&self) -> Option<Section>;

    /// Gather raw signals for the URL.
    fn collect_data(&self, url: &str) -> Result<Option<Value>>;
}

/// Serves one section's slice of a pre-collected signals document.
pub struct FileCollector {
    section: Section,
    data: Option<Value>,
}

impl FileCollector {
    pub fn new(section: Section, data: Option<Value>) -> Self {
        Self { section, data }
    }
}

impl Collector for FileCollector {
    fn name(&self) -> &'static str {
        match self.section {
            Section::Seo => "seo-signals-file",
            Section::Performance => "performance-signals-file",
            Section::Technical => "technical-signals-file",
            Section::Content => "content-signals-file",
        }
    }

    fn section(&self) -> Option<Section> {
        Some(self.section)
    }

    fn collect_data(&self, _url: &str) -> Result<Option<Value>> {
        Ok(self.data.clone())
    }
}

/// Serves the analytics slice of a pre-collected signals document.
///
/// Registered only when the document carries analytics data, mirroring
/// the credentials-gated registration of a live analytics collector.
pub struct AnalyticsCollector {
    data: Value,
}

impl AnalyticsCollector {
    pub fn new(data: Value) -> Self {
        Self { data }
    }
}

impl Collector for AnalyticsCollector {
    fn name(&self) -> &'static str {
        "analytics-signals-file"
    }

    fn section(&self) -> Option<Section> {
        None
    }

    fn collect_data(&self, _url: &str) -> Result<Option<Value>> {
        Ok(Some(self.data.clone()))
    }
}

/// Pre-collected signals for one analysis run, keyed by section.
pub struct SignalsDocument {
    root: Value,
}

impl SignalsDocument {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read signals file {}", path.display()))?;
        let root: Value = serde_json::from_str(&text)
            .with_context(|| format!("signals file {} is not valid JSON", path.display()))?;
        if !root.is_object() {
            anyhow::bail!("signals file {} must contain a JSON object", path.display());
        }
        Ok(Self { root })
    }

    /// Empty document; every collector built from it degrades.
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Default::default()),
        }
    }

    /// One collector per canonical section. Sections absent from the
    /// document yield collectors that report no data.
    pub fn collectors(&self) -> Vec<Box<dyn Collector>> {
        Section::ORDERED
            .iter()
            .map(|&section| {
                let slice = self
                    .root
                    .get(section.as_str())
                    .filter(|v| !v.is_null())
                    .cloned();
                if slice.is_none() {
                    warn!(section = section.as_str(), "no signals in document");
                }
                Box::new(FileCollector::new(section, slice)) as Box<dyn Collector>
            })
            .collect()
    }

    /// Analytics signals, if the document carries them. Analytics has no
    /// section analyzer; its raw payload is attached to the report as-is.
    pub fn analytics(&self) -> Option<Value> {
        self.root
            .get(ANALYTICS_KEY)
            .filter(|v| !v.is_null())
            .cloned()
    }

    /// Analytics collector, present only when the document has analytics
    /// data to serve.
    pub fn analytics_collector(&self) -> Option<Box<dyn Collector>> {
        self.analytics()
            .map(|data| Box::new(AnalyticsCollector::new(data)) as Box<dyn Collector>)
    }
}
