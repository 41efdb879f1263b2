//! Report persistence
//!
//! Writes a finished Report as pretty-printed UTF-8 JSON. The filename is
//! derived from the URL and the report timestamp so repeated runs against
//! the same URL never collide. A write failure is the only fatal error
//! after data collection completes.

use crate::models::Report;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to create output directory {dir}: {source}")]
    CreateDir {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// JSON file sink for finished reports.
pub struct JsonSink {
    output_dir: PathBuf,
}

impl JsonSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Persist the report, returning the path written.
    pub fn write(&self, report: &Report) -> Result<PathBuf, SinkError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| SinkError::CreateDir {
            dir: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_dir.join(filename(&report.url, &report.timestamp));
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(&path, json).map_err(|source| SinkError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "report written");
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// `<url-slug>_<YYYYmmdd_HHMMSS>.json`, scheme stripped and path
/// separators flattened.
fn filename(url: &str, timestamp: &str) -> String {
    let key = timestamp
        .parse::<DateTime<Utc>>()
        .unwrap_or_else(|_| Utc::now())
        .format("%Y%m%d_%H%M%S");
    format!("{}_{key}.json", url_slug(url))
}

fn url_slug(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .replace('/', "_")
}
