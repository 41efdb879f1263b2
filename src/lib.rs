//! Siteaudit - website quality audit core
//!
//! Converts heterogeneous website signals (SEO markup, performance
//! metrics, technical and security checks, content metrics) into
//! normalized category scores, prioritized recommendations, and a single
//! structured report with an executive summary.

pub mod ai;
pub mod analyzer;
pub mod cli;
pub mod collectors;
pub mod config;
pub mod models;
pub mod report;
pub mod reporters;
pub mod rules;
pub mod scoring;
pub mod signals;
