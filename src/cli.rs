//! CLI command definition and handler

use crate::ai::{AiClient, AiConfig, TextCompleter};
use crate::collectors::SignalsDocument;
use crate::config::AuditConfig;
use crate::report::ReportAggregator;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Siteaudit - website quality analysis
#[derive(Parser, Debug)]
#[command(name = "siteaudit")]
#[command(
    version,
    about = "Website quality audit — score SEO, performance, technical, and content signals and get prioritized recommendations",
    long_about = "Siteaudit turns pre-collected website signals into normalized category \
scores, prioritized recommendations, and an executive summary with three \
priority actions.\n\n\
Signal collection (scraping, Lighthouse, security probes) runs out of \
process; feed its JSON output in with --signals. Sections without signals \
appear in the report explicitly marked as degraded.",
    after_help = "\
Examples:
  siteaudit https://example.com --signals signals.json     Full audit from collected signals
  siteaudit https://example.com --signals s.json -f json   JSON output for scripting
  siteaudit https://example.com --no-narrative             Skip AI narrative generation
  SITEAUDIT_AI_BACKEND=ollama siteaudit https://example.com --signals s.json"
)]
pub struct Cli {
    /// URL being audited
    pub url: String,

    /// Pre-collected signals JSON (object keyed by section name)
    #[arg(long, short = 's')]
    pub signals: Option<PathBuf>,

    /// Output directory for the report JSON
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Skip narrative generation even if an AI backend is configured
    #[arg(long)]
    pub no_narrative: bool,

    /// Do not write the report JSON to disk
    #[arg(long)]
    pub no_save: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Run the audit. Exit code is zero whenever a report was produced,
/// degraded sections included; only an aggregator-level failure (bad
/// signals file, sink write error) is fatal.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = AuditConfig::load()?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    let document = match &cli.signals {
        Some(path) => SignalsDocument::from_path(path)?,
        None => SignalsDocument::empty(),
    };
    let mut collectors = document.collectors();
    if let Some(analytics) = document.analytics_collector() {
        collectors.push(analytics);
    }

    let completer = if cli.no_narrative {
        None
    } else {
        build_completer(&config)
    };

    let aggregator = ReportAggregator::new(config.clone(), collectors, completer);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Auditing {}...", cli.url));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = if cli.no_save {
        let report = aggregator.generate(&cli.url);
        spinner.finish_and_clear();
        report
    } else {
        let result = aggregator.generate_and_save(&cli.url);
        spinner.finish_and_clear();
        let (report, path) = result.context("failed to persist report")?;
        eprintln!("Report saved to {}", path.display());
        report
    };

    let format: OutputFormat = cli.format.parse()?;
    println!("{}", reporters::render(&report, format)?);
    Ok(())
}

/// Build the narrative collaborator from config. A missing API key is
/// not fatal: the audit proceeds without narratives.
fn build_completer(config: &AuditConfig) -> Option<Arc<dyn TextCompleter>> {
    let backend = match config.ai.backend.as_deref() {
        Some(name) => match name.parse() {
            Ok(backend) => backend,
            Err(e) => {
                warn!(error = %e, "invalid AI backend, skipping narratives");
                return None;
            }
        },
        None => Default::default(),
    };

    let ai_config = AiConfig {
        backend,
        model: config.ai.model.clone(),
        max_tokens: config.ai.max_tokens,
        temperature: config.ai.temperature,
        ..Default::default()
    };

    match AiClient::from_env_with_config(ai_config) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!(error = %e, "AI client unavailable, skipping narratives");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["siteaudit", "https://example.com"]);
        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.format, "text");
        assert!(!cli.no_narrative);
        assert!(cli.signals.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "siteaudit",
            "https://example.com",
            "--signals",
            "signals.json",
            "-f",
            "json",
            "--no-save",
        ]);
        assert_eq!(cli.signals.unwrap(), PathBuf::from("signals.json"));
        assert_eq!(cli.format, "json");
        assert!(cli.no_save);
    }
}
