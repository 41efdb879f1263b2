//! Configuration for Siteaudit
//!
//! All process-wide settings (output directory, request identity, AI
//! generation parameters) are explicit values handed to the aggregator at
//! construction time. Loading order, lowest priority first:
//! - built-in defaults
//! - user config (~/.config/siteaudit/config.toml)
//! - environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Generation parameters for the narrative collaborator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AiSettings {
    /// Backend: "anthropic" (default), "openai", "ollama"
    pub backend: Option<String>,

    /// Model override; backend default when unset
    pub model: Option<String>,

    /// Token limit per narrative
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            backend: None,
            model: None,
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Top-level audit configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Directory report JSON files are written to
    pub output_dir: PathBuf,

    /// User-Agent header external collectors should present
    pub user_agent: String,

    /// Delay between collector requests, in seconds (collector-internal)
    pub request_delay_secs: u64,

    /// Path to analytics credentials; analytics collection is enabled
    /// only when this file exists
    pub google_credentials: Option<PathBuf>,

    #[serde(rename = "ai")]
    pub ai: AiSettings,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            user_agent: concat!("siteaudit/", env!("CARGO_PKG_VERSION")).to_string(),
            request_delay_secs: 2,
            google_credentials: None,
            ai: AiSettings::default(),
        }
    }
}

impl AuditConfig {
    /// Load config from all sources.
    pub fn load() -> Result<Self> {
        let mut config = AuditConfig::default();

        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
        {
            match toml::from_str::<AuditConfig>(&user_config) {
                Ok(parsed) => config = parsed,
                Err(e) => tracing::warn!(error = %e, "ignoring malformed user config"),
            }
        }

        config.apply_env();
        Ok(config)
    }

    /// Environment variables override everything.
    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var("SITEAUDIT_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Ok(agent) = std::env::var("SITEAUDIT_USER_AGENT") {
            self.user_agent = agent;
        }
        if let Ok(delay) = std::env::var("SITEAUDIT_REQUEST_DELAY") {
            if let Ok(secs) = delay.parse() {
                self.request_delay_secs = secs;
            }
        }
        if let Ok(creds) = std::env::var("GOOGLE_APPLICATION_CREDENTIALS") {
            self.google_credentials = Some(PathBuf::from(creds));
        }
        if let Ok(backend) = std::env::var("SITEAUDIT_AI_BACKEND") {
            self.ai.backend = Some(backend);
        }
        if let Ok(model) = std::env::var("SITEAUDIT_AI_MODEL") {
            self.ai.model = Some(model);
        }
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("siteaudit").join("config.toml"))
    }

    /// Analytics collection is enabled only when credentials exist on disk.
    pub fn analytics_enabled(&self) -> bool {
        self.google_credentials
            .as_deref()
            .is_some_and(|p| p.exists())
    }
}
