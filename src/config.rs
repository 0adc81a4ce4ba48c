//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured service URL.
pub const API_URL_ENV: &str = "RESUME_ANALYZER_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout in seconds. Unset leaves the transport default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub expand_feedback: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
                timeout_secs: None,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                expand_feedback: false,
            },
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_from_with_env(path, std::env::var(API_URL_ENV).ok())
    }

    /// Load from `path`, then apply `env_url` as if read from `API_URL_ENV`.
    pub fn load_from_with_env(path: &Path, env_url: Option<String>) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_api_url_override(env_url);

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Replace the base URL when an override is present and non-blank.
    pub fn apply_api_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api.base_url = url;
        }
    }

    /// Full URL of the analyze endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.api.base_url.trim_end_matches('/'))
    }
}
