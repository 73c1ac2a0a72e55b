//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_search::search::SearchConfig;

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: &[&str] = &["storefront.toml", ".storefront.toml"];

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "STOREFRONT_API_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Search service settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Parse a TOML document.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply the environment and command line endpoint overrides, in that order.
    pub fn with_overrides(mut self, env_endpoint: Option<String>, flag: Option<&str>) -> Self {
        if let Some(endpoint) = env_endpoint.filter(|e| !e.trim().is_empty()) {
            self.search.endpoint = endpoint;
        }
        if let Some(endpoint) = flag {
            self.search.endpoint = endpoint.to_string();
        }
        self
    }
}

/// Output preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Show the service's explanation above the results.
    #[serde(default = "default_true")]
    pub show_explanation: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_explanation: true,
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront search configuration

[search]
endpoint = "http://localhost:8000/api/search"
# "openai" or "gemini"
llm_provider = "openai"
timeout_ms = 30000

[output]
show_explanation = true
"#
    .to_string()
}
