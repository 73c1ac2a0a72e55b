//! Search service configuration.

use crate::search::LlmProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/search";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Where and how to reach the search service.
///
/// Built by the embedding application; nothing in this crate reads the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Full URL the request is POSTed to. Not validated.
    pub endpoint: String,
    /// Ranking backend to request, if any.
    pub llm_provider: Option<LlmProvider>,
    pub timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            llm_provider: Some(LlmProvider::OpenAi),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SearchConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_provider(mut self, provider: Option<LlmProvider>) -> Self {
        self.llm_provider = provider;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000/api/search");
        assert_eq!(config.llm_provider, Some(LlmProvider::OpenAi));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"endpoint": "https://search.internal/api", "llm_provider": "gemini"}"#)
                .unwrap();
        assert_eq!(config.endpoint, "https://search.internal/api");
        assert_eq!(config.llm_provider, Some(LlmProvider::Gemini));
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
