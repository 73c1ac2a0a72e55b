//! Search request composition.

use crate::search::FilterSelection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language model backend the search service should rank with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    OpenAi,
    Gemini,
}

impl LlmProvider {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "openai",
            LlmProvider::Gemini => "gemini",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(LlmProvider::OpenAi),
            "gemini" => Ok(LlmProvider::Gemini),
            other => Err(format!("unknown LLM provider: {other}")),
        }
    }
}

/// Structured constraints as sent to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPayload {
    /// Selected brands, sorted.
    pub brands: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<i64>,
}

impl From<&FilterSelection> for FilterPayload {
    fn from(selection: &FilterSelection) -> Self {
        Self {
            brands: selection.brands.iter().cloned().collect(),
            cpu: selection.cpu.clone(),
            price_min: selection.price_range.map(|r| r.min()),
            price_max: selection.price_range.map(|r| r.max()),
        }
    }
}

/// The outbound search request.
///
/// `filters` is omitted entirely when nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_provider: Option<LlmProvider>,
}

/// Combines free text and filter selections into a [`SearchRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryComposer {
    provider: Option<LlmProvider>,
}

impl QueryComposer {
    /// Composer that leaves the provider choice to the service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the service to rank with `provider`.
    pub fn with_provider(mut self, provider: LlmProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn provider(&self) -> Option<LlmProvider> {
        self.provider
    }

    /// Build a request, or `None` when the text is empty after trimming.
    ///
    /// Pure: the same inputs always produce the same request.
    pub fn compose(&self, text: &str, filters: &FilterSelection) -> Option<SearchRequest> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }
        Some(SearchRequest {
            query: query.to_string(),
            filters: (!filters.is_empty()).then(|| FilterPayload::from(filters)),
            llm_provider: self.provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{FilterAction, PriceRange};
    use serde_json::json;

    #[test]
    fn test_blank_text_composes_nothing() {
        let composer = QueryComposer::new();
        let filters = FilterSelection::default().apply(FilterAction::ToggleBrand("MSI".into()));
        assert_eq!(composer.compose("", &filters), None);
        assert_eq!(composer.compose(" \t\n", &filters), None);
    }

    #[test]
    fn test_text_is_trimmed_and_filters_omitted_when_empty() {
        let request = QueryComposer::new()
            .compose("  gaming laptop ", &FilterSelection::default())
            .unwrap();
        assert_eq!(request.query, "gaming laptop");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"query": "gaming laptop"})
        );
    }

    #[test]
    fn test_filters_serialize_in_wire_shape() {
        let filters = FilterSelection::default()
            .apply(FilterAction::ToggleBrand("MSI".into()))
            .apply(FilterAction::ToggleBrand("ASUS".into()))
            .apply(FilterAction::SetCpu("AMD".into()))
            .apply(FilterAction::SetPriceRange(PriceRange::new(20000, 30000).unwrap()));

        let request = QueryComposer::new()
            .with_provider(LlmProvider::Gemini)
            .compose("ryzen", &filters)
            .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "ryzen",
                "filters": {
                    "brands": ["ASUS", "MSI"],
                    "cpu": "AMD",
                    "priceMin": 20000,
                    "priceMax": 30000
                },
                "llm_provider": "gemini"
            })
        );
    }

    #[test]
    fn test_partial_filters_skip_absent_fields() {
        let filters = FilterSelection::default().apply(FilterAction::SetCpu("Intel".into()));
        let request = QueryComposer::new().compose("i7", &filters).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap()["filters"],
            json!({"brands": [], "cpu": "Intel"})
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let composer = QueryComposer::new().with_provider(LlmProvider::OpenAi);
        let filters = FilterSelection::default().apply(FilterAction::ToggleBrand("HP".into()));
        assert_eq!(
            composer.compose("notebook", &filters),
            composer.compose("notebook", &filters)
        );
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!("Gemini".parse::<LlmProvider>(), Ok(LlmProvider::Gemini));
        assert_eq!("openai".parse::<LlmProvider>(), Ok(LlmProvider::OpenAi));
        assert!("claude".parse::<LlmProvider>().is_err());
    }
}
