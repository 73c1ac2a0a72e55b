//! Search results as returned by the service.

use crate::catalog::{LegacyProduct, Product};
use crate::error::SearchError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Explanation shown when a search could not be completed.
pub const DEGRADED_EXPLANATION: &str = "เกิดข้อผิดพลาดในการค้นหา";

/// The service's ranking note for one product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub product_id: ProductId,
    /// 1 is best.
    pub rank: u32,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pros: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cons: Option<Vec<String>>,
}

impl RecommendationItem {
    pub fn new(product_id: impl Into<ProductId>, rank: u32) -> Self {
        Self {
            product_id: product_id.into(),
            rank,
            score: 0.0,
            reasons: Vec::new(),
            pros: None,
            cons: None,
        }
    }

    pub fn with_reasons<I, S>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reasons = reasons.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }
}

/// A ranked product set with the service's commentary.
///
/// `products` keeps the service's relevance order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub products: Vec<Product>,
    #[serde(default, alias = "ranking_explanation")]
    pub explanation: String,
    #[serde(
        default,
        rename = "totalFound",
        skip_serializing_if = "Option::is_none"
    )]
    total_found: Option<u64>,
    #[serde(default)]
    pub recommendations: Vec<RecommendationItem>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl SearchResult {
    /// Result with the given products and explanation.
    pub fn new(products: Vec<Product>, explanation: impl Into<String>) -> Self {
        Self {
            products,
            explanation: explanation.into(),
            ..Default::default()
        }
    }

    /// The result rendered when a search fails.
    pub fn degraded() -> Self {
        Self::new(Vec::new(), DEGRADED_EXPLANATION)
    }

    pub fn with_total_found(mut self, total: u64) -> Self {
        self.total_found = Some(total);
        self
    }

    pub fn with_recommendations(mut self, recommendations: Vec<RecommendationItem>) -> Self {
        self.recommendations = recommendations;
        self
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    /// Total matches reported by the service, falling back to the page size.
    pub fn total_found(&self) -> u64 {
        self.total_found.unwrap_or(self.products.len() as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The recommendation for `id`, if the service ranked it.
    pub fn recommendation_for(&self, id: &ProductId) -> Option<&RecommendationItem> {
        self.recommendations.iter().find(|r| &r.product_id == id)
    }

    /// Product with the given id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

#[derive(Deserialize)]
struct LegacySearchResponse {
    products: Vec<LegacyProduct>,
    #[serde(default)]
    ranking_explanation: String,
    #[serde(default)]
    suggestions: Vec<String>,
}

impl From<LegacySearchResponse> for SearchResult {
    fn from(legacy: LegacySearchResponse) -> Self {
        SearchResult::new(
            legacy.products.into_iter().map(Product::from).collect(),
            legacy.ranking_explanation,
        )
        .with_suggestions(legacy.suggestions)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireResult {
    Current(SearchResult),
    Legacy(LegacySearchResponse),
}

/// Decode a response body in either the current or the Thai-keyed schema.
pub fn decode_result(body: &[u8]) -> Result<SearchResult, SearchError> {
    let wire: WireResult = serde_json::from_slice(body).map_err(|e| {
        SearchError::MalformedResponse(format!("unrecognized search response: {e}"))
    })?;
    Ok(match wire {
        WireResult::Current(result) => result,
        WireResult::Legacy(legacy) => {
            tracing::debug!(products = legacy.products.len(), "decoded legacy search response");
            legacy.into()
        }
    })
}
