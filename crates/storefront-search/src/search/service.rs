//! The search service seam and its HTTP implementation.

use crate::error::SearchError;
use crate::search::{decode_result, SearchConfig, SearchRequest, SearchResult};
use async_trait::async_trait;
use std::sync::Arc;
use storefront_data::FetchClient;

/// Something that can answer a [`SearchRequest`].
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError>;
}

#[async_trait]
impl<T: SearchService + ?Sized> SearchService for Arc<T> {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        (**self).search(request).await
    }
}

/// POSTs requests as JSON to a configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpSearchService {
    client: FetchClient,
    endpoint: String,
}

impl HttpSearchService {
    pub fn new(config: &SearchConfig) -> Self {
        let client = FetchClient::new()
            .with_base_url(config.endpoint.clone())
            .with_default_header("Accept", "application/json")
            .with_timeout(config.timeout());
        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchService for HttpSearchService {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        let response = self
            .client
            .post("")
            .json(request)?
            .send()
            .await?
            .error_for_status()?;
        decode_result(&response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{FilterAction, FilterSelection, QueryComposer};
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn config_for(server: &Server) -> SearchConfig {
        SearchConfig::default()
            .with_endpoint(format!("{}/api/search", server.url()))
            .with_timeout_ms(2_000)
    }

    #[tokio::test]
    async fn test_search_posts_request_and_decodes() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/search")
            .match_header("accept", "application/json")
            .match_body(Matcher::Json(json!({
                "query": "notebook",
                "filters": {"brands": ["Lenovo"]},
                "llm_provider": "openai"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"products": [{"id": 3, "name": "Lenovo LOQ", "price": 35990, "sellprice": 32990}],
                    "explanation": "ok"}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let filters = FilterSelection::default().apply(FilterAction::ToggleBrand("Lenovo".into()));
        let request = QueryComposer::new()
            .with_provider(crate::search::LlmProvider::OpenAi)
            .compose("notebook", &filters)
            .unwrap();

        let service = HttpSearchService::new(&config_for(&server));
        let result = service.search(&request).await.unwrap();

        assert_eq!(result.products[0].name, "Lenovo LOQ");
        assert_eq!(result.explanation, "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_failure_maps_to_http_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/search")
            .with_status(500)
            .with_body(r#"{"detail": "boom"}"#)
            .create_async()
            .await;

        let service = HttpSearchService::new(&config_for(&server));
        let request = QueryComposer::new()
            .compose("x", &FilterSelection::default())
            .unwrap();
        let err = service.search(&request).await.unwrap_err();
        assert!(matches!(err, SearchError::Http { status: 500 }));
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_malformed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/search")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let service = HttpSearchService::new(&config_for(&server));
        let request = QueryComposer::new()
            .compose("x", &FilterSelection::default())
            .unwrap();
        let err = service.search(&request).await.unwrap_err();
        assert_eq!(err.kind(), "malformed");
    }
}
