//! JSON-over-HTTP fetch client for the storefront search workspace.
//!
//! A thin builder API over `reqwest` with JSON helpers, a base URL and
//! default headers. It carries no retry policy: a failed exchange is
//! reported once and the caller decides what to do with it.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_data::FetchClient;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize)]
//! struct Query<'a> {
//!     query: &'a str,
//! }
//!
//! #[derive(Deserialize)]
//! struct Answer {
//!     products: Vec<serde_json::Value>,
//! }
//!
//! # async fn run() -> Result<(), storefront_data::FetchError> {
//! let client = FetchClient::new().with_base_url("http://localhost:8000");
//!
//! let answer: Answer = client
//!     .post("/api/search")
//!     .json(&Query { query: "rtx 4060" })?
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! # let _ = answer.products;
//! # Ok(())
//! # }
//! ```

mod error;
mod request;
mod response;

use std::collections::HashMap;
use std::time::Duration;

pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;

/// HTTP client for making outbound requests.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
            timeout: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Apply a timeout to every request built from this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a POST request. An empty `url` targets the base URL itself.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let full_url = self.resolve_url(url.into());

        let mut builder = RequestBuilder::new(full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        ClientRequestBuilder {
            http: self.http.clone(),
            builder,
        }
    }

    fn resolve_url(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                if url.is_empty() {
                    base.clone()
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            _ => url,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Inspect the request that would be sent.
    pub fn as_request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and buffer the full response.
    ///
    /// Non-2xx statuses are returned as a normal [`Response`]; use
    /// [`Response::error_for_status`] to turn them into errors.
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder {
            url,
            headers,
            body,
            timeout,
        } = self.builder;

        tracing::debug!(url = %url, "sending POST");

        let mut request = self.http.post(&url);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response};
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_base_url_joins_relative_paths() {
        let client = FetchClient::new().with_base_url("http://svc:8000/");
        let req = client.post("/api/search");
        assert_eq!(req.as_request().url(), "http://svc:8000/api/search");
    }

    #[test]
    fn test_absolute_url_bypasses_base() {
        let client = FetchClient::new().with_base_url("http://svc:8000");
        let req = client.post("https://other.example/x");
        assert_eq!(req.as_request().url(), "https://other.example/x");
    }

    #[test]
    fn test_empty_path_targets_base_url() {
        let client = FetchClient::new().with_base_url("http://svc:8000/api/search");
        let req = client.post("");
        assert_eq!(req.as_request().url(), "http://svc:8000/api/search");
    }

    #[test]
    fn test_default_headers_and_timeout_propagate() {
        let client = FetchClient::new()
            .with_default_header("Accept", "application/json")
            .with_timeout(Duration::from_secs(3));
        let req = client.post("http://svc");
        assert_eq!(req.as_request().header_value("Accept"), Some("application/json"));
        assert_eq!(req.as_request().timeout, Some(Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn test_post_json_round_trip() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/search")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({"query": "rtx"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true}"#)
            .expect(1)
            .create_async()
            .await;

        let client = FetchClient::new().with_base_url(server.url());
        let response = client
            .post("/api/search")
            .json(&serde_json::json!({"query": "rtx"}))
            .unwrap()
            .send()
            .await
            .unwrap();

        assert!(response.is_success());
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["ok"], true);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/search")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let client = FetchClient::new().with_base_url(server.url());
        let response = client.post("/api/search").send().await.unwrap();
        assert_eq!(response.status, 503);

        let err = response.error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        let client = FetchClient::new().with_timeout(Duration::from_secs(2));
        let err = client.post("http://127.0.0.1:9/").send().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::RequestError(_) | FetchError::Timeout
        ));
    }
}
