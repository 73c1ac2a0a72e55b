//! Search error types.

use storefront_data::FetchError;
use thiserror::Error;

/// Errors that can occur while composing or executing a search.
///
/// None of these reach the render path: the controller collapses every
/// service failure into a degraded result.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The service could not be reached or did not answer in time.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Search service returned HTTP {status}")]
    Http { status: u16 },

    /// The response body could not be decoded into a search result.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A price bracket whose lower bound exceeds its upper bound.
    #[error("Invalid price range: {min} > {max}")]
    InvalidPriceRange { min: i64, max: i64 },

    /// A price bracket that is not of the form `min-max`.
    #[error("Unrecognized price range: {0}")]
    UnparsablePriceRange(String),

    /// The request payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SearchError {
    /// Short machine-readable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Transport(_) => "transport",
            SearchError::Http { .. } => "http",
            SearchError::MalformedResponse(_) => "malformed",
            SearchError::InvalidPriceRange { .. } => "invalid_price_range",
            SearchError::UnparsablePriceRange(_) => "unparsable_price_range",
            SearchError::Serialization(_) => "serialization",
        }
    }
}

impl From<FetchError> for SearchError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::HttpError { status, .. } => SearchError::Http { status },
            FetchError::ParseError(msg) => SearchError::MalformedResponse(msg),
            FetchError::JsonError(msg) => SearchError::Serialization(msg),
            FetchError::Timeout => SearchError::Transport("request timed out".to_string()),
            FetchError::RequestError(msg) | FetchError::InvalidUrl(msg) => {
                SearchError::Transport(msg)
            }
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::MalformedResponse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_map_onto_search_errors() {
        let err: SearchError = FetchError::HttpError {
            status: 502,
            message: "bad gateway".into(),
        }
        .into();
        assert!(matches!(err, SearchError::Http { status: 502 }));

        let err: SearchError = FetchError::Timeout.into();
        assert_eq!(err.kind(), "transport");

        let err: SearchError = FetchError::ParseError("eof".into()).into();
        assert_eq!(err.kind(), "malformed");
    }
}
