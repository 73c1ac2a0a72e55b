//! Search module.
//!
//! Filter state, request composition, the service seam, and the lifecycle
//! controller that ties them together.

mod config;
mod controller;
mod filter;
mod query;
mod results;
mod service;

pub use config::{SearchConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
pub use controller::{Lifecycle, SearchController, SearchSnapshot, SubmitOutcome, Ticket};
pub use filter::{
    FilterAction, FilterSelection, FilterState, PriceBucket, PriceRange, BRANDS, CPU_TYPES,
    PRICE_BUCKETS,
};
pub use query::{FilterPayload, LlmProvider, QueryComposer, SearchRequest};
pub use results::{decode_result, RecommendationItem, SearchResult, DEGRADED_EXPLANATION};
pub use service::{HttpSearchService, SearchService};
