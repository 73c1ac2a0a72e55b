//! Product search for the storefront.
//!
//! This crate holds everything between the search box and the rendered page:
//!
//! - **Catalog**: products as returned by the search service, including the
//!   Thai-keyed legacy schema
//! - **Search**: filter state, request composition, the service seam and the
//!   lifecycle controller
//! - **Highlight**: literal, case-insensitive query highlighting
//! - **Present**: view models for the results page
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_search::prelude::*;
//!
//! # async fn run() {
//! let config = SearchConfig::default();
//! let controller = SearchController::new(HttpSearchService::new(&config))
//!     .with_composer(QueryComposer::new().with_provider(LlmProvider::OpenAi));
//!
//! controller.filters().toggle_brand("Lenovo");
//! controller.submit("โน๊ตบุ๊คเล่นเกม").await;
//!
//! match present(&controller.snapshot()) {
//!     PageView::Results(view) => println!("{}", view.heading),
//!     other => println!("{}", other.name()),
//! }
//! # }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod highlight;
pub mod present;
pub mod search;

pub use error::SearchError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::SearchError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::Product;

    // Search
    pub use crate::search::{
        FilterAction, FilterSelection, FilterState, HttpSearchService, Lifecycle, LlmProvider,
        PriceRange, QueryComposer, RecommendationItem, SearchConfig, SearchController,
        SearchRequest, SearchResult, SearchService, SearchSnapshot, SubmitOutcome,
    };

    // Presentation
    pub use crate::highlight::{highlight, Highlighter, Segment};
    pub use crate::present::{present, PageView};
}
