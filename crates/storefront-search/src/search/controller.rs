//! Search lifecycle.
//!
//! The controller owns one session's filter state and the state machine
//! `Idle -> Pending -> {Succeeded, Failed} -> Pending -> ...`. Each accepted
//! submission takes a sequence number; a response is applied only if its
//! number is still the latest, so a slow response can never overwrite a
//! newer one.

use crate::error::SearchError;
use crate::search::{
    FilterSelection, FilterState, QueryComposer, SearchRequest, SearchResult, SearchService,
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Where the current search stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lifecycle {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    Succeeded(SearchResult),
    /// The last search failed; holds the reason for logs only.
    Failed(String),
}

impl Lifecycle {
    pub fn name(&self) -> &'static str {
        match self {
            Lifecycle::Idle => "idle",
            Lifecycle::Pending => "pending",
            Lifecycle::Succeeded(_) => "succeeded",
            Lifecycle::Failed(_) => "failed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Lifecycle::Pending)
    }
}

/// A submission accepted by [`SearchController::begin`].
#[derive(Debug, Clone)]
pub struct Ticket {
    seq: u64,
    request: SearchRequest,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The request to send for this submission.
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank query; state untouched and nothing sent.
    Ignored,
    /// The response became the current state.
    Applied,
    /// A newer submission started first; the response was dropped.
    Superseded,
}

/// Immutable view of the controller handed to presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    pub state: Lifecycle,
    /// Trimmed text of the latest accepted submission.
    pub query: Option<String>,
    pub filters: FilterSelection,
}

impl SearchSnapshot {
    /// The result to render, if any. A failure shows as the degraded result.
    pub fn displayed_result(&self) -> Option<SearchResult> {
        match &self.state {
            Lifecycle::Succeeded(result) => Some(result.clone()),
            Lifecycle::Failed(_) => Some(SearchResult::degraded()),
            Lifecycle::Idle | Lifecycle::Pending => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_pending()
    }
}

#[derive(Debug, Default)]
struct Session {
    latest_seq: u64,
    state: Lifecycle,
    query: Option<String>,
}

/// Drives searches for one user session.
pub struct SearchController<S> {
    service: S,
    composer: QueryComposer,
    filters: FilterState,
    session: Mutex<Session>,
}

impl<S: SearchService> SearchController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            composer: QueryComposer::new(),
            filters: FilterState::new(),
            session: Mutex::new(Session::default()),
        }
    }

    pub fn with_composer(mut self, composer: QueryComposer) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// This session's filter state. Changes apply to the next submission.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn state(&self) -> Lifecycle {
        self.session().state.clone()
    }

    /// Trimmed text of the latest accepted submission.
    pub fn current_query(&self) -> Option<String> {
        self.session().query.clone()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        let session = self.session();
        SearchSnapshot {
            state: session.state.clone(),
            query: session.query.clone(),
            filters: self.filters.selection(),
        }
    }

    /// Accept a submission and move to `Pending`.
    ///
    /// Returns `None` for blank text, leaving the state as it was.
    pub fn begin(&self, text: &str) -> Option<Ticket> {
        let Some(request) = self.composer.compose(text, &self.filters.selection()) else {
            debug!("ignoring blank search submission");
            return None;
        };

        let mut session = self.session();
        session.latest_seq += 1;
        session.state = Lifecycle::Pending;
        session.query = Some(request.query.clone());
        info!(seq = session.latest_seq, query = %request.query, "search submitted");

        Some(Ticket {
            seq: session.latest_seq,
            request,
        })
    }

    /// Apply the outcome of `ticket`'s request unless a newer one has begun.
    pub fn resolve(
        &self,
        ticket: Ticket,
        outcome: Result<SearchResult, SearchError>,
    ) -> SubmitOutcome {
        let mut session = self.session();
        if ticket.seq != session.latest_seq {
            debug!(
                seq = ticket.seq,
                latest = session.latest_seq,
                "discarding stale search response"
            );
            return SubmitOutcome::Superseded;
        }

        session.state = match outcome {
            Ok(result) => {
                info!(
                    seq = ticket.seq,
                    products = result.products.len(),
                    "search succeeded"
                );
                Lifecycle::Succeeded(result)
            }
            Err(e) => {
                warn!(seq = ticket.seq, kind = e.kind(), error = %e, "search failed");
                Lifecycle::Failed(e.to_string())
            }
        };
        SubmitOutcome::Applied
    }

    /// Submit `text`: begin, call the service once, resolve.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let Some(ticket) = self.begin(text) else {
            return SubmitOutcome::Ignored;
        };
        let outcome = self.service.search(ticket.request()).await;
        self.resolve(ticket, outcome)
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
