//! Query session orchestration.
//!
//! The controller owns the [`QuerySession`] and is the only writer. The
//! session lives behind one async `RwLock`; the lock is released while a
//! request is in flight, so overlapping submits are possible. Each submit
//! takes a ticket before dispatching and only the holder of the latest ticket
//! may commit, which keeps a slow stale response from overwriting a newer one.

use textnext_core::config::SearchConfig;
use textnext_core::error::{Result, SearchError};
use textnext_core::session::QuerySession;
use tokio::sync::RwLock;

use crate::request_dispatcher::RequestDispatcher;

/// What happened to a submission that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The response replaced the result set.
    Committed {
        /// Elements in the response array
        received: usize,
        /// Elements that passed validation and are now displayed
        accepted: usize,
    },
    /// A newer request was issued before this one completed; its response
    /// (or failure) was discarded.
    Superseded,
}

/// Drives submit / load-more against a [`RequestDispatcher`].
pub struct QuerySessionController {
    session: RwLock<QuerySession>,
    dispatcher: RequestDispatcher,
    limit_step: u32,
}

impl QuerySessionController {
    /// Creates a controller with a fresh session sized by `config`.
    pub fn new(dispatcher: RequestDispatcher, config: &SearchConfig) -> Self {
        Self {
            session: RwLock::new(QuerySession::new(config.initial_limit)),
            dispatcher,
            limit_step: config.limit_step,
        }
    }

    /// Returns a copy of the current session for rendering.
    pub async fn snapshot(&self) -> QuerySession {
        self.session.read().await.clone()
    }

    /// Updates the draft query. Never issues a request.
    pub async fn set_query_draft(&self, text: impl Into<String>) {
        self.session.write().await.set_query_draft(text);
    }

    /// Submits `query` with page size `limit`.
    ///
    /// # Errors
    ///
    /// - `SearchError::ClientValidation` when `query` is `None` or `limit` is
    ///   zero; no request is issued and the session is unchanged.
    /// - Request-level errors (`Transport`, `Parse`, `Schema`) from the
    ///   current request. The loading flag is cleared and the previous results
    ///   stay in place.
    pub async fn submit(&self, query: Option<&str>, limit: u32) -> Result<SubmitOutcome> {
        let Some(query) = query else {
            tracing::warn!("No query specified");
            return Err(SearchError::client_validation("no query specified"));
        };
        if limit == 0 {
            return Err(SearchError::client_validation("limit must be positive"));
        }

        let ticket = self.session.write().await.begin_request();
        tracing::debug!(ticket = ticket.0, query, limit, "submitting search");

        let result = self.dispatcher.dispatch(query, limit).await;

        let mut session = self.session.write().await;
        match result {
            Ok(batch) => {
                let received = batch.received();
                let accepted = batch.records.len();
                if session.commit_success(ticket, query, limit, batch.records) {
                    tracing::debug!(ticket = ticket.0, received, accepted, "committed results");
                    Ok(SubmitOutcome::Committed { received, accepted })
                } else {
                    tracing::debug!(ticket = ticket.0, "discarding superseded response");
                    Ok(SubmitOutcome::Superseded)
                }
            }
            Err(err) => {
                if session.commit_failure(ticket) {
                    tracing::error!(ticket = ticket.0, error = %err, "unknown server error");
                    Err(err)
                } else {
                    tracing::debug!(ticket = ticket.0, error = %err, "discarding superseded failure");
                    Ok(SubmitOutcome::Superseded)
                }
            }
        }
    }

    /// Submits the current draft with the current page limit.
    pub async fn submit_draft(&self) -> Result<SubmitOutcome> {
        let (draft, limit) = {
            let session = self.session.read().await;
            (
                session.query_draft().map(str::to_string),
                session.page_limit(),
            )
        };
        self.submit(draft.as_deref(), limit).await
    }

    /// Re-submits the last committed query with a larger page limit.
    ///
    /// The new response replaces the result set; nothing is appended.
    ///
    /// # Errors
    ///
    /// `SearchError::ClientValidation` when no query has been committed yet,
    /// plus anything [`submit`](Self::submit) returns.
    pub async fn load_more(&self) -> Result<SubmitOutcome> {
        let (query, limit) = {
            let session = self.session.read().await;
            let Some(query) = session.last_submitted_query() else {
                return Err(SearchError::client_validation(
                    "nothing to load more of: no search has completed yet",
                ));
            };
            (
                query.to_string(),
                session.page_limit().saturating_add(self.limit_step),
            )
        };
        self.submit(Some(&query), limit).await
    }
}
