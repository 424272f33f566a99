//! Outbound search requests.
//!
//! One call to [`RequestDispatcher::dispatch`] issues exactly one GET and
//! routes the outcome: a 200 body is parsed and validated, anything else
//! becomes a request-level `SearchError`. There is no retry, queueing or
//! cancellation here; ordering of concurrent requests is the controller's job.

use std::sync::Arc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;
use textnext_core::error::{Result, SearchError};
use textnext_core::search::{HttpTransport, ValidatedBatch, validate};

/// Path of the search endpoint below the base URL.
pub const SEARCH_PATH: &str = "/search/api/query/";

/// Characters `encodeURIComponent` leaves untouched; everything else is escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds and issues search requests against one service.
#[derive(Clone)]
pub struct RequestDispatcher {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl RequestDispatcher {
    /// Creates a dispatcher for the service at `base_url` (scheme and host).
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `query` and `limit`.
    ///
    /// The query is sent as a JSON string literal (quotes included) and then
    /// percent-encoded, which is what the service expects.
    pub fn search_url(&self, query: &str, limit: u32) -> String {
        let json_query = Value::String(query.to_string()).to_string();
        format!(
            "{}{}?query={}&limit={}",
            self.base_url,
            SEARCH_PATH,
            utf8_percent_encode(&json_query, QUERY_COMPONENT),
            utf8_percent_encode(&limit.to_string(), QUERY_COMPONENT),
        )
    }

    /// Issues one search and validates the response.
    ///
    /// # Errors
    ///
    /// - `SearchError::Transport` for network failures and non-200 statuses
    /// - `SearchError::Parse` when a 200 body is not JSON
    /// - `SearchError::Schema` when the JSON is not an array
    pub async fn dispatch(&self, query: &str, limit: u32) -> Result<ValidatedBatch> {
        let url = self.search_url(query, limit);
        tracing::debug!(%url, "issuing search request");

        let response = self.transport.get(&url).await?;
        if !response.is_ok() {
            return Err(SearchError::http_status(response.status));
        }

        let payload: Value = serde_json::from_str(&response.body)?;
        let batch = validate(&payload)?;

        tracing::debug!(
            received = batch.received(),
            accepted = batch.records.len(),
            "search response validated"
        );
        Ok(batch)
    }
}
