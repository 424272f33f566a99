use crate::config::DEFAULT_PAGE_LIMIT;
use crate::search::SearchRecord;

/// Sequence number handed out for every issued request.
///
/// Tickets only grow, so the latest ticket identifies the request whose
/// response is allowed to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

/// State of one interactive search session.
///
/// Fields are read-only from the outside; all changes go through the named
/// operations below. A session is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySession {
    query_draft: Option<String>,
    last_submitted_query: Option<String>,
    page_limit: u32,
    results: Vec<SearchRecord>,
    loading: bool,
    latest_ticket: u64,
}

impl Default for QuerySession {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl QuerySession {
    /// Creates an empty session starting at `initial_limit`.
    pub fn new(initial_limit: u32) -> Self {
        Self {
            query_draft: None,
            last_submitted_query: None,
            page_limit: initial_limit,
            results: Vec::new(),
            loading: false,
            latest_ticket: 0,
        }
    }

    pub fn query_draft(&self) -> Option<&str> {
        self.query_draft.as_deref()
    }

    pub fn last_submitted_query(&self) -> Option<&str> {
        self.last_submitted_query.as_deref()
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub fn results(&self) -> &[SearchRecord] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Ticket of the most recently issued request, if any.
    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        (self.latest_ticket > 0).then_some(RequestTicket(self.latest_ticket))
    }

    /// Replaces the draft. Never affects anything else.
    pub fn set_query_draft(&mut self, text: impl Into<String>) {
        self.query_draft = Some(text.into());
    }

    /// Marks a new request as current and returns its ticket.
    ///
    /// Any request issued earlier is superseded from this point on.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest_ticket += 1;
        self.loading = true;
        RequestTicket(self.latest_ticket)
    }

    /// Whether a completion carrying `ticket` may still commit.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Commits a successful response.
    ///
    /// Returns `false` and leaves the session untouched when `ticket` has
    /// been superseded. The page limit never decreases.
    pub fn commit_success(
        &mut self,
        ticket: RequestTicket,
        query: impl Into<String>,
        limit: u32,
        records: Vec<SearchRecord>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.results = records;
        self.last_submitted_query = Some(query.into());
        self.page_limit = self.page_limit.max(limit);
        self.loading = false;
        true
    }

    /// Commits a failed request: only the loading flag changes.
    ///
    /// Returns `false` when `ticket` has been superseded.
    pub fn commit_failure(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }
}
