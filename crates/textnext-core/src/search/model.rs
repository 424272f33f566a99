//! Search domain models.

use crate::error::RecordShapeError;

/// A single search result as displayed.
///
/// Records coming off the wire are built by [`validate`](super::validate),
/// which checks field types and strips the `text`/`phase` padding. A record
/// built by hand is taken as already clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub id: i64,

    /// Description of the match, padding removed
    pub text: String,

    /// Opaque server-formatted date, never interpreted client-side
    pub date: String,

    /// Lifecycle label, padding removed
    pub phase: String,
}

/// Output of validating one response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedBatch {
    /// Accepted records in response order
    pub records: Vec<SearchRecord>,

    /// Elements that were dropped, in response order
    pub rejected: Vec<RecordShapeError>,
}

impl ValidatedBatch {
    /// Number of elements in the original response array.
    pub fn received(&self) -> usize {
        self.records.len() + self.rejected.len()
    }
}
