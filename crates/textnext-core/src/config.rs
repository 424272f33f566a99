use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Backend the original deployment talks to.
pub const DEFAULT_BASE_URL: &str = "https://testtechnext1-pearl118.b4a.run";
/// Page limit a fresh session starts with.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
/// Amount "load more" adds to the page limit.
pub const DEFAULT_LIMIT_STEP: u32 = 10;

/// Client settings, read from `config.toml`.
///
/// Every field is optional in the file; missing ones fall back to the defaults above.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Scheme and host of the search service, without the endpoint path.
    pub base_url: String,
    pub initial_limit: u32,
    pub limit_step: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            initial_limit: DEFAULT_PAGE_LIMIT,
            limit_step: DEFAULT_LIMIT_STEP,
        }
    }
}

impl SearchConfig {
    /// Overrides the base URL (e.g. from a command line flag).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Rejects settings the session state machine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(SearchError::config("base_url must not be empty"));
        }
        if self.initial_limit == 0 {
            return Err(SearchError::config("initial_limit must be positive"));
        }
        if self.limit_step == 0 {
            return Err(SearchError::config("limit_step must be positive"));
        }
        Ok(())
    }
}
