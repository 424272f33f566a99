//! HTTP transport seam.

use async_trait::async_trait;

use crate::error::Result;

/// Status line and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only a 200 carries a search result; everything else is a failure.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Opaque async GET capability used by the request dispatcher.
///
/// Implementations must map network-level failures to
/// `SearchError::Transport` and return every received response, whatever
/// its status, as `Ok(HttpResponse)`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET for the fully-encoded `url`.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}
