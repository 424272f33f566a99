//! reqwest-backed implementation of the search transport.

use async_trait::async_trait;
use reqwest::Client;
use textnext_core::error::{Result, SearchError};
use textnext_core::search::{HttpResponse, HttpTransport};

/// Issues search GETs with a shared `reqwest::Client`.
///
/// No timeout and no retry are configured: a request either completes or
/// fails at the network level.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client (proxy settings, custom headers, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| SearchError::network(format!("search request failed: {err}")))?;

        let status = response.status().as_u16();
        if status != 200 {
            // Error bodies are never interpreted.
            return Ok(HttpResponse::new(status, String::new()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| SearchError::network(format!("failed to read search response: {err}")))?;
        tracing::trace!(bytes = body.len(), "received search response");

        Ok(HttpResponse::new(status, body))
    }
}
