use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use textnext_core::error::Result;
use textnext_core::search::{HttpResponse, HttpTransport};
use tokio::sync::oneshot;

// Answers every request with an empty array and records the requested limits
#[derive(Default)]
pub struct RecordingTransport {
    limits: Mutex<Vec<u32>>,
}

impl RecordingTransport {
    pub fn limits(&self) -> Vec<u32> {
        self.limits.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let limit = url
            .rsplit_once("limit=")
            .and_then(|(_, limit)| limit.parse().ok())
            .expect("url without limit");
        self.limits.lock().unwrap().push(limit);
        Ok(HttpResponse::new(200, "[]"))
    }
}

// Holds its single response until the test releases it
pub struct GatedTransport {
    gate: Mutex<Option<oneshot::Receiver<Result<HttpResponse>>>>,
}

impl GatedTransport {
    pub fn new() -> (Arc<Self>, oneshot::Sender<Result<HttpResponse>>) {
        let (tx, rx) = oneshot::channel();
        let transport = Arc::new(Self {
            gate: Mutex::new(Some(rx)),
        });
        (transport, tx)
    }
}

#[async_trait]
impl HttpTransport for GatedTransport {
    async fn get(&self, _url: &str) -> Result<HttpResponse> {
        let gate = self.gate.lock().unwrap().take().expect("unexpected request");
        gate.await.expect("gate dropped")
    }
}
