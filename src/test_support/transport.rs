use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::error::{network_error, SimilarWebResult};
use crate::client::{HttpRequest, HttpResponse, HttpTransport};

/// In-memory transport that records every request and answers with a canned reply.
#[derive(Debug)]
pub struct RecordingTransport {
    reply: Result<HttpResponse, String>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(HttpResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, request: HttpRequest) -> SimilarWebResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone().map_err(network_error)
    }
}
